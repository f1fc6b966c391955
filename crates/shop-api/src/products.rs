//! Product endpoints.

use crate::ShopApi;
use shop_commerce::catalog::{Product, ProductInput};
use shop_commerce::checkout::Page;
use shop_commerce::ids::{CategoryId, ProductId};
use shop_data::FetchError;

/// Filters for the paged product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category_id: Option<CategoryId>,
    pub page_num: u32,
    pub page_size: u32,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category_id: None,
            page_num: 1,
            page_size: 10,
        }
    }
}

impl ProductQuery {
    /// Restrict to one category.
    pub fn in_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(3);
        if let Some(category_id) = self.category_id {
            query.push(("categoryId", category_id.to_string()));
        }
        query.push(("pageNum", self.page_num.to_string()));
        query.push(("pageSize", self.page_size.to_string()));
        query
    }
}

impl ShopApi {
    /// `GET /products`
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Page<Product>, FetchError> {
        self.client
            .get_with_query("/products", query.to_query())
            .await
    }

    /// `GET /products/all`
    pub async fn all_products(&self) -> Result<Vec<Product>, FetchError> {
        self.client.get("/products/all").await
    }

    /// `GET /products/{id}`
    pub async fn get_product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.client.get(&format!("/products/{}", id)).await
    }

    /// `POST /products`, returns the stored product.
    pub async fn add_product(&self, product: &ProductInput) -> Result<Product, FetchError> {
        self.client.post("/products", product).await
    }

    /// `PUT /products/{id}`
    pub async fn update_product(
        &self,
        id: ProductId,
        product: &ProductInput,
    ) -> Result<(), FetchError> {
        self.client.put(&format!("/products/{}", id), product).await
    }

    /// `DELETE /products/{id}`
    pub async fn delete_product(&self, id: ProductId) -> Result<(), FetchError> {
        self.client.delete(&format!("/products/{}", id)).await
    }
}
