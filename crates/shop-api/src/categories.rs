//! Category endpoints.

use crate::ShopApi;
use shop_commerce::catalog::{Category, CategoryInput};
use shop_commerce::ids::CategoryId;
use shop_data::FetchError;

impl ShopApi {
    /// `GET /categories`, already in display order.
    pub async fn all_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.client.get("/categories").await
    }

    /// `GET /categories/{id}`
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, FetchError> {
        self.client.get(&format!("/categories/{}", id)).await
    }

    /// `POST /categories`
    pub async fn add_category(&self, category: &CategoryInput) -> Result<(), FetchError> {
        self.client.post("/categories", category).await
    }

    /// `PUT /categories/{id}`
    pub async fn update_category(
        &self,
        id: CategoryId,
        category: &CategoryInput,
    ) -> Result<(), FetchError> {
        self.client
            .put(&format!("/categories/{}", id), category)
            .await
    }

    /// `DELETE /categories/{id}`
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), FetchError> {
        self.client.delete(&format!("/categories/{}", id)).await
    }

    /// `POST /categories/sort`. The position of each id becomes its sort order.
    pub async fn sort_categories(&self, ids: &[CategoryId]) -> Result<(), FetchError> {
        self.client.post("/categories/sort", ids).await
    }
}
