//! Specification endpoints.

use crate::ShopApi;
use shop_commerce::catalog::{Specification, SpecificationInput};
use shop_commerce::ids::{ProductId, SpecificationId};
use shop_data::FetchError;

impl ShopApi {
    /// `GET /specifications/product/{productId}`
    pub async fn specifications_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Specification>, FetchError> {
        self.client
            .get(&format!("/specifications/product/{}", product_id))
            .await
    }

    /// `GET /specifications/{id}`
    pub async fn get_specification(
        &self,
        id: SpecificationId,
    ) -> Result<Specification, FetchError> {
        self.client.get(&format!("/specifications/{}", id)).await
    }

    /// `POST /specifications`
    pub async fn add_specification(&self, spec: &SpecificationInput) -> Result<(), FetchError> {
        self.client.post("/specifications", spec).await
    }

    /// `PUT /specifications/{id}`
    pub async fn update_specification(
        &self,
        id: SpecificationId,
        spec: &SpecificationInput,
    ) -> Result<(), FetchError> {
        self.client
            .put(&format!("/specifications/{}", id), spec)
            .await
    }

    /// `DELETE /specifications/{id}`
    pub async fn delete_specification(&self, id: SpecificationId) -> Result<(), FetchError> {
        self.client
            .delete(&format!("/specifications/{}", id))
            .await
    }
}
