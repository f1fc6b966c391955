//! Order endpoints.

use crate::ShopApi;
use shop_commerce::checkout::{Order, OrderDraft, OrderQuery, Page};
use shop_commerce::ids::OrderId;
use shop_data::FetchError;

impl ShopApi {
    /// `POST /orders`, returns the new order number.
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<String, FetchError> {
        let number: String = self.client.post("/orders", draft).await?;
        tracing::info!(order_number = %number, total = %draft.total_amount, "Order created");
        Ok(number)
    }

    /// `GET /orders`, newest first.
    pub async fn list_orders(&self, query: &OrderQuery) -> Result<Page<Order>, FetchError> {
        self.client.get_with_query("/orders", query.to_query()).await
    }

    /// `GET /orders/{id}`
    pub async fn get_order(&self, id: OrderId) -> Result<Order, FetchError> {
        self.client.get(&format!("/orders/{}", id)).await
    }

    /// `GET /orders/number/{orderNumber}`
    pub async fn get_order_by_number(&self, order_number: &str) -> Result<Order, FetchError> {
        self.client
            .get(&format!("/orders/number/{}", order_number.trim()))
            .await
    }

    /// `DELETE /orders/{id}`
    pub async fn delete_order(&self, id: OrderId) -> Result<(), FetchError> {
        self.client.delete(&format!("/orders/{}", id)).await
    }
}
