//! Typed wrappers over the ShopFront REST endpoints.
//!
//! [`ShopApi`] has one async method per endpoint. Paths are relative to the
//! client's base URL (`/api` behind the storefront's proxy). Every method
//! returns the unwrapped envelope payload; failures have already been
//! reported through the client's notifier by the time the error comes back.
//!
//! # Example
//!
//! ```rust,no_run
//! use shop_api::{ProductQuery, ShopApi};
//! use shop_data::{ApiClient, FetchClient};
//!
//! # async fn run() -> Result<(), shop_data::FetchError> {
//! let api = ShopApi::new(ApiClient::new(
//!     FetchClient::new().with_base_url("http://localhost:42835/api"),
//! ));
//!
//! let page = api.list_products(&ProductQuery::default()).await?;
//! for product in &page.records {
//!     println!("{} {}", product.name, product.sell_price);
//! }
//! # Ok(())
//! # }
//! ```

mod categories;
mod orders;
mod products;
mod specifications;
mod statistics;
mod upload;

pub use products::ProductQuery;
pub use upload::UPLOAD_FIELD;

use shop_data::ApiClient;

/// The REST service, one method per endpoint.
#[derive(Debug, Clone)]
pub struct ShopApi {
    client: ApiClient,
}

impl ShopApi {
    /// Wrap an envelope-aware client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ProductQuery, ShopApi};
    pub use shop_data::{ApiClient, FetchClient, FetchError, Notifier};
}
