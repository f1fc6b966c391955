//! Storefront domain types and the persisted shopping cart for ShopFront.
//!
//! This crate provides the types the storefront and admin tools share:
//!
//! - **Catalog**: Products, categories, specifications
//! - **Cart**: Line items, totals, and the write-through [`CartStore`]
//! - **Checkout**: Orders, order drafts, paging
//! - **Statistics**: Revenue series and best sellers
//!
//! # Example
//!
//! ```rust
//! use shop_cache::MemoryStore;
//! use shop_commerce::prelude::*;
//!
//! let product = Product::new(ProductId::new(1), "Green Tea", Price::from(10));
//! let spec = Specification::new(SpecificationId::new(9), product.id, "500g");
//!
//! let mut cart = CartStore::open(MemoryStore::new());
//! cart.add_to_cart(&product, Some(&spec), 2, "Drinks");
//! cart.add_to_cart(&product, Some(&spec), 3, "");
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_count(), 5);
//! assert_eq!(cart.total_price(), Price::from(50));
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod time;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod statistics;

pub use cart::{CartStore, LineItem, LineItemKey};
pub use error::CommerceError;
pub use ids::*;
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Price;

    // Catalog
    pub use crate::catalog::{
        Category, CategoryInput, Product, ProductInput, Specification, SpecificationInput,
    };

    // Cart
    pub use crate::cart::{CartStore, CartTotals, LineItem, LineItemKey, CART_STORAGE_KEY};

    // Checkout
    pub use crate::checkout::{Order, OrderDraft, OrderEntry, OrderQuery, Page};

    // Statistics
    pub use crate::statistics::{HotProduct, RevenueMode, RevenuePoint, RevenueStatistics};
}
