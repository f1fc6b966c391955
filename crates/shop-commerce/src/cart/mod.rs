//! Shopping cart module.
//!
//! Contains the line item type, cart totals, and the persisted cart store.

mod cart;
mod pricing;
mod store;

pub use cart::{LineItem, LineItemKey};
pub use pricing::CartTotals;
pub use store::{CartStore, CART_STORAGE_KEY};
