//! Checkout module.
//!
//! Contains order types, the order payload built from a cart, order list
//! queries, and the service's paging envelope.

mod order;
mod paging;

pub use order::{Order, OrderDraft, OrderEntry, OrderQuery, NOTES_KEY, QUANTITY_FIELD, SPEC_ID_FIELD};
pub use paging::Page;
