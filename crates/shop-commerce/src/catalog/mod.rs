//! Product catalog module.
//!
//! Contains types for products, categories, and specifications as the
//! REST service returns them, plus the input payloads used to create or
//! update them.

mod category;
mod product;
mod specification;

pub use category::{Category, CategoryInput};
pub use product::{Product, ProductInput};
pub use specification::{Specification, SpecificationInput};
