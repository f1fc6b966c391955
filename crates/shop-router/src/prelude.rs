//! Prelude for convenient imports.
//!
//! ```rust
//! use shop_router::prelude::*;
//! ```

pub use crate::{RouteEntry, RouteMatch, RouteMeta, RouteRegistry, RouteTarget, Router, View};
