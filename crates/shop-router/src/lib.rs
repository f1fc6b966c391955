//! Storefront and admin route table for ShopFront.
//!
//! Routes are registered in order and matched segment by segment:
//!
//! ```text
//! /                    -> UserHome
//! /order-confirm       -> OrderConfirm
//! /goods/:id           -> ProductDetail
//! /manage              -> redirect /manage/home
//! /manage/home         -> ManageHome
//! /manage/products     -> ManageProducts
//! /manage/categories   -> ManageCategories
//! /manage/orders       -> ManageOrders
//! ```
//!
//! # Usage
//!
//! ```rust
//! use shop_router::prelude::*;
//!
//! let router = Router::storefront();
//! let route = router.resolve("/goods/42").unwrap();
//! assert_eq!(route.view, View::ProductDetail);
//! assert_eq!(route.param("id"), Some("42"));
//! ```

pub mod prelude;
mod route;

pub use route::*;
