//! Durable key-value storage for ShopFront clients.
//!
//! Plays the role browser local storage plays for the web storefront: a
//! flat string-to-string store that survives restarts, plus a typed
//! wrapper with automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_cache::{Cache, FileStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Preferences {
//!     last_category: Option<i64>,
//! }
//!
//! let cache = Cache::new(FileStore::open("/var/lib/shop")?);
//!
//! // Store a value
//! cache.set("prefs", &prefs)?;
//!
//! // Retrieve a value
//! let prefs: Option<Preferences> = cache.get("prefs")?;
//!
//! // Delete a value
//! cache.delete("prefs")?;
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
