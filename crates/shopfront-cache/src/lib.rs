//! Type-safe key-value storage layer for Shopfront.
//!
//! Mirrors the browser's local storage: string values under string keys,
//! with automatic JSON serialization on top.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_cache::{Cache, FileStore};
//!
//! let cache = Cache::new(FileStore::new(".shopfront/storage.json"));
//!
//! // Store a value
//! cache.set("cart", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Cart> = cache.get("cart")?;
//!
//! // Delete a value
//! cache.delete("cart")?;
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
