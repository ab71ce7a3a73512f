//! HTTP client and backend API for Shopfront.
//!
//! Provides a small builder-style client over `reqwest` with automatic JSON
//! handling, and the [`Backend`] trait the pages talk to.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_data::{Backend, Endpoints, HttpBackend};
//!
//! let backend = HttpBackend::new(Endpoints::default());
//!
//! let catalog = backend.load_products().await?;
//! backend.load_cart().await?;
//!
//! let order = backend.place_order(store.cart()).await?;
//! ```

mod backend;
mod client;
mod error;
mod response;

pub use backend::{Backend, Endpoints, HttpBackend, OrderRequest, StaticBackend};
pub use client::{FetchClient, RequestBuilder};
pub use error::FetchError;
pub use response::Response;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, Endpoints, FetchClient, FetchError, HttpBackend, Response, StaticBackend};
}
