//! Search backend access
//!
//! The service talks to its document store only through [`SearchBackend`].
//! [`ElasticsearchClient`] is the production implementation.

pub mod elasticsearch;
pub mod traits;

pub use elasticsearch::ElasticsearchClient;
pub use traits::SearchBackend;
