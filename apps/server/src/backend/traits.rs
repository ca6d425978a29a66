//! Core trait for search backends

use crate::Result;
use async_trait::async_trait;
use pokedex_query::{SearchQuery, SearchResponse};

/// A document-search engine that executes assembled queries.
///
/// Implementations neither retry nor reinterpret the query; failures are
/// returned to the caller as-is.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run `query` against `index` and return the raw hits
    ///
    /// # Arguments
    /// * `index` - Name of the index to search
    /// * `query` - Full request body
    async fn search(&self, index: &str, query: &SearchQuery) -> Result<SearchResponse>;

    /// Short name used in logs and metrics
    fn name(&self) -> &'static str;
}
