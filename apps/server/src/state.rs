//! Shared application state

use crate::{
    backend::{ElasticsearchClient, SearchBackend},
    services::SearchService,
    Config, Result,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search_service: Arc<SearchService>,
}

impl AppState {
    /// Build state with an Elasticsearch backend from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let client = ElasticsearchClient::new(&config.elasticsearch)?;
        tracing::info!(
            url = %config.elasticsearch.url,
            index = %config.elasticsearch.index,
            timeout_seconds = config.elasticsearch.timeout_seconds,
            "Search backend configured"
        );
        Ok(Self::with_backend(config, Arc::new(client)))
    }

    /// Build state over any backend (used by tests and embedders).
    pub fn with_backend(config: Config, backend: Arc<dyn SearchBackend>) -> Self {
        let search_service = Arc::new(SearchService::new(
            backend,
            config.elasticsearch.index.clone(),
        ));
        Self {
            config: Arc::new(config),
            search_service,
        }
    }
}
