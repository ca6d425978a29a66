//! Elasticsearch `_search` client

use crate::config::ElasticsearchConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use pokedex_query::{SearchQuery, SearchResponse};
use reqwest::Client;
use std::time::Duration;

use super::SearchBackend;

/// Client for the Elasticsearch REST API.
#[derive(Debug, Clone)]
pub struct ElasticsearchClient {
    client: Client,
    base_url: String,
}

impl ElasticsearchClient {
    /// Create a client from configuration.
    pub fn new(config: &ElasticsearchConfig) -> Result<Self> {
        Self::with_base_url(
            config.url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// Create a client for a custom base URL.
    pub fn with_base_url(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self, index: &str) -> String {
        format!("{}/{}/_search", self.base_url, urlencoding::encode(index))
    }
}

#[async_trait]
impl SearchBackend for ElasticsearchClient {
    async fn search(&self, index: &str, query: &SearchQuery) -> Result<SearchResponse> {
        let url = self.search_url(index);
        let response = self.client.post(&url).json(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Backend(format!(
                "search on index '{}' failed with status {}: {}",
                index, status, body
            )));
        }

        let results: SearchResponse = response.json().await?;
        Ok(results)
    }

    fn name(&self) -> &'static str {
        "elasticsearch"
    }
}
