//! Search service - Pokémon lookups
//!
//! Orchestrates lookups by:
//! - Compiling request parameters into a query document
//! - Skipping the backend when no query is meaningful
//! - Executing the query against the configured index
//! - Reshaping hits into response records

use crate::{backend::SearchBackend, metrics, Result};
use pokedex_query::{
    keyword_query, name_query, pokedex_number_query, reshape, Compile, Conditions, Param,
    PokemonRecord, SearchQuery,
};
use std::sync::Arc;
use std::time::Instant;

/// Kind of lookup, used for logs and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Random,
    PokedexNumber,
    Name,
    Keyword,
    Conditions,
}

impl Lookup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lookup::Random => "random",
            Lookup::PokedexNumber => "pokedex_number",
            Lookup::Name => "name",
            Lookup::Keyword => "keyword",
            Lookup::Conditions => "conditions",
        }
    }
}

/// Search service coordinates Pokémon lookups
pub struct SearchService {
    backend: Arc<dyn SearchBackend>,
    index: String,
}

impl SearchService {
    /// Create a new search service over `index`
    pub fn new(backend: Arc<dyn SearchBackend>, index: impl Into<String>) -> Self {
        Self {
            backend,
            index: index.into(),
        }
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Look up by National Pokédex Number.
    ///
    /// A value that is not an integer compiles to no query and returns an
    /// empty list without contacting the backend.
    pub async fn by_pokedex_number(&self, raw: &str) -> Result<Vec<PokemonRecord>> {
        self.run(Lookup::PokedexNumber, pokedex_number_query(Some(raw)))
            .await
    }

    /// Look up one number chosen by the caller (`GET /pokemon`).
    pub async fn by_random_number(&self, number: i64) -> Result<Vec<PokemonRecord>> {
        self.run(Lookup::Random, pokedex_number_query(Some(&number.to_string())))
            .await
    }

    /// Exact name lookup
    pub async fn by_name(&self, name: &str) -> Result<Vec<PokemonRecord>> {
        self.run(Lookup::Name, name_query(Some(name))).await
    }

    /// Free-text keyword lookup across names, forms, types and abilities
    pub async fn by_keyword(&self, keyword: &str) -> Result<Vec<PokemonRecord>> {
        self.run(Lookup::Keyword, Some(keyword_query(keyword))).await
    }

    /// Conditional lookup. No conditions at all browses every record.
    pub async fn by_conditions(&self, conditions: &Conditions) -> Result<Vec<PokemonRecord>> {
        let constrained: Vec<&str> = conditions
            .params()
            .iter()
            .filter(|param| param.compile().is_some())
            .map(Param::attribute)
            .collect();
        tracing::debug!(
            supplied = conditions.supplied(),
            constrained = ?constrained,
            "Assembling conditional query"
        );
        self.run(Lookup::Conditions, Some(conditions.to_query()))
            .await
    }

    async fn run(&self, lookup: Lookup, query: Option<SearchQuery>) -> Result<Vec<PokemonRecord>> {
        let label = lookup.as_str();

        let Some(query) = query else {
            tracing::debug!(lookup = label, "No query compiled, skipping backend");
            metrics::SEARCH_LOOKUPS_TOTAL
                .with_label_values(&[label, "skipped"])
                .inc();
            return Ok(Vec::new());
        };

        metrics::SEARCH_QUERY_CLAUSES
            .with_label_values(&[label])
            .observe(query.must().clauses().len() as f64);

        let start = Instant::now();
        let result = self.backend.search(&self.index, &query).await;
        metrics::SEARCH_BACKEND_DURATION_SECONDS
            .with_label_values(&[label])
            .observe(start.elapsed().as_secs_f64());

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                metrics::SEARCH_LOOKUPS_TOTAL
                    .with_label_values(&[label, "error"])
                    .inc();
                tracing::warn!(
                    lookup = label,
                    backend = self.backend.name(),
                    index = %self.index,
                    error = %e,
                    "Search backend call failed"
                );
                return Err(e);
            }
        };

        let records = reshape(response.into_hits());

        metrics::SEARCH_LOOKUPS_TOTAL
            .with_label_values(&[label, "success"])
            .inc();
        metrics::SEARCH_RESULTS
            .with_label_values(&[label])
            .observe(records.len() as f64);
        tracing::debug!(
            lookup = label,
            results = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "Lookup completed"
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;
    use pokedex_query::SearchResponse;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        queries: Mutex<Vec<(String, serde_json::Value)>>,
        fail: bool,
    }

    #[async_trait]
    impl SearchBackend for RecordingBackend {
        async fn search(&self, index: &str, query: &SearchQuery) -> Result<SearchResponse> {
            self.queries
                .lock()
                .unwrap()
                .push((index.to_string(), serde_json::to_value(query)?));
            if self.fail {
                return Err(Error::Backend("unavailable".into()));
            }
            Ok(SearchResponse::default())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_non_integer_number_skips_backend() {
        let backend = Arc::new(RecordingBackend::default());
        let service = SearchService::new(backend.clone(), "pokemon");

        let records = service.by_pokedex_number("test").await.unwrap();

        assert!(records.is_empty());
        assert!(backend.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_sent_to_configured_index() {
        let backend = Arc::new(RecordingBackend::default());
        let service = SearchService::new(backend.clone(), "pokemon_test");

        service.by_name("ミュウ").await.unwrap();

        let queries = backend.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].0, "pokemon_test");
        assert_eq!(
            queries[0].1,
            serde_json::json!({"query": {"bool": {"must": {"term": {"name": "ミュウ"}}}}})
        );
    }

    #[tokio::test]
    async fn test_empty_conditions_still_query_backend() {
        let backend = Arc::new(RecordingBackend::default());
        let service = SearchService::new(backend.clone(), "pokemon");

        service.by_conditions(&Conditions::default()).await.unwrap();

        let queries = backend.queries.lock().unwrap();
        assert_eq!(
            queries[0].1,
            serde_json::json!({"query": {"bool": {"must": []}}})
        );
    }

    #[tokio::test]
    async fn test_backend_error_is_propagated() {
        let backend = Arc::new(RecordingBackend {
            fail: true,
            ..Default::default()
        });
        let service = SearchService::new(backend, "pokemon");

        let err = service.by_keyword("でんき").await.unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
    }
}
