pub mod fixtures;

use anyhow::Context as _;
use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use pokedex_query::{Clause, PokemonDocument, SearchHit, SearchQuery, SearchResponse};
use pokedex_server::{api::create_router, backend::SearchBackend, AppState, Config, Error};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt as _;

pub use fixtures::*;

/// In-memory search backend over a fixed set of documents.
///
/// Evaluates `term` clauses as exact matches and `multi_match` clauses as a
/// substring match on any listed field. Records every query it receives.
#[derive(Default)]
pub struct InMemoryBackend {
    documents: Vec<PokemonDocument>,
    queries: Mutex<Vec<(String, Value)>>,
    unavailable: bool,
}

impl InMemoryBackend {
    pub fn new(documents: Vec<PokemonDocument>) -> Self {
        Self {
            documents,
            ..Default::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<(String, Value)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchBackend for InMemoryBackend {
    async fn search(
        &self,
        index: &str,
        query: &SearchQuery,
    ) -> pokedex_server::Result<SearchResponse> {
        self.queries
            .lock()
            .unwrap()
            .push((index.to_string(), serde_json::to_value(query)?));

        if self.unavailable {
            return Err(Error::Backend("connection refused".to_string()));
        }

        let mut hits = Vec::new();
        for doc in &self.documents {
            let source = serde_json::to_value(doc)?;
            if query.must().clauses().iter().all(|c| matches(c, &source)) {
                hits.push(SearchHit { source: doc.clone() });
            }
        }
        Ok(SearchResponse::from_hits(hits))
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

fn field_value<'a>(source: &'a Value, field: &str) -> Option<&'a Value> {
    field
        .trim_end_matches(".keyword")
        .split('.')
        .try_fold(source, |value, key| value.get(key))
}

fn matches(clause: &Clause, source: &Value) -> bool {
    match clause {
        Clause::Term { field, value } => {
            let expected = serde_json::to_value(value).unwrap_or(Value::Null);
            field_value(source, field) == Some(&expected)
        }
        Clause::MultiMatch { query, fields, .. } => fields.iter().any(|field| {
            field_value(source, field)
                .and_then(Value::as_str)
                .is_some_and(|text| text.contains(query.as_str()))
        }),
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub backend: Arc<InMemoryBackend>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_backend(InMemoryBackend::new(pokedex()), |_| {})
    }

    pub fn with_backend(backend: InMemoryBackend, configure: impl FnOnce(&mut Config)) -> Self {
        let mut config = Config::default();
        configure(&mut config);

        let backend = Arc::new(backend);
        let state = AppState::with_backend(config, backend.clone());
        let router = create_router(state.clone());

        Self {
            router,
            state,
            backend,
        }
    }

    pub async fn get(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request(Method::GET, path_and_query, &[]).await
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut builder = Request::builder()
            .method(method)
            .uri(encode_non_ascii(path_and_query));
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).context("build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }

    /// GET `path_and_query` and decode the JSON body.
    pub async fn get_json(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, Value)> {
        let (status, _, body) = self.get(path_and_query).await?;
        let value = serde_json::from_slice(&body)
            .with_context(|| format!("decode JSON body of {path_and_query}"))?;
        Ok((status, value))
    }
}

/// Percent-encode the non-ASCII characters of a path and query.
fn encode_non_ascii(path_and_query: &str) -> String {
    path_and_query
        .chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_string()
            } else {
                urlencoding::encode(c.encode_utf8(&mut [0; 4])).into_owned()
            }
        })
        .collect()
}

/// Names of the records in a lookup response, in order.
pub fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .map(|records| {
            records
                .iter()
                .filter_map(|r| r.get("name").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}
