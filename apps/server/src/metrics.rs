//! Metrics collection for the Pokédex server
//!
//! Prometheus metrics for HTTP traffic and search backend calls.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge_vec, HistogramVec,
    IntCounterVec, IntGaugeVec,
};

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "pokedex_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "pokedex_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "pokedex_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Search Metrics

    /// Lookups by kind and outcome (`success`, `error`, `skipped`)
    pub static ref SEARCH_LOOKUPS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "pokedex_search_lookups_total",
        "Total number of lookups by kind and outcome",
        &["lookup", "outcome"]
    )
    .expect("Failed to register SEARCH_LOOKUPS_TOTAL");

    /// Search backend round-trip duration
    pub static ref SEARCH_BACKEND_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "pokedex_search_backend_duration_seconds",
        "Search backend round-trip duration in seconds",
        &["lookup"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register SEARCH_BACKEND_DURATION_SECONDS");

    /// Records returned per lookup
    pub static ref SEARCH_RESULTS: HistogramVec = register_histogram_vec!(
        "pokedex_search_results",
        "Number of records returned by a lookup",
        &["lookup"],
        vec![0.0, 1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 500.0]
    )
    .expect("Failed to register SEARCH_RESULTS");

    /// Clauses in the assembled query
    pub static ref SEARCH_QUERY_CLAUSES: HistogramVec = register_histogram_vec!(
        "pokedex_search_query_clauses",
        "Number of clauses in the assembled query",
        &["lookup"],
        vec![0.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0]
    )
    .expect("Failed to register SEARCH_QUERY_CLAUSES");
}

/// Replace path parameters with placeholders to bound label cardinality.
///
/// `/pokemon/name/ピカチュウ` → `/pokemon/name/{name}`
pub fn sanitize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    let segments: Vec<&str> = trimmed.split('/').collect();

    match segments.as_slice() {
        ["", "pokemon", "name", _] => "/pokemon/name/{name}".to_string(),
        ["", "pokemon", "pokedex_number", _] => "/pokemon/pokedex_number/{pokedex_number}".to_string(),
        ["", "pokemon", "keyword", _] => "/pokemon/keyword/{keyword}".to_string(),
        ["", "pokemon"] | ["", "pokemon", "conditions"] | ["", "health"] | ["", "metrics"] => {
            trimmed.to_string()
        }
        [""] => "/".to_string(),
        _ => "/{other}".to_string(),
    }
}

/// Lookup kind of a `/pokemon` path, if any.
pub fn extract_lookup(path: &str) -> Option<&'static str> {
    let mut segments = path.trim_matches('/').split('/');
    if segments.next() != Some("pokemon") {
        return None;
    }
    match segments.next() {
        None | Some("") => Some("random"),
        Some("name") => Some("name"),
        Some("pokedex_number") => Some("pokedex_number"),
        Some("keyword") => Some("keyword"),
        Some("conditions") => Some("conditions"),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/"), "/");
        assert_eq!(sanitize_path("/pokemon"), "/pokemon");
        assert_eq!(sanitize_path("/pokemon/"), "/pokemon");
        assert_eq!(
            sanitize_path("/pokemon/name/ピカチュウ"),
            "/pokemon/name/{name}"
        );
        assert_eq!(
            sanitize_path("/pokemon/pokedex_number/25"),
            "/pokemon/pokedex_number/{pokedex_number}"
        );
        assert_eq!(sanitize_path("/pokemon/conditions"), "/pokemon/conditions");
        assert_eq!(sanitize_path("/wp-admin/setup.php"), "/{other}");
    }

    #[test]
    fn test_extract_lookup() {
        assert_eq!(extract_lookup("/pokemon"), Some("random"));
        assert_eq!(extract_lookup("/pokemon/keyword/でんき"), Some("keyword"));
        assert_eq!(extract_lookup("/pokemon/conditions"), Some("conditions"));
        assert_eq!(extract_lookup("/health"), None);
        assert_eq!(extract_lookup("/pokemon/unknown"), None);
    }
}
