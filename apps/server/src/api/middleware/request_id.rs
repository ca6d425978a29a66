//! Request ID middleware with OpenTelemetry trace context

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use opentelemetry::trace::TraceContextExt;
use std::time::Instant;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use uuid::Uuid;

use crate::request_context::RequestContext;

/// Creates the root span for each HTTP request and:
/// - Generates a server request ID (`x-request-id` on the response)
/// - Echoes a differing client ID back as `x-correlation-id`
/// - Adds the trace ID as `x-trace-id`
/// - Records the lookup kind for `/pokemon` routes
#[tracing::instrument(
    name = "http_request",
    skip_all,
    fields(
        http.method = %req.method(),
        http.route = %req.uri().path(),
        otel.kind = "server",
        http.response.status_code = tracing::field::Empty,
        pokedex.lookup = tracing::field::Empty,
        request_id = tracing::field::Empty,
    )
)]
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let span = Span::current();
    let start = Instant::now();

    let client_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let server_id = Uuid::new_v4().to_string();
    span.record("request_id", &server_id);

    let path = req.uri().path().to_string();
    let method = req.method().clone();
    let lookup = crate::metrics::extract_lookup(&path);
    if let Some(lookup) = lookup {
        span.record("pokedex.lookup", lookup);
    }

    req.extensions_mut().insert(RequestContext {
        request_id: server_id.clone(),
        lookup,
    });

    let mut response = next.run(req).await;

    let status = response.status();
    span.record("http.response.status_code", status.as_u16());

    tracing::info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        duration_ms = start.elapsed().as_millis(),
        request_id = %server_id,
        "Request completed"
    );

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&server_id) {
        headers.insert("x-request-id", value);
    }

    let trace_id = span.context().span().span_context().trace_id().to_string();
    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        headers.insert("x-trace-id", value);
    }

    if let Some(client_id) = client_id.filter(|id| *id != server_id) {
        if let Ok(value) = HeaderValue::from_str(&client_id) {
            headers.insert("x-correlation-id", value);
        }
    }

    response
}
