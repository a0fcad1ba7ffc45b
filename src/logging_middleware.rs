// src/logging_middleware.rs
//! Middleware for logging one summary line per request

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

use crate::common::context::TraceId;

/// Logs method, path, status and elapsed time for every request, tagged
/// with the trace id the trace middleware injected. Bodies are never
/// logged; they carry credentials.
pub async fn log_request_response(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let trace_id = request
        .extensions()
        .get::<TraceId>()
        .map(|t| t.0.clone())
        .unwrap_or_default();

    let started = Instant::now();
    let response = next.run(request).await;

    debug!(
        method = %method,
        uri = %uri,
        trace_id = %trace_id,
        status = %response.status(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );

    response
}
