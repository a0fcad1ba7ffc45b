//! Middleware that gives every request a trace id
//!
//! The id comes from the `x-request-id` header when the client sent one,
//! otherwise a fresh UUID is minted. It is stored as a request extension for
//! handlers to pick up and echoed back on the response so clients can
//! correlate their logs with ours.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::common::context::TraceId;

pub const TRACE_HEADER: HeaderName = HeaderName::from_static("x-request-id");

pub async fn inject_trace_id(mut request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(&TRACE_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request.extensions_mut().insert(TraceId(trace_id.clone()));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_HEADER, value);
    }
    response
}
