//! Bearer-token authorization middleware for protected routes

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::common::context::TraceId;
use crate::common::{respond, AppState};

/// Validates the bearer token and attaches the parsed claims to the request.
///
/// Runs after the trace middleware. A missing trace id here is a wiring
/// error and is answered with a generic internal-error body before the
/// token is even read. Token rejections are uniform: the response never
/// says whether the header was missing, the token malformed, expired or
/// badly signed.
pub async fn authenticate(
    Extension(state): Extension<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(trace_id) = request.extensions().get::<TraceId>().cloned() else {
        error!("trace id missing from request context");
        return respond::WIRING_ERROR.into_response();
    };

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|h| h.strip_prefix("Bearer ").unwrap_or(h).to_string());

    let Some(token) = token else {
        warn!(trace_id = %trace_id, "missing Authorization header");
        return respond::UNAUTHORIZED.into_response();
    };

    match state.tokens.parse(&token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(kind) => {
            warn!(trace_id = %trace_id, kind = %kind, "bearer token rejected");
            respond::UNAUTHORIZED.into_response()
        }
    }
}
