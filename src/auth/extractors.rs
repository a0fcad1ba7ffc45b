//! Request-context extractor for Axum

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use super::models::Claims;
use crate::common::context::TraceId;

/// Request-scoped values injected by the middleware chain.
///
/// Extraction never fails: handlers check the fields themselves, so a
/// bypassed middleware produces the contract's own rejection bodies (family
/// internal error for a missing trace id, uniform Unauthorized for missing
/// claims) instead of an extractor rejection.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub trace_id: Option<TraceId>,
    pub claims: Option<Claims>,
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            trace_id: parts.extensions.get::<TraceId>().cloned(),
            claims: parts.extensions.get::<Claims>().cloned(),
        })
    }
}
