// Shared helpers for handler tests.
//
// Handler tests invoke the handler functions directly with hand-built
// extractor values, so middleware can be selectively left out to exercise
// the defensive checks at the handler boundary.

use std::sync::Arc;

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::Response;

use crate::auth::extractors::RequestContext;
use crate::auth::models::Claims;
use crate::auth::token::JwtIssuer;
use crate::common::context::TraceId;
use crate::common::AppState;
use crate::store::mock::MockStore;

pub const TEST_ISSUER: &str = "job-portal-service";

pub async fn response_parts(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

/// Context as left by the trace middleware only: trace id, no claims.
pub fn traced_ctx() -> RequestContext {
    RequestContext {
        trace_id: Some(TraceId("123".to_string())),
        claims: None,
    }
}

/// Context as left by the full middleware chain for the given subject.
pub fn authed_ctx(subject: &str) -> RequestContext {
    RequestContext {
        trace_id: Some(TraceId("123".to_string())),
        claims: Some(Claims {
            sub: subject.to_string(),
            iss: TEST_ISSUER.to_string(),
            jti: "test-token-id".to_string(),
            iat: 0,
            exp: 0,
        }),
    }
}

pub fn state_with(store: MockStore) -> Arc<AppState> {
    Arc::new(AppState {
        store: Arc::new(store),
        tokens: Arc::new(JwtIssuer::new(
            "test_secret".to_string(),
            TEST_ISSUER.to_string(),
            1,
        )),
    })
}
