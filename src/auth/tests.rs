//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - JWT issue/parse round-trips
//! - Token failure classification
//! - Password hashing and verification

#[cfg(test)]
mod tests {
    use super::super::password::{hash_password, verify_password};
    use super::super::token::{JwtIssuer, TokenError, TokenIssuer};

    fn issuer(secret: &str, ttl_hours: i64) -> JwtIssuer {
        JwtIssuer::new(secret.to_string(), "job-portal-service".to_string(), ttl_hours)
    }

    #[test]
    fn round_trip_recovers_issued_identity() {
        let issuer = issuer("test_secret_key", 24);

        let signed = issuer.issue("42").expect("issue token");
        let claims = issuer.parse(&signed.token).expect("parse token");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, "job-portal-service");
        assert!(!claims.jti.is_empty());
        assert_eq!(claims.exp as i64, signed.expires_at);
    }

    #[test]
    fn each_issued_token_gets_a_fresh_id() {
        let issuer = issuer("test_secret_key", 24);

        let a = issuer.parse(&issuer.issue("1").unwrap().token).unwrap();
        let b = issuer.parse(&issuer.issue("1").unwrap().token).unwrap();

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        // Negative TTL puts the expiry an hour in the past, well beyond the
        // validation leeway.
        let issuer = issuer("test_secret_key", -1);

        let signed = issuer.issue("42").expect("issue token");
        assert_eq!(issuer.parse(&signed.token), Err(TokenError::Expired));
    }

    #[test]
    fn wrong_secret_is_rejected_as_bad_signature() {
        let signing = issuer("test_secret_key", 24);
        let verifying = issuer("some_other_key", 24);

        let signed = signing.issue("42").expect("issue token");
        assert_eq!(
            verifying.parse(&signed.token),
            Err(TokenError::SignatureInvalid)
        );
    }

    #[test]
    fn garbage_token_is_rejected_as_malformed() {
        let issuer = issuer("test_secret_key", 24);

        assert_eq!(issuer.parse("not-a-jwt"), Err(TokenError::Malformed));
        assert_eq!(issuer.parse(""), Err(TokenError::Malformed));
    }

    #[test]
    fn password_round_trip() {
        let hash = hash_password("password123").expect("hash password");

        assert!(verify_password("password123", &hash));
        assert!(!verify_password("password124", &hash));
    }

    #[test]
    fn malformed_stored_hash_is_a_mismatch_not_an_error() {
        assert!(!verify_password("password123", "definitely-not-a-bcrypt-hash"));
        assert!(!verify_password("password123", ""));
    }
}

#[cfg(test)]
mod middleware_tests {
    use axum::{
        body::Body, extract::Request, http::StatusCode, middleware, routing::get, Extension,
        Router,
    };
    use tower::ServiceExt;

    use super::super::middleware::authenticate;
    use super::super::RequestContext;
    use crate::common::context::TraceId;
    use crate::common::testing::{response_parts, state_with};
    use crate::store::mock::MockStore;

    async fn whoami(ctx: RequestContext) -> String {
        ctx.claims.map(|c| c.sub).unwrap_or_default()
    }

    fn app() -> Router {
        let state = state_with(MockStore::new());
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(middleware::from_fn(authenticate))
            .layer(Extension(state))
    }

    fn bearer_token() -> String {
        let state = state_with(MockStore::new());
        state.tokens.issue("7").expect("issue token").token
    }

    #[tokio::test]
    async fn missing_trace_id_is_a_wiring_error_even_with_a_valid_token() {
        let request = Request::builder()
            .uri("/whoami")
            .header("authorization", format!("Bearer {}", bearer_token()))
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        let (status, body) = response_parts(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Internal Server Error"}"#);
    }

    #[tokio::test]
    async fn missing_header_and_bad_token_are_indistinguishable() {
        let no_header = Request::builder()
            .uri("/whoami")
            .extension(TraceId("123".to_string()))
            .body(Body::empty())
            .unwrap();
        let (status, body) = response_parts(app().oneshot(no_header).await.unwrap()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"Unauthorized"}"#);

        let bad_token = Request::builder()
            .uri("/whoami")
            .extension(TraceId("123".to_string()))
            .header("authorization", "Bearer not-a-jwt")
            .body(Body::empty())
            .unwrap();
        let (status, body) = response_parts(app().oneshot(bad_token).await.unwrap()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, r#"{"error":"Unauthorized"}"#);
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler_with_its_subject() {
        let request = Request::builder()
            .uri("/whoami")
            .extension(TraceId("123".to_string()))
            .header("authorization", format!("Bearer {}", bearer_token()))
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        let (status, body) = response_parts(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "7");
    }
}
