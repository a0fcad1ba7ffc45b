use axum::{routing::post, Router};

use super::handlers;

/// Creates the users router. Registration and login run before any token
/// exists, so no auth layer here; the trace middleware still applies.
pub fn users_routes() -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}
