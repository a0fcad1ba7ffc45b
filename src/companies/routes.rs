use axum::{
    middleware,
    routing::get,
    Router,
};

use super::handlers;
use crate::auth;

/// Creates the companies router. Every route sits behind the bearer-token
/// middleware.
pub fn companies_routes() -> Router {
    Router::new()
        .route(
            "/companies",
            get(handlers::view_companies).post(handlers::add_company),
        )
        .route("/companies/:company_id", get(handlers::companies_by_id))
        .route_layer(middleware::from_fn(auth::middleware::authenticate))
}
