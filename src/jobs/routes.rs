use axum::{
    middleware,
    routing::get,
    Router,
};

use super::handlers;
use crate::auth;

/// Creates the jobs router. Every route sits behind the bearer-token
/// middleware.
pub fn jobs_routes() -> Router {
    Router::new()
        .route("/jobs", get(handlers::all_jobs))
        .route("/jobs/:job_id", get(handlers::job_by_id))
        .route(
            "/companies/:company_id/jobs",
            get(handlers::jobs_by_company).post(handlers::create_job),
        )
        .route_layer(middleware::from_fn(auth::middleware::authenticate))
}
