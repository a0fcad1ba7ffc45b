// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod auth;
mod common;
mod companies;
mod jobs;
mod logging_middleware;
mod store;
mod trace_middleware;
mod users;

use auth::JwtIssuer;
use common::AppState;
use store::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://job_portal.db".to_string());
    let jwt_secret =
        env::var("JWT_SECRET").unwrap_or_else(|_| "replace_with_strong_secret".to_string());
    let jwt_issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "job-portal-service".to_string());
    let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(24);

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    let connect_options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    common::migrations::run_migrations(&pool).await?;

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let app_state = AppState {
        store: Arc::new(SqliteStore::new(pool)),
        tokens: Arc::new(JwtIssuer::new(jwt_secret, jwt_issuer, token_ttl_hours)),
    };

    let shared = Arc::new(app_state);

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        .merge(users::users_routes())
        .merge(companies::companies_routes())
        .merge(jobs::jobs_routes())
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared))
        // Trace ids must exist before anything downstream logs or replies.
        .layer(middleware::from_fn(trace_middleware::inject_trace_id))
        .layer({
            let cors_origins = env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".to_string());

            let origins: Vec<axum::http::HeaderValue> = cors_origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                    axum::http::HeaderName::from_static("x-request-id"),
                ])
                .allow_credentials(true)
        })
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
