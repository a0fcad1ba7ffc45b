//! Registration and login handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, info, warn};

use super::models::{LoginRequest, NewUser};
use super::service::UsersService;
use super::validators;
use crate::auth::RequestContext;
use crate::common::{respond, AppState};

/// POST /register
///
/// # Request Body
/// ```json
/// { "name": "...", "email": "...", "password": "..." }
/// ```
///
/// Responds 201 with the created user (password hash never serialized).
pub async fn register(
    Extension(state): Extension<Arc<AppState>>,
    ctx: RequestContext,
    body: Option<Json<NewUser>>,
) -> Response {
    let Some(trace_id) = ctx.trace_id else {
        return respond::REGISTER.wiring.into_response();
    };

    let nu = match body {
        Some(Json(nu)) if validators::validate_new_user(&nu) => nu,
        _ => {
            warn!(trace_id = %trace_id, "registration rejected: missing required fields");
            return respond::REGISTER.bad_input.into_response();
        }
    };

    let service = UsersService::new(state.store.clone(), state.tokens.clone());
    match service.register(nu).await {
        Ok(user) => {
            info!(trace_id = %trace_id, user_id = user.id, "user registered");
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(e) => {
            error!(trace_id = %trace_id, error = %e, "user registration failed");
            respond::REGISTER.service.into_response()
        }
    }
}

/// POST /login
///
/// Responds 200 with `{"token": ...}`; every failure mode is the same
/// 401 login-failed body.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    ctx: RequestContext,
    body: Option<Json<LoginRequest>>,
) -> Response {
    let Some(trace_id) = ctx.trace_id else {
        return respond::LOGIN.wiring.into_response();
    };

    let Some(Json(req)) = body else {
        warn!(trace_id = %trace_id, "login rejected: unreadable body");
        return respond::LOGIN.bad_input.into_response();
    };

    let service = UsersService::new(state.store.clone(), state.tokens.clone());
    match service.authenticate(&req.email, &req.password).await {
        Ok(signed) => {
            info!(trace_id = %trace_id, "login succeeded");
            (StatusCode::OK, Json(json!({ "token": signed.token }))).into_response()
        }
        Err(e) => {
            warn!(trace_id = %trace_id, error = %e, "login failed");
            respond::LOGIN.service.into_response()
        }
    }
}
