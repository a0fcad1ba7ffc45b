//! Company handlers
//!
//! Every handler follows the same shape: trace check first (family
//! internal-error body), claims check second (uniform Unauthorized), then
//! input decoding, then the service call, with the outcome mapped through
//! the tables in `common::respond`.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info, warn};

use super::models::NewCompany;
use super::service::CompaniesService;
use super::validators;
use crate::auth::RequestContext;
use crate::common::{respond, AppState};

/// POST /companies (authenticated)
///
/// # Request Body
/// ```json
/// { "companyName": "...", "foundedYear": 2019, "location": "...", "address": "..." }
/// ```
pub async fn add_company(
    Extension(state): Extension<Arc<AppState>>,
    ctx: RequestContext,
    body: Option<Json<NewCompany>>,
) -> Response {
    let Some(trace_id) = ctx.trace_id else {
        return respond::ADD_COMPANY.wiring.into_response();
    };
    let Some(claims) = ctx.claims else {
        return respond::UNAUTHORIZED.into_response();
    };

    let nc = match body {
        Some(Json(nc)) if validators::validate_new_company(&nc) => nc,
        _ => {
            warn!(trace_id = %trace_id, "company creation rejected: incomplete details");
            return respond::ADD_COMPANY.bad_input.into_response();
        }
    };

    let service = CompaniesService::new(state.store.clone());
    match service.create(&claims.sub, nc).await {
        Ok(company) => {
            info!(trace_id = %trace_id, company_id = company.id, "company created");
            (StatusCode::CREATED, Json(company)).into_response()
        }
        Err(e) => {
            error!(trace_id = %trace_id, error = %e, "company creation failed");
            respond::ADD_COMPANY.service.into_response()
        }
    }
}

/// GET /companies (authenticated) - public listing of all companies
pub async fn view_companies(
    Extension(state): Extension<Arc<AppState>>,
    ctx: RequestContext,
) -> Response {
    let Some(trace_id) = ctx.trace_id else {
        return respond::VIEW_COMPANIES.wiring.into_response();
    };
    if ctx.claims.is_none() {
        return respond::UNAUTHORIZED.into_response();
    }

    let service = CompaniesService::new(state.store.clone());
    match service.list_all().await {
        Ok(companies) => {
            (StatusCode::OK, Json(json!({ "companies list": companies }))).into_response()
        }
        Err(e) => {
            error!(trace_id = %trace_id, error = %e, "company listing failed");
            respond::VIEW_COMPANIES.service.into_response()
        }
    }
}

/// GET /companies/:company_id (authenticated) - owner-scoped lookup
pub async fn companies_by_id(
    Extension(state): Extension<Arc<AppState>>,
    ctx: RequestContext,
    Path(company_id): Path<String>,
) -> Response {
    let Some(trace_id) = ctx.trace_id else {
        return respond::COMPANIES_BY_ID.wiring.into_response();
    };
    let Some(claims) = ctx.claims else {
        return respond::UNAUTHORIZED.into_response();
    };

    let Ok(company_id) = company_id.parse::<i64>() else {
        warn!(trace_id = %trace_id, raw = %company_id, "unparseable company id");
        return respond::COMPANIES_BY_ID.bad_input.into_response();
    };

    let service = CompaniesService::new(state.store.clone());
    match service.by_owner(company_id, &claims.sub).await {
        Ok(companies) => (StatusCode::OK, Json(companies)).into_response(),
        Err(e) => {
            error!(trace_id = %trace_id, error = %e, company_id, "company lookup failed");
            respond::COMPANIES_BY_ID.service.into_response()
        }
    }
}
