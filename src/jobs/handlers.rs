//! Job handlers
//!
//! Same shape as the company handlers: trace check, claims check, input
//! decoding, service call, with outcomes mapped through `common::respond`.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};

use super::models::NewJob;
use super::service::JobsService;
use crate::auth::RequestContext;
use crate::common::{respond, AppState};

/// POST /companies/:company_id/jobs (authenticated)
///
/// # Request Body
/// ```json
/// { "title": "...", "description": "..." }
/// ```
pub async fn create_job(
    Extension(state): Extension<Arc<AppState>>,
    ctx: RequestContext,
    Path(company_id): Path<String>,
    body: Option<Json<NewJob>>,
) -> Response {
    let Some(trace_id) = ctx.trace_id else {
        return respond::CREATE_JOB.wiring.into_response();
    };
    let Some(claims) = ctx.claims else {
        return respond::UNAUTHORIZED.into_response();
    };

    let Ok(company_id) = company_id.parse::<i64>() else {
        warn!(trace_id = %trace_id, raw = %company_id, "unparseable company id");
        return respond::CREATE_JOB.bad_input.into_response();
    };
    let Some(Json(nj)) = body else {
        warn!(trace_id = %trace_id, "job creation rejected: unreadable body");
        return respond::CREATE_JOB.bad_input.into_response();
    };

    let service = JobsService::new(state.store.clone());
    match service.create(&claims.sub, company_id, nj).await {
        Ok(job) => {
            info!(trace_id = %trace_id, job_id = job.id, company_id, "job created");
            (StatusCode::CREATED, Json(job)).into_response()
        }
        Err(e) => {
            error!(trace_id = %trace_id, error = %e, company_id, "job creation failed");
            respond::CREATE_JOB.service.into_response()
        }
    }
}

/// GET /jobs (authenticated) - every job across all companies
pub async fn all_jobs(Extension(state): Extension<Arc<AppState>>, ctx: RequestContext) -> Response {
    let Some(trace_id) = ctx.trace_id else {
        return respond::ALL_JOBS.wiring.into_response();
    };
    if ctx.claims.is_none() {
        return respond::UNAUTHORIZED.into_response();
    }

    let service = JobsService::new(state.store.clone());
    match service.all().await {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(e) => {
            error!(trace_id = %trace_id, error = %e, "job listing failed");
            respond::ALL_JOBS.service.into_response()
        }
    }
}

/// GET /companies/:company_id/jobs (authenticated)
pub async fn jobs_by_company(
    Extension(state): Extension<Arc<AppState>>,
    ctx: RequestContext,
    Path(company_id): Path<String>,
) -> Response {
    let Some(trace_id) = ctx.trace_id else {
        return respond::JOBS_BY_COMPANY.wiring.into_response();
    };
    if ctx.claims.is_none() {
        return respond::UNAUTHORIZED.into_response();
    }

    let Ok(company_id) = company_id.parse::<i64>() else {
        warn!(trace_id = %trace_id, raw = %company_id, "unparseable company id");
        return respond::JOBS_BY_COMPANY.bad_input.into_response();
    };

    let service = JobsService::new(state.store.clone());
    match service.by_company(company_id).await {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(e) => {
            error!(trace_id = %trace_id, error = %e, company_id, "job listing failed");
            respond::JOBS_BY_COMPANY.service.into_response()
        }
    }
}

/// GET /jobs/:job_id (authenticated) - single job lookup
pub async fn job_by_id(
    Extension(state): Extension<Arc<AppState>>,
    ctx: RequestContext,
    Path(job_id): Path<String>,
) -> Response {
    let Some(trace_id) = ctx.trace_id else {
        return respond::JOB_BY_ID.wiring.into_response();
    };
    if ctx.claims.is_none() {
        return respond::UNAUTHORIZED.into_response();
    }

    let Ok(job_id) = job_id.parse::<i64>() else {
        warn!(trace_id = %trace_id, raw = %job_id, "unparseable job id");
        return respond::JOB_BY_ID.bad_input.into_response();
    };

    let service = JobsService::new(state.store.clone());
    match service.by_id(job_id).await {
        Ok(job) => (StatusCode::OK, Json(job)).into_response(),
        Err(e) => {
            error!(trace_id = %trace_id, error = %e, job_id, "job lookup failed");
            respond::JOB_BY_ID.service.into_response()
        }
    }
}
