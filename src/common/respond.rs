// Central error-to-status mapping consulted by every handler.
//
// The statuses and literal bodies below are the external contract, including
// the "deatails" spelling and the split between the {"error": ...} and
// {"msg": ...} body shapes across handler families. Keep them in this one
// table instead of scattering string literals through the handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Which key the JSON error body uses. Most handler families answer with
/// `{"msg": ...}`; company creation and all authorization rejections use
/// `{"error": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKey {
    Error,
    Msg,
}

/// A fixed rejection response: status plus a short, fixed message body.
#[derive(Debug, Clone, Copy)]
pub struct Reply {
    pub status: StatusCode,
    pub key: BodyKey,
    pub message: &'static str,
}

impl Reply {
    pub const fn error(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            key: BodyKey::Error,
            message,
        }
    }

    pub const fn msg(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            key: BodyKey::Msg,
            message,
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let body = match self.key {
            BodyKey::Error => json!({ "error": self.message }),
            BodyKey::Msg => json!({ "msg": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

/// Rejection bodies for one operation: wiring failure (missing trace
/// context), malformed input, and service failure.
#[derive(Debug, Clone, Copy)]
pub struct OpReplies {
    pub wiring: Reply,
    pub bad_input: Reply,
    pub service: Reply,
}

/// Uniform response for every authentication failure. Callers must not leak
/// which sub-case (missing header, malformed, expired, bad signature)
/// occurred; the sub-case only goes to the logs.
pub const UNAUTHORIZED: Reply = Reply::error(StatusCode::UNAUTHORIZED, "Unauthorized");

/// Wiring-error body used where no per-operation table applies (the auth
/// middleware). Deliberately distinct from the unauthorized body.
pub const WIRING_ERROR: Reply =
    Reply::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");

const MSG_INTERNAL: Reply =
    Reply::msg(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");

pub const REGISTER: OpReplies = OpReplies {
    wiring: MSG_INTERNAL,
    bad_input: Reply::msg(
        StatusCode::BAD_REQUEST,
        "please provide Name, Email and Password",
    ),
    service: Reply::msg(StatusCode::BAD_REQUEST, "user registration failed"),
};

pub const LOGIN: OpReplies = OpReplies {
    wiring: MSG_INTERNAL,
    bad_input: Reply::msg(StatusCode::UNAUTHORIZED, "login failed"),
    service: Reply::msg(StatusCode::UNAUTHORIZED, "login failed"),
};

// The company-create family answers wiring errors with the {"error": ...}
// shape; every other family uses {"msg": ...}.
pub const ADD_COMPANY: OpReplies = OpReplies {
    wiring: Reply::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
    // "deatails" is deliberate, it is the body clients already match on.
    bad_input: Reply::msg(StatusCode::BAD_REQUEST, "please provide all deatails"),
    service: Reply::msg(StatusCode::BAD_REQUEST, "please provide all deatails"),
};

pub const VIEW_COMPANIES: OpReplies = OpReplies {
    wiring: MSG_INTERNAL,
    bad_input: Reply::msg(StatusCode::BAD_REQUEST, "problem in viewing company"),
    service: Reply::msg(StatusCode::BAD_REQUEST, "problem in viewing company"),
};

pub const COMPANIES_BY_ID: OpReplies = OpReplies {
    wiring: MSG_INTERNAL,
    bad_input: Reply::error(StatusCode::BAD_REQUEST, "Invalid company ID"),
    service: Reply::error(StatusCode::BAD_REQUEST, "Invalid company ID"),
};

pub const CREATE_JOB: OpReplies = OpReplies {
    wiring: MSG_INTERNAL,
    bad_input: Reply::error(StatusCode::BAD_REQUEST, "Invalid request body"),
    service: Reply::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create job"),
};

pub const ALL_JOBS: OpReplies = OpReplies {
    wiring: MSG_INTERNAL,
    bad_input: Reply::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch jobs"),
    service: Reply::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch jobs"),
};

pub const JOBS_BY_COMPANY: OpReplies = OpReplies {
    wiring: MSG_INTERNAL,
    bad_input: Reply::msg(StatusCode::BAD_REQUEST, "problem in viewing job"),
    service: Reply::msg(StatusCode::BAD_REQUEST, "problem in viewing job"),
};

pub const JOB_BY_ID: OpReplies = OpReplies {
    wiring: MSG_INTERNAL,
    bad_input: Reply::error(StatusCode::BAD_REQUEST, "Invalid job ID"),
    service: Reply::error(StatusCode::BAD_REQUEST, "Invalid job ID"),
};
