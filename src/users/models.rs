//! User data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User identity record. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Registration request body. Fields default to empty so that a partial
/// body decodes and fails validation with the fixed contract message
/// instead of a serde rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
