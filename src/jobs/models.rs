//! Job data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Job posting belonging to exactly one company.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Job creation request body. No required-field validation beyond being
/// readable JSON; empty strings are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewJob {
    pub title: String,
    pub description: String,
}
