//! Company data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Company record, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub company_name: String,
    pub founded_year: i64,
    pub location: String,
    pub address: String,
    pub user_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Company creation request body. Fields default so a partial body decodes
/// and fails validation with the fixed contract message; unknown extra
/// fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCompany {
    pub company_name: String,
    pub founded_year: i64,
    pub location: String,
    pub address: String,
}
