//! # Credential Store
//!
//! Persistence interface for users, companies and jobs. Everything above
//! this module talks to the [`CredentialStore`] trait; the only production
//! implementation is [`sqlite::SqliteStore`], and tests substitute the
//! in-memory double in [`mock`].

pub mod sqlite;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::companies::models::{Company, NewCompany};
use crate::jobs::models::{Job, NewJob};
use crate::users::models::User;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-constraint violation on the users.email column.
    #[error("email is already registered")]
    DuplicateEmail,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Capability interface over the relational store.
///
/// Cross-request consistency (email uniqueness, company/job referential
/// integrity) is enforced here, not in process.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn create_company(&self, owner_id: i64, nc: &NewCompany) -> Result<Company, StoreError>;
    async fn companies_all(&self) -> Result<Vec<Company>, StoreError>;
    /// Companies matching both the company id and the owning user.
    async fn companies_by_owner(
        &self,
        company_id: i64,
        owner_id: i64,
    ) -> Result<Vec<Company>, StoreError>;

    async fn create_job(&self, company_id: i64, nj: &NewJob) -> Result<Job, StoreError>;
    async fn jobs_all(&self) -> Result<Vec<Job>, StoreError>;
    async fn jobs_by_company(&self, company_id: i64) -> Result<Vec<Job>, StoreError>;
    async fn job_by_id(&self, job_id: i64) -> Result<Option<Job>, StoreError>;
}

pub use sqlite::SqliteStore;
