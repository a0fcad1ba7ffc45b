//! SQLite-backed credential store

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;

use super::{CredentialStore, StoreError};
use crate::companies::models::{Company, NewCompany};
use crate::jobs::models::{Job, NewJob};
use crate::users::models::User;

pub struct SqliteStore {
    db: SqlitePool,
}

impl SqliteStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}

#[async_trait]
impl CredentialStore for SqliteStore {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let now = Self::now();

        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                StoreError::DuplicateEmail
            } else {
                StoreError::Database(e)
            }
        })?;

        let id = result.last_insert_rowid();
        info!(user_id = id, "created user");

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.db)
            .await?;
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;
        Ok(user)
    }

    async fn create_company(&self, owner_id: i64, nc: &NewCompany) -> Result<Company, StoreError> {
        let now = Self::now();

        let result = sqlx::query(
            r#"
            INSERT INTO companies (company_name, founded_year, location, address, user_id,
                                   created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&nc.company_name)
        .bind(nc.founded_year)
        .bind(&nc.location)
        .bind(&nc.address)
        .bind(owner_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let id = result.last_insert_rowid();
        info!(company_id = id, user_id = owner_id, "created company");

        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = ?")
            .bind(id)
            .fetch_one(&self.db)
            .await?;
        Ok(company)
    }

    async fn companies_all(&self) -> Result<Vec<Company>, StoreError> {
        let companies = sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY id ASC")
            .fetch_all(&self.db)
            .await?;
        Ok(companies)
    }

    async fn companies_by_owner(
        &self,
        company_id: i64,
        owner_id: i64,
    ) -> Result<Vec<Company>, StoreError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT * FROM companies WHERE id = ? AND user_id = ? ORDER BY id ASC",
        )
        .bind(company_id)
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;
        Ok(companies)
    }

    async fn create_job(&self, company_id: i64, nj: &NewJob) -> Result<Job, StoreError> {
        let now = Self::now();

        let result = sqlx::query(
            r#"
            INSERT INTO jobs (title, description, company_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&nj.title)
        .bind(&nj.description)
        .bind(company_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let id = result.last_insert_rowid();
        info!(job_id = id, company_id, "created job");

        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
            .bind(id)
            .fetch_one(&self.db)
            .await?;
        Ok(job)
    }

    async fn jobs_all(&self) -> Result<Vec<Job>, StoreError> {
        let jobs = sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY id ASC")
            .fetch_all(&self.db)
            .await?;
        Ok(jobs)
    }

    async fn jobs_by_company(&self, company_id: i64) -> Result<Vec<Job>, StoreError> {
        let jobs =
            sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE company_id = ? ORDER BY id ASC")
                .bind(company_id)
                .fetch_all(&self.db)
                .await?;
        Ok(jobs)
    }

    async fn job_by_id(&self, job_id: i64) -> Result<Option<Job>, StoreError> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = ?")
            .bind(job_id)
            .fetch_optional(&self.db)
            .await?;
        Ok(job)
    }
}
