//! In-memory test double for the credential store

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CredentialStore, StoreError};
use crate::companies::models::{Company, NewCompany};
use crate::jobs::models::{Job, NewJob};
use crate::users::models::User;

/// Substitutable store used by handler and service tests.
///
/// Behaves like a tiny database: ids are assigned sequentially and email
/// uniqueness is enforced. Construct with [`MockStore::failing`] to make
/// every operation report a database failure instead.
#[derive(Default)]
pub struct MockStore {
    fail: bool,
    users: Mutex<Vec<User>>,
    companies: Mutex<Vec<Company>>,
    jobs: Mutex<Vec<Job>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }

    fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}

#[async_trait]
impl CredentialStore for MockStore {
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        let now = Self::now();
        let user = User {
            id: users.len() as i64 + 1,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now.clone(),
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_company(&self, owner_id: i64, nc: &NewCompany) -> Result<Company, StoreError> {
        self.check()?;
        let mut companies = self.companies.lock().unwrap();
        let now = Self::now();
        let company = Company {
            id: companies.len() as i64 + 1,
            company_name: nc.company_name.clone(),
            founded_year: nc.founded_year,
            location: nc.location.clone(),
            address: nc.address.clone(),
            user_id: owner_id,
            created_at: now.clone(),
            updated_at: now,
        };
        companies.push(company.clone());
        Ok(company)
    }

    async fn companies_all(&self) -> Result<Vec<Company>, StoreError> {
        self.check()?;
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn companies_by_owner(
        &self,
        company_id: i64,
        owner_id: i64,
    ) -> Result<Vec<Company>, StoreError> {
        self.check()?;
        let companies = self.companies.lock().unwrap();
        Ok(companies
            .iter()
            .filter(|c| c.id == company_id && c.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create_job(&self, company_id: i64, nj: &NewJob) -> Result<Job, StoreError> {
        self.check()?;
        let mut jobs = self.jobs.lock().unwrap();
        let now = Self::now();
        let job = Job {
            id: jobs.len() as i64 + 1,
            title: nj.title.clone(),
            description: nj.description.clone(),
            company_id,
            created_at: now.clone(),
            updated_at: now,
        };
        jobs.push(job.clone());
        Ok(job)
    }

    async fn jobs_all(&self) -> Result<Vec<Job>, StoreError> {
        self.check()?;
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn jobs_by_company(&self, company_id: i64) -> Result<Vec<Job>, StoreError> {
        self.check()?;
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs
            .iter()
            .filter(|j| j.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn job_by_id(&self, job_id: i64) -> Result<Option<Job>, StoreError> {
        self.check()?;
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().find(|j| j.id == job_id).cloned())
    }
}
