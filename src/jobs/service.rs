//! Job orchestration: posting requires ownership of the target company

use std::sync::Arc;

use super::models::{Job, NewJob};
use crate::common::ServiceError;
use crate::store::CredentialStore;

pub struct JobsService {
    store: Arc<dyn CredentialStore>,
}

impl JobsService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    fn owner_from_subject(subject: &str) -> Result<i64, ServiceError> {
        subject.parse().map_err(|_| ServiceError::InvalidSubject)
    }

    /// Creates a job under the given company, but only when the
    /// authenticated subject owns that company.
    pub async fn create(
        &self,
        subject: &str,
        company_id: i64,
        nj: NewJob,
    ) -> Result<Job, ServiceError> {
        let owner_id = Self::owner_from_subject(subject)?;
        let owned = self.store.companies_by_owner(company_id, owner_id).await?;
        if owned.is_empty() {
            return Err(ServiceError::OwnershipDenied);
        }
        Ok(self.store.create_job(company_id, &nj).await?)
    }

    /// Public listing of every job across all companies.
    pub async fn all(&self) -> Result<Vec<Job>, ServiceError> {
        Ok(self.store.jobs_all().await?)
    }

    /// Jobs belonging to one company. An unknown company id is an empty
    /// list, not an error.
    pub async fn by_company(&self, company_id: i64) -> Result<Vec<Job>, ServiceError> {
        Ok(self.store.jobs_by_company(company_id).await?)
    }

    pub async fn by_id(&self, job_id: i64) -> Result<Job, ServiceError> {
        self.store
            .job_by_id(job_id)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}
