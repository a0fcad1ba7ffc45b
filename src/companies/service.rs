//! Company orchestration: creation and listing scoped to the caller

use std::sync::Arc;

use super::models::{Company, NewCompany};
use crate::common::ServiceError;
use crate::store::CredentialStore;

pub struct CompaniesService {
    store: Arc<dyn CredentialStore>,
}

impl CompaniesService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    fn owner_from_subject(subject: &str) -> Result<i64, ServiceError> {
        subject.parse().map_err(|_| ServiceError::InvalidSubject)
    }

    /// Creates a company owned by the authenticated subject.
    pub async fn create(&self, subject: &str, nc: NewCompany) -> Result<Company, ServiceError> {
        let owner_id = Self::owner_from_subject(subject)?;
        Ok(self.store.create_company(owner_id, &nc).await?)
    }

    /// Public listing of all companies.
    pub async fn list_all(&self) -> Result<Vec<Company>, ServiceError> {
        Ok(self.store.companies_all().await?)
    }

    /// Companies filtered by both the company id and the caller's
    /// ownership; another subject's company comes back as an empty list.
    pub async fn by_owner(
        &self,
        company_id: i64,
        subject: &str,
    ) -> Result<Vec<Company>, ServiceError> {
        let owner_id = Self::owner_from_subject(subject)?;
        Ok(self.store.companies_by_owner(company_id, owner_id).await?)
    }
}
