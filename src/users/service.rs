//! Registration and login orchestration

use std::sync::Arc;

use tracing::{error, warn};

use super::models::{NewUser, User};
use crate::auth::password;
use crate::auth::token::{SignedToken, TokenIssuer};
use crate::common::ServiceError;
use crate::store::CredentialStore;

pub struct UsersService {
    store: Arc<dyn CredentialStore>,
    tokens: Arc<dyn TokenIssuer>,
}

impl UsersService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { store, tokens }
    }

    /// Hashes the password and persists the new user. Duplicate emails
    /// surface as a store error; the unique constraint is the single
    /// serialization point.
    pub async fn register(&self, nu: NewUser) -> Result<User, ServiceError> {
        let password_hash = password::hash_password(&nu.password).map_err(|e| {
            error!(error = %e, "password hashing failed during registration");
            ServiceError::PasswordHash
        })?;

        let user = self
            .store
            .create_user(nu.name.trim(), nu.email.trim(), &password_hash)
            .await?;
        Ok(user)
    }

    /// Verifies credentials and issues a signed token with the user's id
    /// as subject.
    ///
    /// Every failure mode (unknown email, wrong password, store failure,
    /// signing failure) collapses into `AuthenticationFailed`; the handler
    /// answers all of them with the same login-failed body.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignedToken, ServiceError> {
        let user = match self.store.user_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("login attempt for unknown email");
                return Err(ServiceError::AuthenticationFailed);
            }
            Err(e) => {
                error!(error = %e, "store failure during login");
                return Err(ServiceError::AuthenticationFailed);
            }
        };

        if !password::verify_password(password, &user.password_hash) {
            warn!(user_id = user.id, "password mismatch during login");
            return Err(ServiceError::AuthenticationFailed);
        }

        self.tokens.issue(&user.id.to_string()).map_err(|e| {
            error!(error = %e, user_id = user.id, "token issuance failed during login");
            ServiceError::AuthenticationFailed
        })
    }
}
