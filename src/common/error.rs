// Error types shared by the service layer

use thiserror::Error;

use crate::store::StoreError;

/// Failures reported by the service layer.
///
/// Services have no status-code knowledge; handlers classify these into
/// responses through the tables in `common::respond`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Unknown email, wrong password or token issuance failure. Callers
    /// must not be able to tell which.
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("subject claim is not a valid user id")]
    InvalidSubject,
    #[error("resource not found")]
    NotFound,
    #[error("subject does not own the target company")]
    OwnershipDenied,
    #[error("password hashing failed")]
    PasswordHash,
    #[error(transparent)]
    Store(#[from] StoreError),
}
