// Application state shared across all modules

use std::sync::Arc;

use crate::auth::token::TokenIssuer;
use crate::store::CredentialStore;

/// Application state containing the credential store and the token issuer.
///
/// Both dependencies sit behind capability traits so that handler and
/// service tests can substitute in-memory doubles.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub tokens: Arc<dyn TokenIssuer>,
}
