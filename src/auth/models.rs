//! Authentication data models

use serde::{Deserialize, Serialize};

/// JWT claims embedded at login and recovered on every request.
///
/// `sub` carries the user's numeric id in string form so that downstream
/// ownership checks can recover it. `jti` is unique per issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub jti: String,
    pub iat: usize,
    pub exp: usize,
}
