use super::models::NewUser;

/// Registration requires name, email and password to all be present, and
/// the email to at least look like one.
pub fn validate_new_user(nu: &NewUser) -> bool {
    !nu.name.trim().is_empty()
        && !nu.email.trim().is_empty()
        && nu.email.contains('@')
        && !nu.password.is_empty()
}
