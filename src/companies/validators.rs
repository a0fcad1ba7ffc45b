use super::models::NewCompany;

/// Company creation requires every field: name, founding year, location
/// and address.
pub fn validate_new_company(nc: &NewCompany) -> bool {
    !nc.company_name.trim().is_empty()
        && nc.founded_year > 0
        && !nc.location.trim().is_empty()
        && !nc.address.trim().is_empty()
}
