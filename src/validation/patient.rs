//! Patient field validation

use super::{require_max_chars, require_present};
use crate::domain::{MedrecError, Patient, Result};
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

const MAX_NAME_LEN: usize = 100;
const MAX_STATE_LEN: usize = 50;
const MAX_ZIP: i32 = 99999;

/// Requires an `@` followed by a dot-separated domain. Deliberately shallow;
/// no attempt at full RFC 5322 conformance.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
            .expect("email pattern should compile")
    })
}

/// Validates every patient field, failing fast on the first violation
pub fn validate(patient: &Patient) -> Result<()> {
    validate_mrn(patient.mrn)?;
    validate_name(&patient.fname, "fname", "First name")?;
    validate_name(&patient.lname, "lname", "Last name")?;
    validate_dob(patient.dob)?;
    require_present(&patient.address, "address", "Address")?;
    require_present(&patient.city, "city", "City")?;
    validate_state(&patient.state)?;
    validate_zip(patient.zip)?;
    require_present(&patient.insurance, "insurance", "Insurance")?;
    validate_email(&patient.email)?;
    Ok(())
}

/// Validates the Medical Record Number: must be positive
pub fn validate_mrn(mrn: i32) -> Result<()> {
    if mrn <= 0 {
        return Err(MedrecError::invalid_input(
            "mrn",
            "MRN must be a positive number",
        ));
    }
    Ok(())
}

/// Validates a first or last name: non-empty, at most 100 characters
pub fn validate_name(name: &str, field: &'static str, display: &str) -> Result<()> {
    require_present(name, field, display)?;
    require_max_chars(name, field, display, MAX_NAME_LEN)
}

/// Validates the date of birth: not in the future, not before 1900-01-01
pub fn validate_dob(dob: NaiveDate) -> Result<()> {
    if dob > Local::now().date_naive() {
        return Err(MedrecError::invalid_input(
            "dob",
            "Date of birth cannot be in the future",
        ));
    }
    let earliest = NaiveDate::from_ymd_opt(1900, 1, 1).expect("1900-01-01 should be a valid date");
    if dob < earliest {
        return Err(MedrecError::invalid_input(
            "dob",
            "Date of birth must be after 1900",
        ));
    }
    Ok(())
}

/// Validates the state of residence: non-empty, at most 50 characters
pub fn validate_state(state: &str) -> Result<()> {
    require_present(state, "state", "State")?;
    require_max_chars(state, "state", "State", MAX_STATE_LEN)
}

/// Validates the ZIP code: 1 to 99999
pub fn validate_zip(zip: i32) -> Result<()> {
    if zip <= 0 || zip > MAX_ZIP {
        return Err(MedrecError::invalid_input(
            "zip",
            "ZIP code must be a valid 5-digit number",
        ));
    }
    Ok(())
}

/// Validates an email address against the shallow `local@domain` shape
pub fn validate_email(email: &str) -> Result<()> {
    require_present(email, "email", "Email")?;
    if !email_pattern().is_match(email) {
        return Err(MedrecError::invalid_input(
            "email",
            "Email format is invalid",
        ));
    }
    Ok(())
}
