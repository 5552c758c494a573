//! Field-level validation for the EMR record types
//!
//! Pure, stateless checks run before any storage call: presence, length
//! bounds, numeric ranges, date bounds, and email shape. Entity-level
//! `validate` functions call every per-field check in a fixed order and fail
//! fast on the first violation; nothing here ever touches storage.
//!
//! Violations surface as [`MedrecError::InvalidInput`] carrying the field
//! name and a human-readable reason.

pub mod doctor;
pub mod history;
pub mod patient;
pub mod procedure;

use crate::domain::{MedrecError, Result};

/// Fails when the value is empty or whitespace-only
pub(crate) fn require_present(value: &str, field: &'static str, display: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MedrecError::invalid_input(
            field,
            format!("{display} is required"),
        ));
    }
    Ok(())
}

/// Fails when the value is longer than `max` characters
pub(crate) fn require_max_chars(
    value: &str,
    field: &'static str,
    display: &str,
    max: usize,
) -> Result<()> {
    if value.chars().count() > max {
        return Err(MedrecError::invalid_input(
            field,
            format!("{display} must not exceed {max} characters"),
        ));
    }
    Ok(())
}
