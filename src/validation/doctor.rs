//! Doctor field validation

use super::{require_max_chars, require_present};
use crate::domain::{Doctor, Result};

const MAX_ID_LEN: usize = 25;
const MAX_NAME_LEN: usize = 45;

/// Validates every doctor field, failing fast on the first violation
pub fn validate(doctor: &Doctor) -> Result<()> {
    validate_id(&doctor.id)?;
    validate_name(&doctor.name)?;
    Ok(())
}

/// Validates a doctor id: non-empty, at most 25 characters
pub fn validate_id(id: &str) -> Result<()> {
    require_present(id, "id", "Doctor ID")?;
    require_max_chars(id, "id", "Doctor ID", MAX_ID_LEN)
}

/// Validates a doctor name: non-empty, at most 45 characters
pub fn validate_name(name: &str) -> Result<()> {
    require_present(name, "name", "Doctor name")?;
    require_max_chars(name, "name", "Doctor name", MAX_NAME_LEN)
}
