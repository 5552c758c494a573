//! Procedure field validation

use super::{require_max_chars, require_present};
use crate::domain::{MedrecError, Procedure, Result};

const MAX_ID_LEN: usize = 25;
const MIN_DURATION: i32 = 1;
const MAX_DURATION: i32 = 1440; // 24 hours in minutes

/// Validates every procedure field, failing fast on the first violation
pub fn validate(procedure: &Procedure) -> Result<()> {
    validate_id(&procedure.id)?;
    validate_name(&procedure.name)?;
    validate_description(&procedure.description)?;
    validate_duration(procedure.duration)?;
    validate_doctor_id(&procedure.doctor_id)?;
    Ok(())
}

/// Validates a procedure id: non-empty, at most 25 characters
pub fn validate_id(id: &str) -> Result<()> {
    require_present(id, "id", "Procedure ID")?;
    require_max_chars(id, "id", "Procedure ID", MAX_ID_LEN)
}

/// Validates the procedure name: non-empty
pub fn validate_name(name: &str) -> Result<()> {
    require_present(name, "name", "Procedure name")
}

/// Validates the procedure description: non-empty
pub fn validate_description(description: &str) -> Result<()> {
    require_present(description, "description", "Procedure description")
}

/// Validates the duration: 1 to 1440 minutes
pub fn validate_duration(duration: i32) -> Result<()> {
    if duration < MIN_DURATION {
        return Err(MedrecError::invalid_input(
            "duration",
            format!("Procedure duration must be at least {MIN_DURATION} minute"),
        ));
    }
    if duration > MAX_DURATION {
        return Err(MedrecError::invalid_input(
            "duration",
            format!("Procedure duration must not exceed {MAX_DURATION} minutes (24 hours)"),
        ));
    }
    Ok(())
}

/// Validates the referenced doctor id: non-empty, at most 25 characters
pub fn validate_doctor_id(doctor_id: &str) -> Result<()> {
    require_present(doctor_id, "doctor_id", "Doctor ID")?;
    require_max_chars(doctor_id, "doctor_id", "Doctor ID", MAX_ID_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MedrecError;
    use test_case::test_case;

    fn valid_procedure() -> Procedure {
        Procedure::new("P1", "Checkup", "Routine exam", 30, "D1")
    }

    #[test]
    fn test_valid_procedure_passes() {
        assert!(validate(&valid_procedure()).is_ok());
    }

    #[test_case(0 ; "zero")]
    #[test_case(-10 ; "negative")]
    #[test_case(1441 ; "over one day")]
    fn test_out_of_range_duration_fails(duration: i32) {
        assert!(validate_duration(duration).is_err());
    }

    #[test_case(1 ; "minimum")]
    #[test_case(30 ; "typical")]
    #[test_case(1440 ; "maximum")]
    fn test_in_range_duration_passes(duration: i32) {
        assert!(validate_duration(duration).is_ok());
    }

    #[test]
    fn test_blank_name_fails() {
        let mut procedure = valid_procedure();
        procedure.name = "  ".to_string();
        assert!(validate(&procedure).is_err());
    }

    #[test]
    fn test_blank_description_fails() {
        let mut procedure = valid_procedure();
        procedure.description = String::new();
        assert!(validate(&procedure).is_err());
    }

    #[test]
    fn test_doctor_id_too_long_fails() {
        assert!(validate_doctor_id(&"D".repeat(26)).is_err());
        assert!(validate_doctor_id(&"D".repeat(25)).is_ok());
    }

    #[test]
    fn test_duration_error_names_the_field() {
        let mut procedure = valid_procedure();
        procedure.duration = 0;

        match validate(&procedure) {
            Err(MedrecError::InvalidInput { field, .. }) => assert_eq!(field, "duration"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
