//! Patient history field validation

use super::{require_max_chars, require_present};
use crate::domain::{MedrecError, PatientHistory, Result};
use chrono::{Local, NaiveDate};

const MAX_ID_LEN: usize = 25;

/// Validates every patient history field, failing fast on the first violation
pub fn validate(history: &PatientHistory) -> Result<()> {
    validate_id(&history.id)?;
    validate_patient_id(history.patient_id)?;
    validate_procedure_id(&history.procedure_id)?;
    validate_date(history.date)?;
    validate_billing(history.billing)?;
    validate_doctor_id(&history.doctor_id)?;
    Ok(())
}

/// Validates a history record id: non-empty, at most 25 characters
pub fn validate_id(id: &str) -> Result<()> {
    require_present(id, "id", "Patient history ID")?;
    require_max_chars(id, "id", "Patient history ID", MAX_ID_LEN)
}

/// Validates the referenced patient MRN: must be positive
pub fn validate_patient_id(patient_id: i32) -> Result<()> {
    if patient_id <= 0 {
        return Err(MedrecError::invalid_input(
            "patient_id",
            "Patient ID must be a positive number",
        ));
    }
    Ok(())
}

/// Validates the referenced procedure id: non-empty, at most 25 characters
pub fn validate_procedure_id(procedure_id: &str) -> Result<()> {
    require_present(procedure_id, "procedure_id", "Procedure ID")?;
    require_max_chars(procedure_id, "procedure_id", "Procedure ID", MAX_ID_LEN)
}

/// Validates the procedure date: not in the future
pub fn validate_date(date: NaiveDate) -> Result<()> {
    if date > Local::now().date_naive() {
        return Err(MedrecError::invalid_input(
            "date",
            "Date cannot be in the future",
        ));
    }
    Ok(())
}

/// Validates the billing amount: a finite, non-negative number
pub fn validate_billing(billing: f64) -> Result<()> {
    if !billing.is_finite() {
        return Err(MedrecError::invalid_input(
            "billing",
            "Billing amount must be a number",
        ));
    }
    if billing < 0.0 {
        return Err(MedrecError::invalid_input(
            "billing",
            "Billing amount cannot be negative",
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
    use chrono::Days;
    use test_case::test_case;

    fn valid_history() -> PatientHistory {
        PatientHistory::new(
            "H1",
            1001,
            "P1",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            123.45,
            "D1",
        )
    }

    #[test]
    fn test_valid_history_passes() {
        assert!(validate(&valid_history()).is_ok());
    }

    #[test_case(0 ; "zero")]
    #[test_case(-7 ; "negative")]
    fn test_nonpositive_patient_id_fails(patient_id: i32) {
        assert!(validate_patient_id(patient_id).is_err());
    }

    #[test]
    fn test_future_date_fails() {
        let tomorrow = Local::now().date_naive() + Days::new(1);
        assert!(validate_date(tomorrow).is_err());
    }

    #[test]
    fn test_today_passes() {
        assert!(validate_date(Local::now().date_naive()).is_ok());
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(50.0 ; "typical")]
    #[test_case(123.45 ; "with cents")]
    fn test_non_negative_billing_passes(billing: f64) {
        assert!(validate_billing(billing).is_ok());
    }

    #[test]
    fn test_negative_billing_fails() {
        assert!(validate_billing(-0.01).is_err());
    }

    #[test]
    fn test_non_finite_billing_fails() {
        assert!(validate_billing(f64::NAN).is_err());
        assert!(validate_billing(f64::INFINITY).is_err());
    }

    #[test]
    fn test_id_too_long_fails() {
        assert!(validate_id(&"H".repeat(26)).is_err());
        assert!(validate_id(&"H".repeat(25)).is_ok());
    }

    #[test]
    fn test_fail_fast_reports_first_violation() {
        let mut history = valid_history();
        history.patient_id = 0;
        history.billing = -5.0;

        match validate(&history) {
            Err(MedrecError::InvalidInput { field, .. }) => assert_eq!(field, "patient_id"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
