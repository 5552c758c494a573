//! Patient history domain model
//!
//! This module defines the PatientHistory type, the join record tying a
//! patient, a procedure, and a doctor to a dated, billed encounter.

use super::entity::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents one entry in a patient's medical history
///
/// Each record captures a procedure performed on a patient: when it
/// happened, what was billed, and who performed it. The three reference
/// fields (`patient_id`, `procedure_id`, `doctor_id`) point at independent
/// rows; nothing is cascaded or embedded.
///
/// Equality is identity-based: two history records are equal when their ids
/// match, regardless of the other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientHistory {
    /// Unique identifier, at most 25 characters
    pub id: String,

    /// MRN of the patient this record belongs to
    pub patient_id: i32,

    /// Key of the procedure that was performed
    pub procedure_id: String,

    /// Date the procedure was performed
    pub date: NaiveDate,

    /// Billing amount in dollars, non-negative
    pub billing: f64,

    /// Key of the doctor who performed the procedure
    pub doctor_id: String,
}

impl PatientHistory {
    /// Creates a new patient history record with all fields
    pub fn new(
        id: impl Into<String>,
        patient_id: i32,
        procedure_id: impl Into<String>,
        date: NaiveDate,
        billing: f64,
        doctor_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            patient_id,
            procedure_id: procedure_id.into(),
            date,
            billing,
            doctor_id: doctor_id.into(),
        }
    }
}

impl Entity for PatientHistory {
    const KIND: &'static str = "PatientHistory";
    type Key = String;

    fn key(&self) -> &String {
        &self.id
    }
}

impl PartialEq for PatientHistory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PatientHistory {}

impl Hash for PatientHistory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for PatientHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PatientHistory ID: {}, Patient ID: {}, Procedure ID: {}, Date: {}, Billing: ${:.2}, Doctor ID: {}",
            self.id, self.patient_id, self.procedure_id, self.date, self.billing, self.doctor_id
        )
    }
}
