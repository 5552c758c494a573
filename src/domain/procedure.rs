//! Procedure domain model
//!
//! This module defines the Procedure type.

use super::entity::Entity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents a medical procedure
///
/// A procedure is performed by one doctor (`doctor_id` references that
/// doctor's key) and takes a fixed number of minutes.
///
/// Equality is identity-based: two procedures are equal when their ids match,
/// regardless of the other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Procedure {
    /// Unique identifier, at most 25 characters
    pub id: String,

    /// Name of the procedure
    pub name: String,

    /// Detailed description
    pub description: String,

    /// Duration in minutes, 1 to 1440
    pub duration: i32,

    /// Key of the doctor who performs this procedure
    pub doctor_id: String,
}

impl Procedure {
    /// Creates a new procedure with all fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        duration: i32,
        doctor_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            duration,
            doctor_id: doctor_id.into(),
        }
    }
}

impl Entity for Procedure {
    const KIND: &'static str = "Procedure";
    type Key = String;

    fn key(&self) -> &String {
        &self.id
    }
}

impl PartialEq for Procedure {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Procedure {}

impl Hash for Procedure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Procedure ID: {}, Name: {}, Description: {}, Duration: {} minutes, Doctor ID: {}",
            self.id, self.name, self.description, self.duration, self.doctor_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedure_creation() {
        let procedure = Procedure::new("P1", "Checkup", "Routine exam", 30, "D1");

        assert_eq!(procedure.id, "P1");
        assert_eq!(procedure.name, "Checkup");
        assert_eq!(procedure.description, "Routine exam");
        assert_eq!(procedure.duration, 30);
        assert_eq!(procedure.doctor_id, "D1");
    }

    #[test]
    fn test_procedure_equality_is_key_based() {
        let a = Procedure::new("P1", "Checkup", "Routine exam", 30, "D1");
        let b = Procedure::new("P1", "X-Ray", "Chest", 15, "D2");
        let c = Procedure::new("P2", "Checkup", "Routine exam", 30, "D1");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_procedure_display() {
        let procedure = Procedure::new("P1", "Checkup", "Routine exam", 30, "D1");
        assert_eq!(
            procedure.to_string(),
            "Procedure ID: P1, Name: Checkup, Description: Routine exam, Duration: 30 minutes, Doctor ID: D1"
        );
    }

    #[test]
    fn test_procedure_entity_key() {
        let procedure = Procedure::new("P1", "Checkup", "Routine exam", 30, "D1");
        assert_eq!(Procedure::KIND, "Procedure");
        assert_eq!(procedure.key(), "P1");
    }
}
