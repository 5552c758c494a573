//! Doctor domain model
//!
//! This module defines the Doctor type.

use super::entity::Entity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents a doctor
///
/// A doctor is a medical professional who can perform procedures and be
/// referenced by patient history records.
///
/// Equality is identity-based: two doctors are equal when their ids match,
/// regardless of the other fields.
///
/// # Examples
///
/// ```
/// use medrec::domain::Doctor;
///
/// let doctor = Doctor::new("D1", "Smith");
/// assert_eq!(doctor.id, "D1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique identifier, at most 25 characters
    pub id: String,

    /// Full name, at most 45 characters
    pub name: String,
}

impl Doctor {
    /// Creates a new doctor with the given id and name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Entity for Doctor {
    const KIND: &'static str = "Doctor";
    type Key = String;

    fn key(&self) -> &String {
        &self.id
    }
}

impl PartialEq for Doctor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Doctor {}

impl Hash for Doctor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Doctor ID: {}, Name: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_creation() {
        let doctor = Doctor::new("D1", "Smith");
        assert_eq!(doctor.id, "D1");
        assert_eq!(doctor.name, "Smith");
    }

    #[test]
    fn test_doctor_equality_is_key_based() {
        let a = Doctor::new("D1", "Smith");
        let b = Doctor::new("D1", "Jones");
        let c = Doctor::new("D2", "Smith");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_doctor_hash_follows_equality() {
        let mut set = std::collections::HashSet::new();
        set.insert(Doctor::new("D1", "Smith"));
        set.insert(Doctor::new("D1", "Jones"));
        set.insert(Doctor::new("D2", "Smith"));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_doctor_display() {
        let doctor = Doctor::new("D1", "Smith");
        assert_eq!(doctor.to_string(), "Doctor ID: D1, Name: Smith");
    }

    #[test]
    fn test_doctor_entity_key() {
        let doctor = Doctor::new("D1", "Smith");
        assert_eq!(Doctor::KIND, "Doctor");
        assert_eq!(doctor.key(), "D1");
    }
}
