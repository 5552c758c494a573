//! Patient domain model
//!
//! This module defines the Patient type and its builder.

use super::entity::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents a patient
///
/// Holds the personal, contact, and insurance information for one patient,
/// keyed by Medical Record Number (MRN).
///
/// Equality is identity-based: two patients are equal when their MRNs match,
/// regardless of the other fields.
///
/// # Examples
///
/// ```
/// use medrec::domain::Patient;
/// use chrono::NaiveDate;
///
/// let patient = Patient::builder()
///     .mrn(1001)
///     .name("Ada", "Lovelace")
///     .dob(NaiveDate::from_ymd_opt(1985, 12, 10).unwrap())
///     .address("12 Analytical Way", "London", "KY", 40741)
///     .insurance("Acme Health")
///     .email("ada@example.com")
///     .build()
///     .unwrap();
///
/// assert_eq!(patient.mrn, 1001);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Medical Record Number, the positive primary key
    pub mrn: i32,

    /// First name, at most 100 characters
    pub fname: String,

    /// Last name, at most 100 characters
    pub lname: String,

    /// Date of birth
    pub dob: NaiveDate,

    /// Street address
    pub address: String,

    /// State of residence, at most 50 characters
    pub state: String,

    /// City of residence
    pub city: String,

    /// ZIP code, 1 to 99999
    pub zip: i32,

    /// Insurance provider name
    pub insurance: String,

    /// Email address
    pub email: String,
}

impl Patient {
    /// Returns a builder for constructing a patient
    pub fn builder() -> PatientBuilder {
        PatientBuilder::default()
    }
}

impl Entity for Patient {
    const KIND: &'static str = "Patient";
    type Key = i32;

    fn key(&self) -> &i32 {
        &self.mrn
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.mrn == other.mrn
    }
}

impl Eq for Patient {}

impl Hash for Patient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mrn.hash(state);
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient MRN: {}, Name: {} {}, DOB: {}, Address: {}, City: {}, State: {}, Zip: {}, Insurance: {}, Email: {}",
            self.mrn,
            self.fname,
            self.lname,
            self.dob,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.insurance,
            self.email
        )
    }
}

/// Builder for constructing Patient instances
#[derive(Debug, Default)]
pub struct PatientBuilder {
    mrn: Option<i32>,
    fname: Option<String>,
    lname: Option<String>,
    dob: Option<NaiveDate>,
    address: Option<String>,
    state: Option<String>,
    city: Option<String>,
    zip: Option<i32>,
    insurance: Option<String>,
    email: Option<String>,
}

impl PatientBuilder {
    /// Creates a new PatientBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Medical Record Number
    pub fn mrn(mut self, mrn: i32) -> Self {
        self.mrn = Some(mrn);
        self
    }

    /// Sets the first and last name
    pub fn name(mut self, fname: impl Into<String>, lname: impl Into<String>) -> Self {
        self.fname = Some(fname.into());
        self.lname = Some(lname.into());
        self
    }

    /// Sets the date of birth
    pub fn dob(mut self, dob: NaiveDate) -> Self {
        self.dob = Some(dob);
        self
    }

    /// Sets the street address, city, state, and ZIP code
    pub fn address(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: i32,
    ) -> Self {
        self.address = Some(address.into());
        self.city = Some(city.into());
        self.state = Some(state.into());
        self.zip = Some(zip);
        self
    }

    /// Sets the insurance provider
    pub fn insurance(mut self, insurance: impl Into<String>) -> Self {
        self.insurance = Some(insurance.into());
        self
    }

    /// Sets the email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds the patient
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing
    pub fn build(self) -> Result<Patient, String> {
        Ok(Patient {
            mrn: self.mrn.ok_or("mrn is required")?,
            fname: self.fname.ok_or("fname is required")?,
            lname: self.lname.ok_or("lname is required")?,
            dob: self.dob.ok_or("dob is required")?,
            address: self.address.ok_or("address is required")?,
            state: self.state.ok_or("state is required")?,
            city: self.city.ok_or("city is required")?,
            zip: self.zip.ok_or("zip is required")?,
            insurance: self.insurance.ok_or("insurance is required")?,
            email: self.email.ok_or("email is required")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patient() -> Patient {
        Patient::builder()
            .mrn(1001)
            .name("Ada", "Lovelace")
            .dob(NaiveDate::from_ymd_opt(1985, 12, 10).unwrap())
            .address("12 Analytical Way", "London", "KY", 40741)
            .insurance("Acme Health")
            .email("ada@example.com")
            .build()
            .unwrap()
    }

    #[test]
    fn test_patient_builder() {
        let patient = sample_patient();

        assert_eq!(patient.mrn, 1001);
        assert_eq!(patient.fname, "Ada");
        assert_eq!(patient.lname, "Lovelace");
        assert_eq!(patient.dob, NaiveDate::from_ymd_opt(1985, 12, 10).unwrap());
        assert_eq!(patient.address, "12 Analytical Way");
        assert_eq!(patient.city, "London");
        assert_eq!(patient.state, "KY");
        assert_eq!(patient.zip, 40741);
        assert_eq!(patient.insurance, "Acme Health");
        assert_eq!(patient.email, "ada@example.com");
    }

    #[test]
    fn test_patient_builder_missing_field() {
        let result = Patient::builder().mrn(1001).build();

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("fname is required"));
    }

    #[test]
    fn test_patient_equality_is_key_based() {
        let a = sample_patient();
        let mut b = sample_patient();
        b.email = "other@example.com".to_string();
        let mut c = sample_patient();
        c.mrn = 2002;

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_patient_display() {
        let patient = sample_patient();
        let text = patient.to_string();

        assert!(text.starts_with("Patient MRN: 1001, Name: Ada Lovelace, DOB: 1985-12-10"));
        assert!(text.ends_with("Insurance: Acme Health, Email: ada@example.com"));
    }

    #[test]
    fn test_patient_entity_key() {
        let patient = sample_patient();
        assert_eq!(Patient::KIND, "Patient");
        assert_eq!(*patient.key(), 1001);
    }
}
