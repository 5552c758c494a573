//! Entity abstraction shared by all persisted record types
//!
//! Every medrec record (doctor, patient, procedure, patient history) is a
//! plain data holder identified by a single primary key. This trait captures
//! that shape so the storage and service layers can be written once and
//! specialized per record type instead of duplicated four times.

use std::fmt;

/// A persisted record identified by a single primary key
///
/// Implementors are plain data holders; the trait exposes just enough for
/// generic storage and error reporting: the entity's display name and a way
/// to read its key.
///
/// # Examples
///
/// ```
/// use medrec::domain::{Doctor, Entity};
///
/// let doctor = Doctor::new("D1", "Smith");
/// assert_eq!(Doctor::KIND, "Doctor");
/// assert_eq!(doctor.key(), "D1");
/// ```
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity kind name used in error messages and log fields, e.g. "Doctor"
    const KIND: &'static str;

    /// Primary key type (string id or numeric MRN)
    type Key: Clone + PartialEq + fmt::Display + Send + Sync + 'static;

    /// Returns this record's primary key
    fn key(&self) -> &Self::Key;
}
