//! Domain models and types for medrec.
//!
//! This module contains the core domain models, error taxonomy, and shared
//! abstractions for the EMR record types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Entity records** ([`Doctor`], [`Patient`], [`Procedure`], [`PatientHistory`])
//! - **A shared entity abstraction** ([`Entity`]) keying generic storage and services
//! - **Error types** ([`MedrecError`])
//! - **Result type alias** ([`Result`])
//!
//! # Identity
//!
//! Every record is identified by a single primary key and compares equal on
//! that key alone, mirroring how rows are identified in storage:
//!
//! ```rust
//! use medrec::domain::Doctor;
//!
//! let a = Doctor::new("D1", "Smith");
//! let b = Doctor::new("D1", "Jones");
//! assert_eq!(a, b); // same key, same identity
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`] with [`MedrecError`] as the
//! error type. The variants carry enough context for callers to pattern-match
//! instead of string-matching:
//!
//! ```rust
//! use medrec::domain::{MedrecError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(MedrecError::not_found("Doctor", "ZZZ"))
//! }
//!
//! match example() {
//!     Err(MedrecError::NotFound { entity, key }) => {
//!         assert_eq!(entity, "Doctor");
//!         assert_eq!(key, "ZZZ");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod doctor;
pub mod entity;
pub mod errors;
pub mod history;
pub mod patient;
pub mod procedure;
pub mod result;

// Re-export commonly used types for convenience
pub use doctor::Doctor;
pub use entity::Entity;
pub use errors::MedrecError;
pub use history::PatientHistory;
pub use patient::{Patient, PatientBuilder};
pub use procedure::Procedure;
pub use result::Result;
