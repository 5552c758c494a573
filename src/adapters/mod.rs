//! External system integrations for medrec.
//!
//! This module provides the storage side of the application:
//!
//! - [`database`] - Storage abstraction layer (trait-based)
//! - [`postgresql`] - PostgreSQL implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with in-memory implementations. The service layer only
//! sees the traits in [`database`]; the PostgreSQL types are wired in at
//! startup.

pub mod database;
pub mod postgresql;
