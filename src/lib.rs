// Medrec - Command-line Electronic Medical Records Manager
// Copyright (c) 2025 Medrec Contributors
// Licensed under the MIT License

//! # Medrec - Electronic Medical Records Manager
//!
//! Medrec is a command-line manager for a small electronic medical records
//! database: patients, doctors, procedures, and the history records that tie
//! them together, stored in PostgreSQL.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Validating** records before anything reaches the database
//! - **Storing** records through a generic PostgreSQL-backed store
//! - **Enforcing** cross-entity references (procedures name their doctor,
//!   history records name patient, procedure, and doctor)
//! - **Driving** it all from an interactive menu on stdin
//!
//! ## Architecture
//!
//! Medrec follows a layered architecture:
//!
//! - [`cli`] - Command-line interface, the interactive menu, and prompting
//! - [`services`] - Business logic over the stores (validation, duplicate
//!   and reference checks)
//! - [`adapters`] - Storage traits and the PostgreSQL implementation
//! - [`domain`] - Core entity types and the error type
//! - [`validation`] - Field-level validation rules
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medrec::adapters::postgresql::PostgresClient;
//! use medrec::config::load_config;
//! use medrec::services::Services;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // medrec.toml if present, defaults otherwise
//!     let config = load_config(None)?;
//!
//!     let client = PostgresClient::new(config.database.clone())?;
//!     client.test_connection().await?;
//!
//!     let services = Services::postgres(Arc::new(client));
//!     let doctors = services.doctors.list().await?;
//!     println!("{} doctors on file", doctors.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::MedrecError`], with variants
//! callers can match on:
//!
//! ```rust
//! use medrec::domain::MedrecError;
//!
//! fn describe(err: &MedrecError) -> &'static str {
//!     match err {
//!         MedrecError::InvalidInput { .. } => "the record was rejected",
//!         MedrecError::NotFound { .. } => "no such record",
//!         _ => "something else went wrong",
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! Medrec uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(mrn = 1001, "created patient");
//! warn!("database connection lost; operation failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod services;
pub mod validation;
