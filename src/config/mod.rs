//! Configuration management for medrec.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Medrec uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MEDREC_*` environment variable overrides
//! - Default values for every setting, so no file is required
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use medrec::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load medrec.toml if present, otherwise the defaults
//! let config = load_config(None)?;
//!
//! println!("Database: {}", config.database.redacted_url());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [database]
//! url = "postgresql://localhost:5432/medrec"
//! user = "medrec"
//! password = "${MEDREC_DB_PASSWORD}"
//! max_connections = 4
//!
//! [logging]
//! file_enabled = false
//! ```
//!
//! # Environment Variables
//!
//! Settings can be overridden without a file:
//!
//! ```bash
//! export MEDREC_DATABASE_URL="postgresql://db.internal:5432/medrec"
//! export MEDREC_DATABASE_USER="medrec"
//! export MEDREC_DATABASE_PASSWORD="secret-password"
//! export MEDREC_LOG_LEVEL="debug"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, DEFAULT_CONFIG_FILE};
pub use schema::{ApplicationConfig, DatabaseConfig, LoggingConfig, MedrecConfig};
pub use secret::{secret_string, SecretString, SecretValue};
