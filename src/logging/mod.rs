//! Logging and observability
//!
//! This module provides structured logging with:
//! - A console layer on stderr, always on
//! - An optional JSON file layer with rotation
//! - Log levels configured via `application.log_level` or `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use medrec::logging::init_logging;
//! use medrec::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
