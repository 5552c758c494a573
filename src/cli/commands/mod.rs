//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod init_db;
pub mod menu;
pub mod status;
pub mod validate;
