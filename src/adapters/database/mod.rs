//! Database abstraction layer
//!
//! This module provides a trait-based abstraction for storage operations,
//! keeping the service layer independent of the PostgreSQL driver.

pub mod traits;

pub use traits::{EntityStore, HistoryStore};
