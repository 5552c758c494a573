//! PostgreSQL database integration
//!
//! This module provides the PostgreSQL backing for the EMR tables: a pooled
//! client, the per-entity table mappings, and the generic store built on
//! both.

pub mod client;
pub mod entities;
pub mod store;

pub use client::PostgresClient;
pub use entities::PgEntity;
pub use store::PgStore;
