//! Storage abstraction traits
//!
//! This module defines the traits that storage adapters must implement to
//! work with medrec. One generic trait covers the per-entity operations;
//! services depend on these traits instead of a concrete driver, so tests
//! can substitute an in-memory implementation.

use crate::domain::{Entity, PatientHistory, Result};
use async_trait::async_trait;

/// Storage operations available for every entity type
///
/// The contract mirrors row-level CRUD: each method issues a single
/// parameterized statement against the backing store. Write operations
/// report whether a row was actually affected; `read` returns `None` for a
/// missing row instead of failing. Any underlying storage failure surfaces
/// as [`MedrecError::Storage`](crate::domain::MedrecError::Storage) carrying
/// the original cause.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Insert a new record
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was written.
    async fn create(&self, entity: &E) -> Result<bool>;

    /// Fetch one record by key
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entity))` if found, `Ok(None)` if no row matches.
    async fn read(&self, key: &E::Key) -> Result<Option<E>>;

    /// Fetch every record, in storage-defined order
    async fn read_all(&self) -> Result<Vec<E>>;

    /// Overwrite all non-key columns of the row matching the entity's key
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was updated, `false` when the key is absent.
    async fn update(&self, entity: &E) -> Result<bool>;

    /// Delete the row with the given key
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was deleted, `false` when the key is absent.
    async fn delete(&self, key: &E::Key) -> Result<bool>;

    /// Check whether a row with the given key exists
    async fn exists(&self, key: &E::Key) -> Result<bool>;
}

/// Storage operations specific to patient history records
///
/// Extends the generic per-entity contract with the one filtered read the
/// history table supports.
#[async_trait]
pub trait HistoryStore: EntityStore<PatientHistory> {
    /// Fetch every history record for one patient, in storage-defined order
    async fn read_by_patient(&self, patient_id: i32) -> Result<Vec<PatientHistory>>;
}
