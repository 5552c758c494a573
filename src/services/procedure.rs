//! Procedure service

use crate::adapters::database::EntityStore;
use crate::domain::{Doctor, Entity, MedrecError, Procedure, Result};
use crate::validation;
use std::sync::Arc;

/// Business operations for procedures
///
/// Holds the doctor store as well, because every procedure references the
/// doctor who performs it and that reference is checked on every write.
pub struct ProcedureService {
    store: Arc<dyn EntityStore<Procedure>>,
    doctors: Arc<dyn EntityStore<Doctor>>,
}

impl ProcedureService {
    /// Create a new procedure service over the given stores
    pub fn new(
        store: Arc<dyn EntityStore<Procedure>>,
        doctors: Arc<dyn EntityStore<Doctor>>,
    ) -> Self {
        Self { store, doctors }
    }

    /// Create a new procedure after validation, a duplicate-key check, and
    /// a doctor-reference check
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a field fails validation, the id is already
    /// taken, or the referenced doctor does not exist.
    pub async fn create(&self, procedure: &Procedure) -> Result<bool> {
        validation::procedure::validate(procedure)?;

        if self.store.exists(&procedure.id).await? {
            return Err(MedrecError::invalid_input(
                "id",
                format!("A procedure with ID '{}' already exists", procedure.id),
            ));
        }

        self.require_doctor(&procedure.doctor_id).await?;

        let created = self.store.create(procedure).await?;
        if created {
            tracing::info!(id = %procedure.id, doctor_id = %procedure.doctor_id, "created procedure");
        }
        Ok(created)
    }

    /// Retrieve a procedure by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no procedure has the given id.
    pub async fn get(&self, id: &str) -> Result<Procedure> {
        self.store
            .read(&id.to_string())
            .await?
            .ok_or_else(|| MedrecError::not_found(Procedure::KIND, id))
    }

    /// Retrieve all procedures
    pub async fn list(&self) -> Result<Vec<Procedure>> {
        self.store.read_all().await
    }

    /// Update an existing procedure after validation and a doctor-reference
    /// check
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the procedure does not exist, or `InvalidInput`
    /// if a field fails validation or the referenced doctor does not exist.
    pub async fn update(&self, procedure: &Procedure) -> Result<bool> {
        validation::procedure::validate(procedure)?;

        if !self.store.exists(&procedure.id).await? {
            return Err(MedrecError::not_found(Procedure::KIND, &procedure.id));
        }

        self.require_doctor(&procedure.doctor_id).await?;

        let updated = self.store.update(procedure).await?;
        if updated {
            tracing::info!(id = %procedure.id, "updated procedure");
        }
        Ok(updated)
    }

    /// Delete a procedure by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no procedure has the given id.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let key = id.to_string();
        if !self.store.exists(&key).await? {
            return Err(MedrecError::not_found(Procedure::KIND, id));
        }

        let deleted = self.store.delete(&key).await?;
        if deleted {
            tracing::info!(id = %id, "deleted procedure");
        }
        Ok(deleted)
    }

    /// Check whether a procedure with the given id exists
    pub async fn exists(&self, id: &str) -> Result<bool> {
        self.store.exists(&id.to_string()).await
    }

    async fn require_doctor(&self, doctor_id: &str) -> Result<()> {
        if !self.doctors.exists(&doctor_id.to_string()).await? {
            return Err(MedrecError::invalid_input(
                "doctor_id",
                format!("Doctor with ID '{doctor_id}' does not exist"),
            ));
        }
        Ok(())
    }
}
