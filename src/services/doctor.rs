//! Doctor service

use crate::adapters::database::EntityStore;
use crate::domain::{Doctor, Entity, MedrecError, Result};
use crate::validation;
use std::sync::Arc;

/// Business operations for doctors
///
/// Composes validation with the storage calls; no state beyond the injected
/// store handle.
pub struct DoctorService {
    store: Arc<dyn EntityStore<Doctor>>,
}

impl DoctorService {
    /// Create a new doctor service over the given store
    pub fn new(store: Arc<dyn EntityStore<Doctor>>) -> Self {
        Self { store }
    }

    /// Create a new doctor after validation and a duplicate-key check
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a field fails validation or the id is
    /// already taken.
    pub async fn create(&self, doctor: &Doctor) -> Result<bool> {
        validation::doctor::validate(doctor)?;

        if self.store.exists(&doctor.id).await? {
            return Err(MedrecError::invalid_input(
                "id",
                format!("A doctor with ID '{}' already exists", doctor.id),
            ));
        }

        let created = self.store.create(doctor).await?;
        if created {
            tracing::info!(id = %doctor.id, "created doctor");
        }
        Ok(created)
    }

    /// Retrieve a doctor by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no doctor has the given id.
    pub async fn get(&self, id: &str) -> Result<Doctor> {
        self.store
            .read(&id.to_string())
            .await?
            .ok_or_else(|| MedrecError::not_found(Doctor::KIND, id))
    }

    /// Retrieve all doctors
    pub async fn list(&self) -> Result<Vec<Doctor>> {
        self.store.read_all().await
    }

    /// Update an existing doctor after validation
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the doctor does not exist, or `InvalidInput` if
    /// a field fails validation.
    pub async fn update(&self, doctor: &Doctor) -> Result<bool> {
        validation::doctor::validate(doctor)?;

        if !self.store.exists(&doctor.id).await? {
            return Err(MedrecError::not_found(Doctor::KIND, &doctor.id));
        }

        let updated = self.store.update(doctor).await?;
        if updated {
            tracing::info!(id = %doctor.id, "updated doctor");
        }
        Ok(updated)
    }

    /// Delete a doctor by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no doctor has the given id.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let key = id.to_string();
        if !self.store.exists(&key).await? {
            return Err(MedrecError::not_found(Doctor::KIND, id));
        }

        let deleted = self.store.delete(&key).await?;
        if deleted {
            tracing::info!(id = %id, "deleted doctor");
        }
        Ok(deleted)
    }

    /// Check whether a doctor with the given id exists
    pub async fn exists(&self, id: &str) -> Result<bool> {
        self.store.exists(&id.to_string()).await
    }
}
