//! Patient service

use crate::adapters::database::EntityStore;
use crate::domain::{Entity, MedrecError, Patient, Result};
use crate::validation;
use std::sync::Arc;

/// Business operations for patients
pub struct PatientService {
    store: Arc<dyn EntityStore<Patient>>,
}

impl PatientService {
    /// Create a new patient service over the given store
    pub fn new(store: Arc<dyn EntityStore<Patient>>) -> Self {
        Self { store }
    }

    /// Create a new patient after validation and a duplicate-MRN check
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a field fails validation or the MRN is
    /// already taken.
    pub async fn create(&self, patient: &Patient) -> Result<bool> {
        validation::patient::validate(patient)?;

        if self.store.exists(&patient.mrn).await? {
            return Err(MedrecError::invalid_input(
                "mrn",
                "A patient with this MRN already exists",
            ));
        }

        let created = self.store.create(patient).await?;
        if created {
            tracing::info!(mrn = patient.mrn, "created patient");
        }
        Ok(created)
    }

    /// Retrieve a patient by MRN
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no patient has the given MRN.
    pub async fn get(&self, mrn: i32) -> Result<Patient> {
        self.store
            .read(&mrn)
            .await?
            .ok_or_else(|| MedrecError::not_found(Patient::KIND, mrn))
    }

    /// Retrieve all patients
    pub async fn list(&self) -> Result<Vec<Patient>> {
        self.store.read_all().await
    }

    /// Update an existing patient after validation
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the patient does not exist, or `InvalidInput`
    /// if a field fails validation.
    pub async fn update(&self, patient: &Patient) -> Result<bool> {
        validation::patient::validate(patient)?;

        if !self.store.exists(&patient.mrn).await? {
            return Err(MedrecError::not_found(Patient::KIND, patient.mrn));
        }

        let updated = self.store.update(patient).await?;
        if updated {
            tracing::info!(mrn = patient.mrn, "updated patient");
        }
        Ok(updated)
    }

    /// Delete a patient by MRN
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no patient has the given MRN.
    pub async fn delete(&self, mrn: i32) -> Result<bool> {
        if !self.store.exists(&mrn).await? {
            return Err(MedrecError::not_found(Patient::KIND, mrn));
        }

        let deleted = self.store.delete(&mrn).await?;
        if deleted {
            tracing::info!(mrn, "deleted patient");
        }
        Ok(deleted)
    }

    /// Check whether a patient with the given MRN exists
    pub async fn exists(&self, mrn: i32) -> Result<bool> {
        self.store.exists(&mrn).await
    }
}
