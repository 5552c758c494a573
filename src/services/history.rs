//! Patient history service

use crate::adapters::database::{EntityStore, HistoryStore};
use crate::domain::{Doctor, Entity, MedrecError, Patient, PatientHistory, Procedure, Result};
use crate::validation;
use std::sync::Arc;

/// Business operations for patient history records
///
/// History rows reference a patient, a procedure, and a doctor, so this
/// service holds all three stores and checks each reference before a write.
pub struct PatientHistoryService {
    store: Arc<dyn HistoryStore>,
    patients: Arc<dyn EntityStore<Patient>>,
    procedures: Arc<dyn EntityStore<Procedure>>,
    doctors: Arc<dyn EntityStore<Doctor>>,
}

impl PatientHistoryService {
    /// Create a new patient history service over the given stores
    pub fn new(
        store: Arc<dyn HistoryStore>,
        patients: Arc<dyn EntityStore<Patient>>,
        procedures: Arc<dyn EntityStore<Procedure>>,
        doctors: Arc<dyn EntityStore<Doctor>>,
    ) -> Self {
        Self {
            store,
            patients,
            procedures,
            doctors,
        }
    }

    /// Create a new history record after validation, a duplicate-key check,
    /// and checks of all three references
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a field fails validation, the id is already
    /// taken, or a referenced patient, procedure, or doctor does not exist.
    pub async fn create(&self, history: &PatientHistory) -> Result<bool> {
        validation::history::validate(history)?;

        if self.store.exists(&history.id).await? {
            return Err(MedrecError::invalid_input(
                "id",
                format!(
                    "A patient history record with ID '{}' already exists",
                    history.id
                ),
            ));
        }

        self.require_references(history).await?;

        let created = self.store.create(history).await?;
        if created {
            tracing::info!(
                id = %history.id,
                patient_id = history.patient_id,
                "created patient history record"
            );
        }
        Ok(created)
    }

    /// Retrieve a history record by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has the given id.
    pub async fn get(&self, id: &str) -> Result<PatientHistory> {
        self.store
            .read(&id.to_string())
            .await?
            .ok_or_else(|| MedrecError::not_found(PatientHistory::KIND, id))
    }

    /// Retrieve all history records
    pub async fn list(&self) -> Result<Vec<PatientHistory>> {
        self.store.read_all().await
    }

    /// Retrieve all history records for one patient
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the patient itself does not exist. A patient
    /// with no history yields an empty list, not an error.
    pub async fn list_by_patient(&self, patient_id: i32) -> Result<Vec<PatientHistory>> {
        if !self.patients.exists(&patient_id).await? {
            return Err(MedrecError::not_found(Patient::KIND, patient_id));
        }
        self.store.read_by_patient(patient_id).await
    }

    /// Update an existing history record after validation and reference
    /// checks
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the record does not exist, or `InvalidInput` if
    /// a field fails validation or a referenced patient, procedure, or
    /// doctor does not exist.
    pub async fn update(&self, history: &PatientHistory) -> Result<bool> {
        validation::history::validate(history)?;

        if !self.store.exists(&history.id).await? {
            return Err(MedrecError::not_found(PatientHistory::KIND, &history.id));
        }

        self.require_references(history).await?;

        let updated = self.store.update(history).await?;
        if updated {
            tracing::info!(id = %history.id, "updated patient history record");
        }
        Ok(updated)
    }

    /// Delete a history record by id
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has the given id.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let key = id.to_string();
        if !self.store.exists(&key).await? {
            return Err(MedrecError::not_found(PatientHistory::KIND, id));
        }

        let deleted = self.store.delete(&key).await?;
        if deleted {
            tracing::info!(id = %id, "deleted patient history record");
        }
        Ok(deleted)
    }

    /// Check whether a history record with the given id exists
    pub async fn exists(&self, id: &str) -> Result<bool> {
        self.store.exists(&id.to_string()).await
    }

    // Checked in this order: patient, procedure, doctor.
    async fn require_references(&self, history: &PatientHistory) -> Result<()> {
        if !self.patients.exists(&history.patient_id).await? {
            return Err(MedrecError::invalid_input(
                "patient_id",
                format!("Patient with ID '{}' does not exist", history.patient_id),
            ));
        }

        if !self
            .procedures
            .exists(&history.procedure_id.to_string())
            .await?
        {
            return Err(MedrecError::invalid_input(
                "procedure_id",
                format!("Procedure with ID '{}' does not exist", history.procedure_id),
            ));
        }

        if !self.doctors.exists(&history.doctor_id.to_string()).await? {
            return Err(MedrecError::invalid_input(
                "doctor_id",
                format!("Doctor with ID '{}' does not exist", history.doctor_id),
            ));
        }

        Ok(())
    }
}
