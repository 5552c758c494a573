//! Shared test support: in-memory stores and record fixtures
//!
//! The services only see the storage traits, so tests run against these
//! fakes instead of PostgreSQL. Each store can be switched into a failing
//! mode to simulate an outage.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use medrec::adapters::database::{EntityStore, HistoryStore};
use medrec::domain::{
    Doctor, Entity, MedrecError, Patient, PatientHistory, Procedure, Result,
};
use medrec::services::Services;
use std::sync::{Arc, Mutex};

/// In-memory entity store
pub struct MemoryStore<E: Entity> {
    rows: Mutex<Vec<E>>,
    failing: Mutex<bool>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            failing: Mutex::new(false),
        }
    }

    /// Make every subsequent call fail with a storage error
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Number of rows currently held
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<()> {
        if *self.failing.lock().unwrap() {
            Err(MedrecError::storage("simulated outage"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    async fn create(&self, entity: &E) -> Result<bool> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.key() == entity.key()) {
            return Ok(false);
        }
        rows.push(entity.clone());
        Ok(true)
    }

    async fn read(&self, key: &E::Key) -> Result<Option<E>> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.key() == key).cloned())
    }

    async fn read_all(&self) -> Result<Vec<E>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, entity: &E) -> Result<bool> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|row| row.key() == entity.key()) {
            Some(row) => {
                *row = entity.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, key: &E::Key) -> Result<bool> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.key() != key);
        Ok(rows.len() < before)
    }

    async fn exists(&self, key: &E::Key) -> Result<bool> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|row| row.key() == key))
    }
}

/// In-memory history store with the per-patient query
pub struct MemoryHistoryStore {
    inner: MemoryStore<PatientHistory>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.inner.set_failing(failing);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl EntityStore<PatientHistory> for MemoryHistoryStore {
    async fn create(&self, entity: &PatientHistory) -> Result<bool> {
        self.inner.create(entity).await
    }

    async fn read(&self, key: &String) -> Result<Option<PatientHistory>> {
        self.inner.read(key).await
    }

    async fn read_all(&self) -> Result<Vec<PatientHistory>> {
        self.inner.read_all().await
    }

    async fn update(&self, entity: &PatientHistory) -> Result<bool> {
        self.inner.update(entity).await
    }

    async fn delete(&self, key: &String) -> Result<bool> {
        self.inner.delete(key).await
    }

    async fn exists(&self, key: &String) -> Result<bool> {
        self.inner.exists(key).await
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn read_by_patient(&self, patient_id: i32) -> Result<Vec<PatientHistory>> {
        self.inner.check()?;
        let rows = self.inner.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|history| history.patient_id == patient_id)
            .cloned()
            .collect())
    }
}

/// Handles onto the stores behind a [`Services`] built by [`services`]
pub struct TestStores {
    pub doctors: Arc<MemoryStore<Doctor>>,
    pub patients: Arc<MemoryStore<Patient>>,
    pub procedures: Arc<MemoryStore<Procedure>>,
    pub histories: Arc<MemoryHistoryStore>,
}

/// Wire a full service set over fresh in-memory stores
pub fn services() -> (Services, TestStores) {
    let doctors = Arc::new(MemoryStore::new());
    let patients = Arc::new(MemoryStore::new());
    let procedures = Arc::new(MemoryStore::new());
    let histories = Arc::new(MemoryHistoryStore::new());

    let services = Services::new(
        doctors.clone(),
        patients.clone(),
        procedures.clone(),
        histories.clone(),
    );

    (
        services,
        TestStores {
            doctors,
            patients,
            procedures,
            histories,
        },
    )
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn sample_doctor() -> Doctor {
    Doctor::new("D100", "Grace Hopper")
}

pub fn sample_patient() -> Patient {
    Patient::builder()
        .mrn(1001)
        .name("Ada", "Lovelace")
        .dob(date(1985, 12, 10))
        .address("12 Analytical Way", "London", "KY", 40741)
        .insurance("Acme Health")
        .email("ada@example.com")
        .build()
        .expect("sample patient should build")
}

pub fn sample_procedure() -> Procedure {
    Procedure::new(
        "P200",
        "Annual physical",
        "Routine yearly examination",
        30,
        "D100",
    )
}

pub fn sample_history() -> PatientHistory {
    PatientHistory::new("H300", 1001, "P200", date(2024, 3, 15), 123.45, "D100")
}

/// Seed a doctor, patient, and procedure so history records have something
/// to reference
pub async fn seed_references(services: &Services) {
    services
        .doctors
        .create(&sample_doctor())
        .await
        .expect("seeding doctor should succeed");
    services
        .patients
        .create(&sample_patient())
        .await
        .expect("seeding patient should succeed");
    services
        .procedures
        .create(&sample_procedure())
        .await
        .expect("seeding procedure should succeed");
}
