//! Business services for the medical records manager
//!
//! Each entity gets one service that layers the business rules on top of a
//! storage handle: field validation, duplicate-key rejection on create, and
//! existence checks for every cross-entity reference before a write reaches
//! the database. Services take their stores as trait objects, so tests can
//! swap in in-memory fakes and production wires in PostgreSQL-backed stores.
//!
//! The existence checks and the subsequent writes are separate statements,
//! not one transaction. With a single interactive operator that window is
//! harmless; the database constraints still hold the line if it ever races.

mod doctor;
mod history;
mod patient;
mod procedure;

pub use doctor::DoctorService;
pub use history::PatientHistoryService;
pub use patient::PatientService;
pub use procedure::ProcedureService;

use crate::adapters::database::{EntityStore, HistoryStore};
use crate::adapters::postgresql::{PgStore, PostgresClient};
use crate::domain::{Doctor, Patient, PatientHistory, Procedure};
use std::sync::Arc;

/// The full set of entity services, wired over one storage backend
pub struct Services {
    pub doctors: DoctorService,
    pub patients: PatientService,
    pub procedures: ProcedureService,
    pub histories: PatientHistoryService,
}

impl Services {
    /// Wire the services over explicit store handles
    ///
    /// The doctor and patient stores are shared with the services that
    /// check references into them.
    pub fn new(
        doctors: Arc<dyn EntityStore<Doctor>>,
        patients: Arc<dyn EntityStore<Patient>>,
        procedures: Arc<dyn EntityStore<Procedure>>,
        histories: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            doctors: DoctorService::new(Arc::clone(&doctors)),
            patients: PatientService::new(Arc::clone(&patients)),
            procedures: ProcedureService::new(Arc::clone(&procedures), Arc::clone(&doctors)),
            histories: PatientHistoryService::new(histories, patients, procedures, doctors),
        }
    }

    /// Wire the services over PostgreSQL-backed stores sharing one client
    pub fn postgres(client: Arc<PostgresClient>) -> Self {
        let doctors: Arc<dyn EntityStore<Doctor>> =
            Arc::new(PgStore::<Doctor>::new(Arc::clone(&client)));
        let patients: Arc<dyn EntityStore<Patient>> =
            Arc::new(PgStore::<Patient>::new(Arc::clone(&client)));
        let procedures: Arc<dyn EntityStore<Procedure>> =
            Arc::new(PgStore::<Procedure>::new(Arc::clone(&client)));
        let histories: Arc<dyn HistoryStore> = Arc::new(PgStore::<PatientHistory>::new(client));

        Self::new(doctors, patients, procedures, histories)
    }
}
