//! Relational mappings for the EMR record types
//!
//! Each record type describes its own table layout through [`PgEntity`]:
//! table name, key column, the remaining columns, and conversions between
//! rows and records. The generic store assembles its SQL from this mapping,
//! so adding an entity never means writing another data-access object.

use crate::domain::{Doctor, Entity, MedrecError, Patient, PatientHistory, Procedure, Result};
use tokio_postgres::types::{FromSql, ToSql};
use tokio_postgres::Row;

/// Table mapping for one entity type
///
/// `DATA_COLUMNS` lists the non-key columns in the order
/// [`data_params`](Self::data_params) yields their values; rows handed to
/// [`from_row`](Self::from_row) are selected as the key column followed by
/// `DATA_COLUMNS`.
pub trait PgEntity: Entity {
    /// Table name
    const TABLE: &'static str;

    /// Primary key column name
    const KEY_COLUMN: &'static str;

    /// Non-key column names
    const DATA_COLUMNS: &'static [&'static str];

    /// Maps one row back to a record
    fn from_row(row: &Row) -> Result<Self>;

    /// The primary key as a statement parameter
    fn key_param(&self) -> &(dyn ToSql + Sync);

    /// The non-key values as statement parameters, in `DATA_COLUMNS` order
    fn data_params(&self) -> Vec<&(dyn ToSql + Sync)>;
}

/// Decodes one named column, wrapping driver failures so callers never see
/// raw driver error types.
fn column<'r, T>(row: &'r Row, name: &str) -> Result<T>
where
    T: FromSql<'r>,
{
    row.try_get(name)
        .map_err(|e| MedrecError::storage_with(format!("failed to decode column '{name}': {e}"), e))
}

impl PgEntity for Doctor {
    const TABLE: &'static str = "doctors";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] = &["name"];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Doctor {
            id: column(row, "id")?,
            name: column(row, "name")?,
        })
    }

    fn key_param(&self) -> &(dyn ToSql + Sync) {
        &self.id
    }

    fn data_params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![&self.name]
    }
}

impl PgEntity for Patient {
    const TABLE: &'static str = "patients";
    const KEY_COLUMN: &'static str = "mrn";
    const DATA_COLUMNS: &'static [&'static str] = &[
        "fname",
        "lname",
        "dob",
        "address",
        "state",
        "city",
        "zip",
        "insurance",
        "email",
    ];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Patient {
            mrn: column(row, "mrn")?,
            fname: column(row, "fname")?,
            lname: column(row, "lname")?,
            dob: column(row, "dob")?,
            address: column(row, "address")?,
            state: column(row, "state")?,
            city: column(row, "city")?,
            zip: column(row, "zip")?,
            insurance: column(row, "insurance")?,
            email: column(row, "email")?,
        })
    }

    fn key_param(&self) -> &(dyn ToSql + Sync) {
        &self.mrn
    }

    fn data_params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.fname,
            &self.lname,
            &self.dob,
            &self.address,
            &self.state,
            &self.city,
            &self.zip,
            &self.insurance,
            &self.email,
        ]
    }
}

impl PgEntity for Procedure {
    const TABLE: &'static str = "procedures";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] = &["name", "description", "duration", "doctor_id"];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(Procedure {
            id: column(row, "id")?,
            name: column(row, "name")?,
            description: column(row, "description")?,
            duration: column(row, "duration")?,
            doctor_id: column(row, "doctor_id")?,
        })
    }

    fn key_param(&self) -> &(dyn ToSql + Sync) {
        &self.id
    }

    fn data_params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.name,
            &self.description,
            &self.duration,
            &self.doctor_id,
        ]
    }
}

impl PgEntity for PatientHistory {
    const TABLE: &'static str = "patient_history";
    const KEY_COLUMN: &'static str = "id";
    const DATA_COLUMNS: &'static [&'static str] =
        &["patient_id", "procedure_id", "date", "billing", "doctor_id"];

    fn from_row(row: &Row) -> Result<Self> {
        Ok(PatientHistory {
            id: column(row, "id")?,
            patient_id: column(row, "patient_id")?,
            procedure_id: column(row, "procedure_id")?,
            date: column(row, "date")?,
            billing: column(row, "billing")?,
            doctor_id: column(row, "doctor_id")?,
        })
    }

    fn key_param(&self) -> &(dyn ToSql + Sync) {
        &self.id
    }

    fn data_params(&self) -> Vec<&(dyn ToSql + Sync)> {
        vec![
            &self.patient_id,
            &self.procedure_id,
            &self.date,
            &self.billing,
            &self.doctor_id,
        ]
    }
}
