//! Generic PostgreSQL-backed entity store
//!
//! One store implementation serves all four record types. The SQL for each
//! type is assembled once, at construction, from its [`PgEntity`] mapping;
//! every operation then issues a single parameterized statement. No
//! statement batching, no transactions, no retries: each call commits
//! independently.

use crate::adapters::database::traits::{EntityStore, HistoryStore};
use crate::adapters::postgresql::client::PostgresClient;
use crate::adapters::postgresql::entities::PgEntity;
use crate::domain::{PatientHistory, Result};
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// PostgreSQL implementation of the storage traits
///
/// Holds the shared pooled client plus the prepared statement text for one
/// entity type. Construct one per record type over the same client.
pub struct PgStore<E> {
    client: Arc<PostgresClient>,
    select_sql: String,
    select_all_sql: String,
    insert_sql: String,
    update_sql: String,
    delete_sql: String,
    exists_sql: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: PgEntity> PgStore<E> {
    /// Create a new store over the shared client
    pub fn new(client: Arc<PostgresClient>) -> Self {
        Self {
            client,
            select_sql: Self::select_statement(),
            select_all_sql: Self::select_all_statement(),
            insert_sql: Self::insert_statement(),
            update_sql: Self::update_statement(),
            delete_sql: Self::delete_statement(),
            exists_sql: Self::exists_statement(),
            _entity: PhantomData,
        }
    }

    /// Key column followed by the data columns, comma-separated
    fn column_list() -> String {
        let mut columns = Vec::with_capacity(1 + E::DATA_COLUMNS.len());
        columns.push(E::KEY_COLUMN);
        columns.extend_from_slice(E::DATA_COLUMNS);
        columns.join(", ")
    }

    fn select_statement() -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = $1",
            Self::column_list(),
            E::TABLE,
            E::KEY_COLUMN
        )
    }

    fn select_all_statement() -> String {
        format!("SELECT {} FROM {}", Self::column_list(), E::TABLE)
    }

    fn insert_statement() -> String {
        let placeholders: Vec<String> = (1..=1 + E::DATA_COLUMNS.len())
            .map(|n| format!("${n}"))
            .collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            Self::column_list(),
            placeholders.join(", ")
        )
    }

    // The key binds as $1 for updates too, so inserts and updates share one
    // parameter layout: key first, then the data columns.
    fn update_statement() -> String {
        let assignments: Vec<String> = E::DATA_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 2))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = $1",
            E::TABLE,
            assignments.join(", "),
            E::KEY_COLUMN
        )
    }

    fn delete_statement() -> String {
        format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::KEY_COLUMN)
    }

    fn exists_statement() -> String {
        format!("SELECT 1 FROM {} WHERE {} = $1", E::TABLE, E::KEY_COLUMN)
    }

    /// Key parameter followed by the data parameters
    fn write_params(entity: &E) -> Vec<&(dyn ToSql + Sync)> {
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(1 + E::DATA_COLUMNS.len());
        params.push(entity.key_param());
        params.extend(entity.data_params());
        params
    }
}

#[async_trait]
impl<E> EntityStore<E> for PgStore<E>
where
    E: PgEntity,
    E::Key: ToSql + Sync,
{
    async fn create(&self, entity: &E) -> Result<bool> {
        let params = Self::write_params(entity);
        let affected = self.client.execute(&self.insert_sql, &params).await?;

        tracing::debug!(table = E::TABLE, affected, "inserted row");
        Ok(affected > 0)
    }

    async fn read(&self, key: &E::Key) -> Result<Option<E>> {
        let row = self.client.query_opt(&self.select_sql, &[key]).await?;

        match row {
            Some(row) => Ok(Some(E::from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn read_all(&self) -> Result<Vec<E>> {
        let rows = self.client.query(&self.select_all_sql, &[]).await?;

        rows.iter().map(E::from_row).collect()
    }

    async fn update(&self, entity: &E) -> Result<bool> {
        let params = Self::write_params(entity);
        let affected = self.client.execute(&self.update_sql, &params).await?;

        tracing::debug!(table = E::TABLE, affected, "updated row");
        Ok(affected > 0)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool> {
        let affected = self.client.execute(&self.delete_sql, &[key]).await?;

        tracing::debug!(table = E::TABLE, affected, "deleted row");
        Ok(affected > 0)
    }

    async fn exists(&self, key: &E::Key) -> Result<bool> {
        let row = self.client.query_opt(&self.exists_sql, &[key]).await?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl HistoryStore for PgStore<PatientHistory> {
    async fn read_by_patient(&self, patient_id: i32) -> Result<Vec<PatientHistory>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE patient_id = $1",
            Self::column_list(),
            PatientHistory::TABLE
        );
        let rows = self.client.query(&sql, &[&patient_id]).await?;

        rows.iter().map(PatientHistory::from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Doctor, Patient};

    #[test]
    fn test_doctor_statements() {
        assert_eq!(
            PgStore::<Doctor>::select_statement(),
            "SELECT id, name FROM doctors WHERE id = $1"
        );
        assert_eq!(
            PgStore::<Doctor>::insert_statement(),
            "INSERT INTO doctors (id, name) VALUES ($1, $2)"
        );
        assert_eq!(
            PgStore::<Doctor>::update_statement(),
            "UPDATE doctors SET name = $2 WHERE id = $1"
        );
        assert_eq!(
            PgStore::<Doctor>::delete_statement(),
            "DELETE FROM doctors WHERE id = $1"
        );
        assert_eq!(
            PgStore::<Doctor>::exists_statement(),
            "SELECT 1 FROM doctors WHERE id = $1"
        );
    }

    #[test]
    fn test_patient_statements_cover_every_column() {
        assert_eq!(
            PgStore::<Patient>::select_all_statement(),
            "SELECT mrn, fname, lname, dob, address, state, city, zip, insurance, email FROM patients"
        );
        assert_eq!(
            PgStore::<Patient>::insert_statement(),
            "INSERT INTO patients (mrn, fname, lname, dob, address, state, city, zip, insurance, email) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"
        );
    }

    #[test]
    fn test_history_update_binds_key_first() {
        assert_eq!(
            PgStore::<PatientHistory>::update_statement(),
            "UPDATE patient_history SET patient_id = $2, procedure_id = $3, date = $4, \
             billing = $5, doctor_id = $6 WHERE id = $1"
        );
    }
}
