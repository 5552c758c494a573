//! Status command implementation
//!
//! This module implements the `status` command for checking database
//! connectivity and row counts per table.

use crate::adapters::postgresql::PostgresClient;
use crate::config::load_config;
use clap::Args;
use std::path::Path;

const TABLES: [&str; 4] = ["doctors", "patients", "procedures", "patient_history"];

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!("checking database status");

        println!("📊 Database Status");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let client = match PostgresClient::new(config.database.clone()) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to set up the database client");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        if let Err(e) = client.test_connection().await {
            println!("❌ Unable to connect to the database");
            println!("   Error: {e}");
            return Ok(1);
        }

        println!("✅ Connected: {}", config.database.redacted_url());
        println!();
        println!("{:<20} {:>10}", "Table", "Rows");
        println!("{}", "-".repeat(31));

        for table in TABLES {
            match table_count(&client, table).await {
                Ok(count) => println!("{table:<20} {count:>10}"),
                Err(e) => {
                    println!("{table:<20} {:>10}", "?");
                    println!("   Error: {e}");
                    return Ok(1);
                }
            }
        }

        println!();
        Ok(0)
    }
}

async fn table_count(client: &PostgresClient, table: &str) -> anyhow::Result<i64> {
    // Table names come from the fixed list above, never from input.
    let statement = format!("SELECT COUNT(*) FROM {table}");
    let row = client
        .query_opt(&statement, &[])
        .await?
        .ok_or_else(|| anyhow::anyhow!("count query returned no row"))?;
    Ok(row.try_get(0)?)
}
