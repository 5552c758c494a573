//! Init-db command implementation
//!
//! This module implements the `init-db` command, which applies the embedded
//! schema migration. The migration is idempotent, so running it against an
//! already initialized database is safe.

use crate::adapters::postgresql::PostgresClient;
use crate::config::load_config;
use clap::Args;
use std::path::Path;

/// Arguments for the init-db command
#[derive(Args, Debug)]
pub struct InitDbArgs {}

impl InitDbArgs {
    /// Execute the init-db command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!("initializing database schema");

        println!("🗄️  Initializing database schema");
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

        match client.ensure_schema().await {
            Ok(()) => {
                println!("✅ Schema is in place: {}", config.database.redacted_url());
                println!();
                println!("Next steps:");
                println!("  1. Run 'medrec status' to confirm the tables");
                println!("  2. Run 'medrec' to start the records menu");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to apply the schema migration");
                println!("   Error: {e}");
                Ok(1)
            }
        }
    }
}
