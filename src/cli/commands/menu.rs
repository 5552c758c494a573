//! Interactive menu command implementation
//!
//! This is the default command: it connects to PostgreSQL, wires the
//! services, and hands control to the menu loop on stdin.

use crate::adapters::postgresql::PostgresClient;
use crate::cli::menus;
use crate::cli::prompt::Prompter;
use crate::config::load_config;
use crate::services::Services;
use clap::Args;
use std::path::Path;
use std::sync::Arc;
use tokio::io::BufReader;

/// Arguments for the menu command
#[derive(Args, Debug, Default)]
pub struct MenuArgs {}

impl MenuArgs {
    /// Execute the interactive menu
    ///
    /// Exit codes: 0 on a normal session, 1 when the initial database
    /// connection fails, 2 on configuration problems.
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
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

        let services = Services::postgres(Arc::new(client));
        let mut prompter = Prompter::new(BufReader::new(tokio::io::stdin()));

        menus::main_menu(&mut prompter, &services).await?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_args_creation() {
        let args = MenuArgs::default();
        let _ = format!("{args:?}");
    }
}
