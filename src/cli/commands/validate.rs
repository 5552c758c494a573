//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the medrec configuration file.

use crate::config::{load_config, DEFAULT_CONFIG_FILE};
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let shown = config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("{DEFAULT_CONFIG_FILE} (or defaults)"));

        tracing::info!(config_path = %shown, "validating configuration");

        println!("🔍 Validating configuration: {shown}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Database URL: {}", config.database.redacted_url());
        println!("  Database User: {}", config.database.user);
        println!("  Max Connections: {}", config.database.max_connections);
        println!("  Connect Timeout: {}s", config.database.connect_timeout_secs);
        println!(
            "  File Logging: {}",
            if config.logging.file_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!();
        Ok(0)
    }
}
