//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "medrec.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "initializing configuration file");

        println!("📝 Initializing medrec configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(()) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your database settings", self.output);
                println!("  2. Put the password in the environment:");
                println!("     export MEDREC_DATABASE_PASSWORD=...");
                println!("  3. Validate: medrec validate-config");
                println!("  4. Create the schema: medrec init-db");
                println!("  5. Start the menu: medrec");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }

    /// Generate the sample configuration
    fn sample_config() -> String {
        r#"# Medrec configuration file
# Command-line electronic medical records manager

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[database]
# PostgreSQL connection URL; credentials belong in the fields below,
# not in the URL.
url = "postgresql://localhost:5432/medrec"

# Database user
user = "medrec"

# Prefer MEDREC_DATABASE_PASSWORD in the environment; alternatively
# reference another variable here with ${VAR} substitution.
password = ""

# Connection pool settings
max_connections = 4
connect_timeout_secs = 30

[logging]
# Console logging is always on; this enables the JSON file layer.
file_enabled = false

# Directory for log files
directory = "logs"

# Log rotation (daily, hourly, never)
rotation = "daily"
"#
        .to_string()
    }
}
