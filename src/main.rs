// Medrec - Command-line Electronic Medical Records Manager
// Copyright (c) 2025 Medrec Contributors
// Licensed under the MIT License

use clap::Parser;
use medrec::cli::commands::menu::MenuArgs;
use medrec::cli::{Cli, Commands};
use medrec::config::{load_config, LoggingConfig};
use medrec::logging::init_logging;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config_path = cli.config.as_deref().map(Path::new);

    // Logging is configured from the file when it loads. A broken
    // configuration falls back to console defaults here, so the dispatched
    // command can report the actual problem itself.
    let (log_level, logging_config) = match load_config(config_path) {
        Ok(config) => (
            cli.log_level
                .clone()
                .unwrap_or(config.application.log_level),
            config.logging,
        ),
        Err(_) => (
            cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
            LoggingConfig::default(),
        ),
    };

    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "medrec starting");

    // Execute command and get exit code
    let exit_code = match execute_command(&cli, config_path).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config_path: Option<&Path>) -> anyhow::Result<i32> {
    match &cli.command {
        Some(Commands::Menu(args)) => args.execute(config_path).await,
        Some(Commands::InitDb(args)) => args.execute(config_path).await,
        Some(Commands::Status(args)) => args.execute(config_path).await,
        Some(Commands::ValidateConfig(args)) => args.execute(config_path).await,
        Some(Commands::Init(args)) => args.execute().await,
        None => MenuArgs::default().execute(config_path).await,
    }
}
