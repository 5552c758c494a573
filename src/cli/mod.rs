//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for medrec using clap.
//! The interactive records menu is the default command; the rest are
//! one-shot utilities around configuration and the database schema.

pub mod commands;
pub mod menus;
pub mod prompt;

use clap::{Parser, Subcommand};

/// Medrec - command-line medical records manager
#[derive(Parser, Debug)]
#[command(name = "medrec")]
#[command(version, about, long_about = None)]
#[command(author = "Medrec Contributors")]
pub struct Cli {
    /// Path to configuration file (medrec.toml in the working directory
    /// when omitted; built-in defaults when that is absent too)
    #[arg(short, long, env = "MEDREC_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MEDREC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute (the interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive records menu (the default)
    Menu(commands::menu::MenuArgs),

    /// Create the database schema
    InitDb(commands::init_db::InitDbArgs),

    /// Show connection health and row counts
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
