//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MedrecConfig;
use crate::config::secret_string;
use crate::domain::errors::MedrecError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "medrec.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file, if one is present
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MedrecConfig
/// 4. Applies environment variable overrides (MEDREC_* prefix)
/// 5. Validates the configuration
///
/// With `path = None` the loader looks for [`DEFAULT_CONFIG_FILE`] and falls
/// back to built-in defaults when it is absent. An explicitly given path must
/// exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given file does not exist or cannot be read
/// - TOML parsing fails
/// - A `${VAR}` placeholder references an unset environment variable
/// - Configuration validation fails
pub fn load_config(path: Option<&Path>) -> Result<MedrecConfig> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(MedrecError::Configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            parse_file(path)?
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                parse_file(default)?
            } else {
                MedrecConfig::default()
            }
        }
    };

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        MedrecError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn parse_file(path: &Path) -> Result<MedrecConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        MedrecError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    toml::from_str(&contents)
        .map_err(|e| MedrecError::Configuration(format!("Failed to parse TOML: {e}")))
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All missing variables are collected so
/// the error reports every one of them at once.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("pattern should be a valid regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MedrecError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the MEDREC_* prefix
///
/// Recognized variables: MEDREC_DATABASE_URL, MEDREC_DATABASE_USER,
/// MEDREC_DATABASE_PASSWORD, MEDREC_LOG_LEVEL.
fn apply_env_overrides(config: &mut MedrecConfig) {
    if let Ok(val) = std::env::var("MEDREC_DATABASE_URL") {
        config.database.url = val;
    }
    if let Ok(val) = std::env::var("MEDREC_DATABASE_USER") {
        config.database.user = val;
    }
    if let Ok(val) = std::env::var("MEDREC_DATABASE_PASSWORD") {
        config.database.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("MEDREC_LOG_LEVEL") {
        config.application.log_level = val;
    }
}
