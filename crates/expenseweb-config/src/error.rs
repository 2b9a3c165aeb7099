//! Error types for expenseweb-config

use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid YAML format: {message}")]
    InvalidYaml { message: String },

    #[error("Invalid field value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Could not read config file: {message}")]
    IoError { message: String },
}

impl ConfigError {
    /// What the operator can do about it, shown next to the startup error
    pub fn hint(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => {
                "Use --config to point at an existing file, or --print-config for a starting template".to_string()
            }
            ConfigError::InvalidYaml { .. } => {
                "Compare the file against the output of --print-config".to_string()
            }
            ConfigError::InvalidValue { field, .. } => {
                format!("Fix '{}' in the config file or override it on the command line", field)
            }
            ConfigError::IoError { .. } => "Check that the file is readable".to_string(),
        }
    }
}

/// Result type with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
