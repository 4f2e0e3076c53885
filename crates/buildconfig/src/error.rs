//! Error types for build configuration resolution

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors produced while resolving the build configuration
///
/// Display strings never contain password values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `storeFile` was configured but a companion credential is missing or
    /// blank. Partial credentials are never applied.
    #[error("signing property `storeFile` is set but `{field}` is missing or blank")]
    MissingCredentialField {
        /// Name of the missing properties key
        field: &'static str,
    },

    /// The configured keystore path does not exist on disk
    #[error("keystore not found: {}", .0.display())]
    SigningKeystoreNotFound(PathBuf),

    /// The properties file could not be parsed
    #[error("malformed properties file {} at line {line}: {reason}", .path.display())]
    MalformedPropertiesFile {
        /// Path to the properties file
        path: PathBuf,
        /// 1-based line number of the offending line
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// The properties file exists but could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
