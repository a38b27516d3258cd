//! Typed error variants for the winctl-config crate.
//!
//! Provides structured error types for config I/O and validation operations
//! so callers can match on specific failure modes instead of opaque strings.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading, saving, or validating configuration.
///
/// # Example
///
/// ```rust,no_run
/// use winctl_config::{Config, ConfigError};
///
/// match Config::load() {
///     Ok(config) => println!("loaded {} keybindings", config.keybindings.len()),
///     Err(ConfigError::Parse { path, source }) => {
///         eprintln!("bad YAML in {}: {source}", path.display())
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error on config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The in-memory config could not be serialized back to YAML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
