//! Configuration System
//!
//! Layered configuration for both utilities: built-in defaults, a global
//! user file, a local `dirdump.toml`, then `DIRDUMP_*` environment variables.
//! Command-line flags are applied on top by the CLI.

use crate::error::DumpError;
use crate::logging::{validate_format, validate_output, LoggingConfig};
use crate::namespace::DEFAULT_EXTENSION;
use crate::tree::path::normalize_extension;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::local_file::LOCAL_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirdumpConfig {
    /// Traversal settings shared by concat and map
    #[serde(default)]
    pub walk: WalkerConfig,

    /// Concatenator settings
    #[serde(default)]
    pub concat: ConcatConfig,

    /// Namespace mapper settings
    #[serde(default)]
    pub map: MapConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Concatenator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcatConfig {
    /// Skip the output file when it lies inside the dumped tree
    #[serde(default = "default_true")]
    pub exclude_output: bool,
}

impl Default for ConcatConfig {
    fn default() -> Self {
        Self {
            exclude_output: default_true(),
        }
    }
}

/// Namespace mapper settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// File suffix to collect (e.g. ".java")
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Walk(String),
    Map(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Walk(msg) => write!(f, "walk: {}", msg),
            ValidationError::Map(msg) => write!(f, "map: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DirdumpConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.walk.ignore_patterns.iter().any(|p| p.trim().is_empty()) {
            errors.push(ValidationError::Walk(
                "Ignore patterns cannot be empty".to_string(),
            ));
        }

        if let Err(e) = normalize_extension(&self.map.extension) {
            errors.push(ValidationError::Map(e.to_string()));
        }

        if let Err(e) = validate_format(&self.logging.format) {
            errors.push(ValidationError::Logging(e.to_string()));
        }
        if let Err(e) = validate_output(&self.logging.output) {
            errors.push(ValidationError::Logging(e.to_string()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding every problem into one error.
    pub fn ensure_valid(&self) -> Result<(), DumpError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            DumpError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, DumpError> {
        toml::to_string_pretty(self)
            .map_err(|e| DumpError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
