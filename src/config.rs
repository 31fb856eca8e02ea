//! Pipeline configuration
//!
//! Loaded once per run, from YAML or built in code, and validated before any
//! catalog is derived from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// YAML could not be parsed into a config
    #[error("Failed to parse pipeline config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A field holds a value the pipeline cannot work with
    #[error("Invalid config field {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Naming convention of document identifiers.
///
/// An identifier looks like `<prefix><sep><name tokens joined by sep><sep><suffix>`,
/// e.g. `ministry-of-national-defence-mandate-letter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConvention {
    /// Leading fragment shared by every identifier
    pub prefix: String,
    /// Trailing fragment shared by every identifier
    pub suffix: String,
    /// Token separator, also used between prefix/suffix and the name
    pub separator: char,
}

impl Default for IdentifierConvention {
    fn default() -> Self {
        Self {
            prefix: "ministry-of".to_string(),
            suffix: "mandate-letter".to_string(),
            separator: '-',
        }
    }
}

/// Top-level pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// How document identifiers reduce to entity surface names
    pub identifiers: IdentifierConvention,
    /// Literal fragments marking noise lines
    pub boilerplate: Vec<String>,
    /// Extract documents on the rayon pool
    pub parallel: bool,
    /// Upper bound for heat map colouring; reported, never applied
    pub display_clamp: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            identifiers: IdentifierConvention::default(),
            boilerplate: Vec::new(),
            parallel: false,
            display_clamp: None,
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> ConfigResult<()> {
        let ids = &self.identifiers;
        if ids.prefix.trim().is_empty() {
            return Err(invalid("identifiers.prefix", "must not be empty"));
        }
        if ids.suffix.trim().is_empty() {
            return Err(invalid("identifiers.suffix", "must not be empty"));
        }
        if ids.separator.is_alphanumeric() || ids.separator.is_whitespace() {
            return Err(invalid(
                "identifiers.separator",
                format!("{:?} cannot separate name tokens", ids.separator),
            ));
        }
        if let Some(pos) = self.boilerplate.iter().position(|f| f.trim().is_empty()) {
            return Err(invalid(
                "boilerplate",
                format!("fragment {} is empty and would match every line", pos),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
