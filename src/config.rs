use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::feature_extractor::feature_tag::DEFAULT_NAMESPACE;

/// Default cap on query nesting depth accepted for extraction
pub const DEFAULT_MAX_NESTING_DEPTH: u32 = 256;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Feature extraction configuration with validation
#[derive(Clone, Debug, Validate, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Vocabulary namespace tag IRIs are minted under
    #[validate(
        length(min = 1, message = "Namespace cannot be empty"),
        custom(function = "validate_namespace")
    )]
    pub namespace: String,

    /// Queries nested deeper than this are rejected before extraction
    #[validate(range(
        min = 1,
        max = 10000,
        message = "Max nesting depth must be between 1 and 10000"
    ))]
    pub max_nesting_depth: u32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ExtractorConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            namespace: env::var("SPARQL_FEATURES_NAMESPACE")
                .unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string()),
            max_nesting_depth: parse_env_var(
                "SPARQL_FEATURES_MAX_DEPTH",
                &DEFAULT_MAX_NESTING_DEPTH.to_string(),
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from CLI arguments with validation
    pub fn from_cli(cli: CliConfig) -> Result<Self, ConfigError> {
        let config = Self {
            namespace: cli.namespace,
            max_nesting_depth: cli.max_nesting_depth,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Merge with another configuration (`other` wins)
    pub fn merge(&mut self, other: Self) {
        self.namespace = other.namespace;
        self.max_nesting_depth = other.max_nesting_depth;
    }
}

/// CLI configuration (parsed from command line arguments)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub namespace: String,
    pub max_nesting_depth: u32,
}

/// Tag IRIs are `namespace + local name`, so the namespace must end in a separator
fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    if namespace.ends_with('#') || namespace.ends_with('/') {
        Ok(())
    } else {
        let mut error = ValidationError::new("namespace_separator");
        error.message = Some("Namespace must end with '#' or '/'".into());
        Err(error)
    }
}

/// Parse an environment variable with a default value
fn parse_env_var<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value,
        source: Box::new(e),
    })
}
