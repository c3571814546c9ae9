use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr};
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// How the CLI prints a built query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The query object (`text` + `parameters`) as JSON
    #[default]
    Json,
    /// The query object as YAML
    Yaml,
    /// Only the query text
    Text,
}

#[derive(Debug, Error)]
#[error("unknown output format '{0}' (expected json, yaml or text)")]
pub struct UnknownFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "text" | "cypher" => Ok(OutputFormat::Text),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("log_level");
        error.message = Some("Log level must be one of error, warn, info, debug, trace".into());
        Err(error)
    }
}

/// Output settings of the `cypher-builder` tool
#[derive(Clone, Debug, Validate, Serialize, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the debug-interpolated text instead of the query
    #[serde(default)]
    pub interpolate: bool,

    /// Default log filter, overridden by `RUST_LOG`
    #[validate(custom(function = "validate_log_level"))]
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            interpolate: false,
            log_level: default_log_level(),
        }
    }
}

impl ToolConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            format: parse_env_var("CYPHER_BUILDER_FORMAT", "json")?,
            interpolate: parse_env_var("CYPHER_BUILDER_INTERPOLATE", "false")?,
            log_level: env::var("CYPHER_BUILDER_LOG").unwrap_or_else(|_| default_log_level()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from CLI arguments with validation
    pub fn from_cli(cli: CliConfig) -> Result<Self, ConfigError> {
        let config = Self {
            format: cli.format,
            interpolate: cli.interpolate,
            log_level: cli.log_level,
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

    /// Overlay the explicitly given CLI settings
    pub fn merge(&mut self, other: CliOverrides) {
        if let Some(format) = other.format {
            self.format = format;
        }
        if other.interpolate {
            self.interpolate = true;
        }
        if let Some(log_level) = other.log_level {
            self.log_level = log_level;
        }
    }
}

/// CLI configuration (parsed from command line arguments)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub interpolate: bool,
    pub log_level: String,
}

/// Settings given on the command line, applied over a file or environment config
#[derive(Clone, Debug, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub interpolate: bool,
    pub log_level: Option<String>,
}

/// Parse an environment variable with a default value
fn parse_env_var<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
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
