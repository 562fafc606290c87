//! Configuration loading from TOML files.
//!
//! Every section is optional; omitted fields fall back to defaults so
//! the tool runs without a config file at all.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Number of risks a sprint simulation generates by default.
pub const DEFAULT_RISKS_PER_SPRINT: u8 = 5;
/// Most risks a single simulation will generate.
pub const MAX_RISKS_PER_SPRINT: u8 = 20;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Risks generated per sprint, 1..=20.
    pub risks_per_sprint: u8,
    /// Fixed seed for reproducible sprints; omit for entropy seeding.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory that timestamped CSV exports land in.
    pub directory: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.simulation.risks_per_sprint == 0
            || self.simulation.risks_per_sprint > MAX_RISKS_PER_SPRINT
        {
            return Err(ConfigError::InvalidValue {
                field: "risks_per_sprint",
                reason: format!(
                    "must be between 1 and {MAX_RISKS_PER_SPRINT}, got {}",
                    self.simulation.risks_per_sprint
                ),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            risks_per_sprint: DEFAULT_RISKS_PER_SPRINT,
            seed: None,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` overrides the configured level.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // "warn" keeps log noise out of table output; raise via RUST_LOG.
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}
