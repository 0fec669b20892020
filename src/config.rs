use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::n2yo::DEFAULT_BASE_URL;
use crate::propagation::DEFAULT_MAX_EPOCH_OFFSET_DAYS;
use crate::trajectory::TrajectoryConfig;
use crate::visibility::VisibilityConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub n2yo: N2yoConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub visibility: VisibilityConfig,
    #[serde(default)]
    pub trajectory: TrajectoryConfig,
    #[serde(default)]
    pub propagation: PropagationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub cors_origin: Option<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_origin: None,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub folder: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct N2yoConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub enabled: bool,
    #[serde(deserialize_with = "deserialize_duration")]
    pub period: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub fetch_timeout: Duration,
    pub concurrency: usize,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            period: Duration::from_secs(24 * 60 * 60),
            fetch_timeout: Duration::from_secs(30),
            concurrency: 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    pub max_epoch_offset_days: f64,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            max_epoch_offset_days: DEFAULT_MAX_EPOCH_OFFSET_DAYS,
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.refresh.period.is_zero() {
            return invalid("refresh.period must be positive");
        }
        if self.refresh.concurrency == 0 {
            return invalid("refresh.concurrency must be at least 1");
        }
        if self.trajectory.step.is_zero() {
            return invalid("trajectory.step must be positive");
        }
        if !(self.visibility.step_m > 0.0) {
            return invalid("visibility.step_m must be positive");
        }
        if !(self.visibility.earth_radius_m > 0.0) {
            return invalid("visibility.earth_radius_m must be positive");
        }
        if !(self.propagation.max_epoch_offset_days > 0.0) {
            return invalid("propagation.max_epoch_offset_days must be positive");
        }
        Ok(())
    }
}

/// Human-readable durations such as `24h` or `90s`.
pub(crate) fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}
