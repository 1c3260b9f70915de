//! Configuration loading for launchdash.
//! Reads launchdash.toml from the current directory or the path in the LAUNCHDASH_CONFIG env var.
//! A missing file means defaults; a malformed one is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const CONFIG_ENV: &str = "LAUNCHDASH_CONFIG";
pub const DATASET_ENV: &str = "LAUNCHDASH_DATASET";
pub const PORT_ENV: &str = "LAUNCHDASH_PORT";
pub const DEFAULT_CONFIG_FILE: &str = "launchdash.toml";

/// Upper bound on labelled slider marks (`(slider_max - slider_min) / slider_step + 1`).
pub const MAX_SLIDER_MARKS: usize = 1_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 8050 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf { PathBuf::from("spacex_launch_dash.csv") }

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Dropdown sites; empty means "every site found in the dataset"
    #[serde(default)]
    pub sites: Vec<String>,
    #[serde(default = "default_slider_min")]
    pub slider_min: f64,
    #[serde(default = "default_slider_max")]
    pub slider_max: f64,
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
}

fn default_title()       -> String { "SpaceX Launch Records Dashboard".to_string() }
fn default_slider_min()  -> f64    { 0.0 }
fn default_slider_max()  -> f64    { 10_000.0 }
fn default_slider_step() -> f64    { 1_000.0 }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            sites: Vec::new(),
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.slider_step.is_nan() || self.slider_step <= 0.0 {
            return Err(ConfigError::Invalid {
                key: "dashboard.slider_step".to_string(),
                message: format!("must be positive, got {}", self.slider_step),
            });
        }
        if !self.slider_step.is_finite() {
            return Err(ConfigError::Invalid {
                key: "dashboard.slider_step".to_string(),
                message: format!("must be finite, got {}", self.slider_step),
            });
        }
        if !self.slider_min.is_finite() || !self.slider_max.is_finite() {
            return Err(ConfigError::Invalid {
                key: "dashboard.slider_min".to_string(),
                message: format!(
                    "slider bounds must be finite, got [{}, {}]",
                    self.slider_min, self.slider_max
                ),
            });
        }
        if self.slider_min > self.slider_max {
            return Err(ConfigError::Invalid {
                key: "dashboard.slider_min".to_string(),
                message: format!(
                    "{} is greater than slider_max {}",
                    self.slider_min, self.slider_max
                ),
            });
        }
        let marks = ((self.slider_max - self.slider_min) / self.slider_step).floor() + 1.0;
        if marks > MAX_SLIDER_MARKS as f64 {
            return Err(ConfigError::Invalid {
                key: "dashboard.slider_step".to_string(),
                message: format!(
                    "{} over [{}, {}] gives {} marks, at most {} allowed",
                    self.slider_step, self.slider_min, self.slider_max, marks, MAX_SLIDER_MARKS
                ),
            });
        }
        if self.sites.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                key: "dashboard.sites".to_string(),
                message: "site names must not be empty".to_string(),
            });
        }
        Ok(())
    }
}


impl Config {
    /// Load configuration from launchdash.toml, then apply env overrides.
    /// Checks LAUNCHDASH_CONFIG first, then the current directory.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = Self::load_from(Path::new(&path))?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.dashboard.validate()?;
        Ok(config)
    }

    /// Load from a specific file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply LAUNCHDASH_DATASET / LAUNCHDASH_PORT from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATASET_ENV) {
            info!("Dataset path overridden by {}: {}", DATASET_ENV, path);
            self.dataset.path = PathBuf::from(path);
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: PORT_ENV.to_string(),
                message: format!("{:?} is not a valid port", port),
            })?;
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
