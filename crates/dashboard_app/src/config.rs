//! Settings from an optional RON file, overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use dashboard_engine::{ApiError, ClientSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::logging::LogDestination;

/// Picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.ron";

#[derive(Debug, Parser)]
#[command(name = "job-dashboard")]
#[command(version, about = "Live dashboard for the media processing job queue", long_about = None)]
pub struct CliArgs {
    /// Path to a RON configuration file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. http://127.0.0.1:5000
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Status poll interval in milliseconds
    #[arg(long = "poll-interval-ms", value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Where log output goes
    #[arg(long = "log", value_enum)]
    pub log_destination: Option<LogDestination>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub base_url: String,
    pub poll_interval_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub log_destination: LogDestination,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            poll_interval_ms: 2_000,
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
            log_destination: LogDestination::File,
        }
    }
}

impl DashboardConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn client_settings(&self) -> Result<ClientSettings, ApiError> {
        let mut settings = ClientSettings::new(&self.base_url)?;
        settings.connect_timeout = Duration::from_millis(self.connect_timeout_ms);
        settings.request_timeout = Duration::from_millis(self.request_timeout_ms);
        Ok(settings)
    }

    fn apply(&mut self, args: &CliArgs) {
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(interval) = args.poll_interval_ms {
            self.poll_interval_ms = interval;
        }
        if let Some(destination) = args.log_destination {
            self.log_destination = destination;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid("poll_interval_ms must be positive".into()));
        }
        if self.request_timeout_ms == 0 || self.connect_timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeouts must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// An explicit `--config` must exist; the default file is optional.
pub fn load(args: &CliArgs) -> Result<DashboardConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => read_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => read_file(Path::new(DEFAULT_CONFIG_FILE))?,
        None => DashboardConfig::default(),
    };
    config.apply(args);
    config.validate()?;
    Ok(config)
}

fn read_file(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&text).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
