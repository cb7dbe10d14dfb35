//! Server configuration.

use std::path::PathBuf;

/// Runtime configuration, read once at startup.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | `PORT` | `3001` | HTTP listen port |
/// | `DATA_FILE` | `data.json` | Path of the JSON document holding every collection |
/// | `LOG_LEVEL` | `info` | Minimum `tracing` level |
/// | `LOG_DIR` | unset | When set, logs go to daily-rolling files in this directory |
/// | `ENVIRONMENT` | `development` | `development` / `staging` / `production` |
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_file: PathBuf,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            data_file: std::env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data.json")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Same as [`Config::from_env`] but pointed at a specific data file.
    /// Mainly for tests running against temp directories.
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
            ..Self::from_env()
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
