//! Runtime configuration.
//!
//! Resolution order: built-in defaults, then an optional TOML file
//! (`KINDROUTER_CONFIG`), then `KINDROUTER_*` environment variables.
//! CLI flags are applied on top by the binary. The engine itself takes
//! no configuration; everything here shapes the run around it.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dispatch::AdmissionMode;
use crate::pipeline::ErrorPolicy;

/// Environment variable naming the optional config file.
pub const ENV_CONFIG: &str = "KINDROUTER_CONFIG";
/// Environment variable overriding the manifest directory.
pub const ENV_MANIFEST_DIR: &str = "KINDROUTER_MANIFEST_DIR";
/// Environment variable selecting the decode error policy (stop|continue).
pub const ENV_ON_DECODE_ERROR: &str = "KINDROUTER_ON_DECODE_ERROR";
/// Environment variable selecting admission semantics (pattern|exact).
pub const ENV_ADMISSION: &str = "KINDROUTER_ADMISSION";

const DEFAULT_MANIFEST_DIR: &str = "./resources";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Resolved configuration, constructed once at startup and passed by
/// value into the collaborators that need it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub manifest_dir: PathBuf,
    pub error_policy: ErrorPolicy,
    pub admission: AdmissionMode,
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_dir: PathBuf::from(DEFAULT_MANIFEST_DIR),
            error_policy: ErrorPolicy::default(),
            admission: AdmissionMode::default(),
            json_output: false,
        }
    }
}

/// On-disk shape of the optional config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    manifest_dir: Option<PathBuf>,
    on_decode_error: Option<String>,
    admission: Option<String>,
    json: Option<bool>,
}

impl Config {
    /// Resolve defaults, config file, and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(path) = std::env::var(ENV_CONFIG) {
            config.apply_file(Path::new(&path))?;
        }
        config.apply_env()?;
        Ok(config)
    }

    /// Merge settings from a TOML file.
    pub fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read { path: path.to_path_buf(), source: e })?;
        let file: FileConfig = toml::from_str(&text)
            .map_err(|e| ConfigError::Parse { path: path.to_path_buf(), source: e })?;

        if let Some(dir) = file.manifest_dir {
            self.manifest_dir = dir;
        }
        if let Some(policy) = file.on_decode_error {
            self.error_policy = parse_value("on_decode_error", &policy)?;
        }
        if let Some(mode) = file.admission {
            self.admission = parse_value("admission", &mode)?;
        }
        if let Some(json) = file.json {
            self.json_output = json;
        }
        Ok(())
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(dir) = std::env::var(ENV_MANIFEST_DIR) {
            self.manifest_dir = PathBuf::from(dir);
        }
        if let Ok(policy) = std::env::var(ENV_ON_DECODE_ERROR) {
            self.error_policy = parse_value(ENV_ON_DECODE_ERROR, &policy)?;
        }
        if let Ok(mode) = std::env::var(ENV_ADMISSION) {
            self.admission = parse_value(ENV_ADMISSION, &mode)?;
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr<Err = String>>(
    key: &str,
    value: &str,
) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|reason| ConfigError::InvalidValue { key: key.to_string(), reason })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
