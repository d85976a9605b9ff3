//! Configuration management module.
//!
//! This module handles loading the application configuration, which carries
//! only the spin tuning constants. Entries are never persisted.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/spinwheel-tui";

/// Default upper bound for the random spin target. Observed values range
/// from 500 to 1000 across variants; the larger one is the default.
pub const DEFAULT_UPPER_BOUND: f32 = 1000.0;

/// Default delay between animation steps in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 5;

/// Oversees management of the configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub upper_bound: f32,
    pub step_delay_ms: u64,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f32,
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
}

fn default_upper_bound() -> f32 {
    DEFAULT_UPPER_BOUND
}

fn default_step_delay_ms() -> u64 {
    DEFAULT_STEP_DELAY_MS
}

impl Config {
    /// Return a new instance with default tuning.
    ///
    pub fn new() -> Config {
        Config {
            upper_bound: DEFAULT_UPPER_BOUND,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place;
    /// a present but invalid file is an error.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if !file_path.exists() {
            return Ok(());
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.upper_bound = data.upper_bound;
        self.step_delay_ms = data.step_delay_ms;
        self.validate()?;

        Ok(())
    }

    /// Return the delay between animation steps.
    ///
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Check that the loaded tuning values are usable.
    ///
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.upper_bound.is_finite() || self.upper_bound <= 0.0 {
            return Err(ConfigError::InvalidTuning(format!(
                "upper_bound must be a positive number, got {}",
                self.upper_bound
            )));
        }
        if self.step_delay_ms == 0 {
            return Err(ConfigError::InvalidTuning(
                "step_delay_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration
    /// directory or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
