//! Configuration types for Game of Life sessions.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Smallest board on which every cell has eight distinct neighbours.
pub const MIN_BOARD_SIZE: usize = 3;

fn default_size() -> usize {
    16
}

fn default_frame_delay_ms() -> u64 {
    400
}

fn default_cycles() -> u32 {
    13
}

fn default_max_cycles() -> u32 {
    10_000
}

/// Top-level session configuration. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeConfig {
    /// Board side length N; the board is N x N.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Pause between rendered generations, in milliseconds.
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
    /// Generations to run when no count is given.
    #[serde(default = "default_cycles")]
    pub default_cycles: u32,
    /// Largest accepted generation count for a single run.
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            frame_delay_ms: default_frame_delay_ms(),
            default_cycles: default_cycles(),
            max_cycles: default_max_cycles(),
        }
    }
}

impl LifeConfig {
    /// Parse configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a JSON file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Pause between rendered generations.
    #[inline]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE {
            return Err(ConfigError::InvalidSize {
                size: self.size,
                min: MIN_BOARD_SIZE,
            });
        }
        if self.default_cycles > self.max_cycles {
            return Err(ConfigError::DefaultCyclesOutOfRange {
                default: self.default_cycles,
                max: self.max_cycles,
            });
        }
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Board size {size} is too small (minimum {min})")]
    InvalidSize { size: usize, min: usize },
    #[error("Default cycle count {default} exceeds maximum {max}")]
    DefaultCyclesOutOfRange { default: u32, max: u32 },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
