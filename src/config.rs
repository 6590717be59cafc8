use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Timing of the simulated call, in multiples of one time unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub time_unit_ms: u64,
    /// Delay before each of the two phase changes.
    pub phase_delay_units: u32,
    /// Period of the connected-duration counter.
    pub tick_units: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: 1000,
            phase_delay_units: 2,
            tick_units: 1,
        }
    }
}

impl SimulatorConfig {
    pub fn phase_delay(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms.saturating_mul(self.phase_delay_units.into()))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms.saturating_mul(self.tick_units.into()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_unit_ms == 0 {
            return Err(ConfigError::ZeroDuration("time_unit_ms"));
        }
        if self.tick_units == 0 {
            return Err(ConfigError::ZeroDuration("tick_units"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreensConfig {
    pub simulator: SimulatorConfig,
}

impl ScreensConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.simulator.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
