//! Controller configuration parameters
//!
//! Which pin carries the power line, its polarity, and the level to apply
//! at boot.  Values can be supplied as JSON at provisioning time.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gpio::{GpioId, Level};
use crate::pins;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Pin wired to the load switch
    pub power_gpio: GpioId,
    /// Load switch is enabled by pulling the line LOW
    pub active_low: bool,
    /// Level to drive once at boot; `None` leaves the pin untouched
    pub boot_level: Option<Level>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            power_gpio: pins::POWER_GPIO,
            active_low: false,
            boot_level: Some(Level::High),
        }
    }
}

impl ControllerConfig {
    /// Reject configurations that would drive a pin reserved for another
    /// board function.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if pins::RESERVED.contains(&self.power_gpio) {
            return Err(ConfigError::ValidationFailed(
                "power_gpio: pin is reserved for another function",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.  Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
