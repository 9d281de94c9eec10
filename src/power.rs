//! Power controller — the state-check-and-set core.
//!
//! [`PowerController`] drives a single power pin to a target level through
//! an injected [`GpioPort`].  The port is the only source of truth for the
//! pin state; the controller keeps nothing between calls.
//!
//! ```text
//!   read level ──▶ already at target? ──yes──▶ Ok(Unchanged)
//!                        │ no
//!                        ▼
//!                  write target ──ok──▶ Ok(Switched)
//!                        │ err
//!                        ▼
//!                     Err(e)
//! ```
//!
//! At most one write is issued per call and a failed write is never
//! retried.

use crate::config::ControllerConfig;
use crate::error::GpioError;
use crate::gpio::{GpioId, GpioPort, Level};
use crate::pins;

// ───────────────────────────────────────────────────────────────
// Outcomes
// ───────────────────────────────────────────────────────────────

/// What a successful power operation did to the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The pin already reported the target level; nothing was written.
    Unchanged,
    /// The pin was written to the target level.
    Switched,
}

impl Transition {
    /// Whether the operation issued a GPIO write.
    pub const fn wrote(self) -> bool {
        matches!(self, Self::Switched)
    }
}

/// Flat SUCCESS / FAILURE view of an operation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Failure = 0x00,
    Success = 0xFF,
}

impl Status {
    /// Raw controller return code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl<T, E> From<&Result<T, E>> for Status {
    fn from(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

// ───────────────────────────────────────────────────────────────
// PowerController
// ───────────────────────────────────────────────────────────────

/// Idempotent on/off control of one power pin.
#[derive(Debug)]
pub struct PowerController<G> {
    gpio: G,
    pin: GpioId,
}

impl<G: GpioPort> PowerController<G> {
    /// Control the board's power pin ([`pins::POWER_GPIO`]).
    pub const fn new(gpio: G) -> Self {
        Self::with_pin(gpio, pins::POWER_GPIO)
    }

    /// Control an arbitrary pin.
    pub const fn with_pin(gpio: G, pin: GpioId) -> Self {
        Self { gpio, pin }
    }

    pub fn from_config(gpio: G, config: &ControllerConfig) -> Self {
        Self::with_pin(gpio, config.power_gpio)
    }

    /// Drive the power pin HIGH unless it already is.
    pub fn power_on(&mut self) -> Result<Transition, GpioError> {
        self.drive(Level::High)
    }

    /// Drive the power pin LOW unless it already is.
    pub fn power_off(&mut self) -> Result<Transition, GpioError> {
        self.drive(Level::Low)
    }

    /// Bring the pin to `target`, writing only on mismatch.
    ///
    /// A write error from the port is returned unchanged.  An unknown level
    /// counts as a mismatch.
    pub fn drive(&mut self, target: Level) -> Result<Transition, GpioError> {
        if self.gpio.try_get_gpio(self.pin) == Some(target) {
            return Ok(Transition::Unchanged);
        }
        self.gpio.set_gpio(self.pin, target)?;
        Ok(Transition::Switched)
    }

    /// Whether the pin currently reads HIGH.  Never writes.
    pub fn is_powered(&mut self) -> bool {
        self.gpio.get_gpio(self.pin).is_high()
    }

    pub fn pin(&self) -> GpioId {
        self.pin
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    /// Give back the GPIO capability.
    pub fn into_inner(self) -> G {
        self.gpio
    }
}
