//! GPIO vocabulary and the capability port the controller consumes.
//!
//! ```text
//!   PowerController ──▶ GpioPort ──▶ adapter (HAL pin, simulator, mock)
//! ```
//!
//! The controller never touches hardware directly; anything that can
//! report and drive a pin level implements [`GpioPort`].

use core::fmt;
use core::ops::Not;

use embedded_hal::digital::PinState;
use serde::{Deserialize, Serialize};

use crate::error::GpioError;

// ───────────────────────────────────────────────────────────────
// Pin identifier
// ───────────────────────────────────────────────────────────────

/// Opaque token naming a physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GpioId(u8);

impl GpioId {
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Board-level pin number.
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for GpioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO {:#04x}", self.0)
    }
}

// ───────────────────────────────────────────────────────────────
// Logic level
// ───────────────────────────────────────────────────────────────

/// Binary electrical state of a pin.  There are no intermediate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    Low = 0x00,
    High = 0xFF,
}

impl Level {
    /// Raw driver code for this level.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl Not for Level {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl From<PinState> for Level {
    fn from(state: PinState) -> Self {
        match state {
            PinState::Low => Self::Low,
            PinState::High => Self::High,
        }
    }
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Capability port
// ───────────────────────────────────────────────────────────────

/// Read/write access to GPIO pins, supplied by a driver or a test double.
pub trait GpioPort {
    /// Current logic level of `pin`.
    ///
    /// Reads have no error channel: implementations must always answer
    /// with one of the two levels.
    fn get_gpio(&mut self, pin: GpioId) -> Level;

    /// Current level of `pin`, or `None` when the adapter cannot tell.
    ///
    /// Only adapters whose readback can fail before any level is known
    /// override this.  The controller treats `None` as "not at target".
    fn try_get_gpio(&mut self, pin: GpioId) -> Option<Level> {
        Some(self.get_gpio(pin))
    }

    /// Command `pin` to `level`.
    fn set_gpio(&mut self, pin: GpioId, level: Level) -> Result<(), GpioError>;
}

impl<G: GpioPort + ?Sized> GpioPort for &mut G {
    fn get_gpio(&mut self, pin: GpioId) -> Level {
        (**self).get_gpio(pin)
    }

    fn try_get_gpio(&mut self, pin: GpioId) -> Option<Level> {
        (**self).try_get_gpio(pin)
    }

    fn set_gpio(&mut self, pin: GpioId, level: Level) -> Result<(), GpioError> {
        (**self).set_gpio(pin, level)
    }
}
