//! `embedded-hal` adapter — bridges one real output pin to [`GpioPort`].
//!
//! Works with any HAL whose output driver implements
//! [`StatefulOutputPin`], e.g. `esp_idf_hal::gpio::PinDriver` in output
//! mode.
//!
//! ## Polarity
//!
//! With `active_low` set, a logical `High` pulls the line low.  The
//! controller only ever sees logical levels.
//!
//! ## Readback failures
//!
//! [`GpioPort::get_gpio`] cannot fail, but `is_set_high()` can.  The
//! adapter keeps a shadow of the physical line: seeded by one readback at
//! construction, then updated by every successful write or readback.  When
//! a readback errors the shadow is reported instead.  If the line has
//! never been known, [`GpioPort::try_get_gpio`] answers `None` so the
//! controller writes rather than assuming the pin is already at target.

use embedded_hal::digital::{Error as _, PinState, StatefulOutputPin};
use log::{debug, warn};

use crate::config::ControllerConfig;
use crate::error::GpioError;
use crate::gpio::{GpioId, GpioPort, Level};

pub struct HalGpio<P> {
    pin: P,
    id: GpioId,
    active_low: bool,
    /// Last known physical line level.
    line: Option<Level>,
}

impl<P: StatefulOutputPin> HalGpio<P> {
    /// Bind `pin` as the active-high line `id`.
    ///
    /// Reads the line once to seed the shadow.
    pub fn new(mut pin: P, id: GpioId) -> Self {
        let line = match pin.is_set_high() {
            Ok(high) => Some(Level::from(high)),
            Err(e) => {
                warn!("{}: initial readback failed ({:?}), level unknown", id, e.kind());
                None
            }
        };
        Self {
            pin,
            id,
            active_low: false,
            line,
        }
    }

    pub fn from_config(pin: P, config: &ControllerConfig) -> Self {
        Self::new(pin, config.power_gpio).with_active_low(config.active_low)
    }

    pub fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub fn id(&self) -> GpioId {
        self.id
    }

    /// Last known logical level, polarity applied.
    pub fn shadow(&self) -> Option<Level> {
        self.line.map(|line| self.logical(line))
    }

    /// Release the underlying pin driver.
    pub fn release(self) -> P {
        self.pin
    }

    fn line_state(&self, level: Level) -> PinState {
        let line = if self.active_low { !level } else { level };
        line.into()
    }

    fn logical(&self, line: Level) -> Level {
        if self.active_low { !line } else { line }
    }
}

impl<P: StatefulOutputPin> GpioPort for HalGpio<P> {
    /// Unknown levels read as `Low`; the controller itself uses
    /// [`try_get_gpio`](GpioPort::try_get_gpio).
    fn get_gpio(&mut self, pin: GpioId) -> Level {
        self.try_get_gpio(pin).unwrap_or(Level::Low)
    }

    fn try_get_gpio(&mut self, pin: GpioId) -> Option<Level> {
        if pin != self.id {
            warn!("{}: read of unbound pin {}, reporting shadow", self.id, pin);
            return self.shadow();
        }
        match self.pin.is_set_high() {
            Ok(high) => {
                self.line = Some(Level::from(high));
            }
            Err(e) => match self.shadow() {
                Some(level) => warn!(
                    "{}: readback failed ({:?}), reporting last known {}",
                    self.id,
                    e.kind(),
                    level
                ),
                None => warn!(
                    "{}: readback failed ({:?}), level unknown",
                    self.id,
                    e.kind()
                ),
            },
        }
        self.shadow()
    }

    fn set_gpio(&mut self, pin: GpioId, level: Level) -> Result<(), GpioError> {
        if pin != self.id {
            warn!("{}: refusing write to unbound pin {}", self.id, pin);
            return Err(GpioError::UnknownPin(pin));
        }
        let line = self.line_state(level);
        match self.pin.set_state(line) {
            Ok(()) => {
                debug!("{} -> {} (line {:?})", self.id, level, line);
                self.line = Some(Level::from(line));
                Ok(())
            }
            Err(e) => {
                warn!("{}: write {} failed ({:?})", self.id, level, e.kind());
                Err(GpioError::WriteFailed)
            }
        }
    }
}
