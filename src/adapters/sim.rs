//! Simulated pin bank for host runs and tests.
//!
//! Levels live in a fixed-capacity map; pins that were never written read
//! `Low`, matching a pulled-down output after reset.  Individual pins can
//! be told to reject writes so failure paths can be exercised without
//! hardware.

use heapless::{FnvIndexMap, Vec};
use log::{trace, warn};

use crate::error::GpioError;
use crate::gpio::{GpioId, GpioPort, Level};

/// Maximum number of distinct pins the simulator tracks.
pub const SIM_BANK_SIZE: usize = 8;

#[derive(Debug, Default)]
pub struct SimGpio {
    levels: FnvIndexMap<GpioId, Level, SIM_BANK_SIZE>,
    failing: Vec<GpioId, SIM_BANK_SIZE>,
    reads: u32,
    writes: u32,
}

impl SimGpio {
    pub const fn new() -> Self {
        Self {
            levels: FnvIndexMap::new(),
            failing: Vec::new(),
            reads: 0,
            writes: 0,
        }
    }

    /// Builder form of [`preset`](Self::preset).
    pub fn with_level(mut self, pin: GpioId, level: Level) -> Self {
        if let Err(e) = self.preset(pin, level) {
            warn!("sim: cannot preset {}: {}", pin, e);
        }
        self
    }

    /// Set a pin level directly, bypassing write accounting and failure
    /// injection.  Models an external agent moving the line.
    pub fn preset(&mut self, pin: GpioId, level: Level) -> Result<(), GpioError> {
        self.levels
            .insert(pin, level)
            .map(|_| ())
            .map_err(|_| GpioError::BankFull)
    }

    /// Make every subsequent write to `pin` fail (or succeed again).
    pub fn fail_writes(&mut self, pin: GpioId, fail: bool) {
        let listed = self.failing.iter().position(|p| *p == pin);
        match (fail, listed) {
            (true, None) => {
                if self.failing.push(pin).is_err() {
                    warn!("sim: failure list full, {} keeps accepting writes", pin);
                }
            }
            (false, Some(idx)) => {
                self.failing.swap_remove(idx);
            }
            _ => {}
        }
    }

    /// Current level without counting a read.
    pub fn level(&self, pin: GpioId) -> Level {
        self.levels.get(&pin).copied().unwrap_or(Level::Low)
    }

    /// Write attempts so far, failed ones included.
    pub fn writes(&self) -> u32 {
        self.writes
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl GpioPort for SimGpio {
    fn get_gpio(&mut self, pin: GpioId) -> Level {
        self.reads += 1;
        let level = self.level(pin);
        trace!("sim: read {} = {}", pin, level);
        level
    }

    fn set_gpio(&mut self, pin: GpioId, level: Level) -> Result<(), GpioError> {
        self.writes += 1;
        if self.failing.contains(&pin) {
            trace!("sim: write {} <- {} rejected", pin, level);
            return Err(GpioError::WriteFailed);
        }
        self.preset(pin, level)?;
        trace!("sim: write {} <- {}", pin, level);
        Ok(())
    }
}
