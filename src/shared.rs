//! Mutex-guarded power controller for concurrent callers.
//!
//! [`PowerController`] assumes exclusive, sequential access to its pin.
//! When several tasks or threads may switch the same pin, wrap it here:
//! each operation's read-then-write runs under one `embassy-sync`
//! blocking mutex, so two callers can never both observe LOW and both
//! write HIGH.
//!
//! With [`CriticalSectionRawMutex`](embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex)
//! the wrapper is `Sync` and can live in a `static`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use log::warn;

use crate::error::GpioError;
use crate::gpio::{GpioPort, Level};
use crate::power::{PowerController, Transition};

pub struct SharedPowerController<M: RawMutex, G> {
    inner: Mutex<M, RefCell<PowerController<G>>>,
}

impl<M: RawMutex, G: GpioPort> SharedPowerController<M, G> {
    pub const fn new(controller: PowerController<G>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    pub fn power_on(&self) -> Result<Transition, GpioError> {
        self.drive(Level::High)
    }

    pub fn power_off(&self) -> Result<Transition, GpioError> {
        self.drive(Level::Low)
    }

    pub fn drive(&self, target: Level) -> Result<Transition, GpioError> {
        self.with(|ctrl| {
            let result = ctrl.drive(target);
            if let Err(e) = &result {
                warn!("{}: drive to {} failed: {}", ctrl.pin(), target, e);
            }
            result
        })
    }

    pub fn is_powered(&self) -> bool {
        self.with(PowerController::is_powered)
    }

    /// Run `f` with exclusive access to the controller.
    ///
    /// Re-entering the wrapper from inside `f` panics.
    pub fn with<R>(&self, f: impl FnOnce(&mut PowerController<G>) -> R) -> R {
        self.inner.lock(|cell| f(&mut *cell.borrow_mut()))
    }

    pub fn into_inner(self) -> PowerController<G> {
        self.inner.into_inner().into_inner()
    }
}
