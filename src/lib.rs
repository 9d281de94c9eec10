//! powerctl — idempotent GPIO power-pin control.
//!
//! Exposes the pure-logic controller plus the adapters that bind it to
//! real or simulated pins.  All ESP-IDF-specific code lives in the
//! `espidf`-gated binary; everything here builds and tests on the host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod gpio;
pub mod pins;
pub mod power;
pub mod shared;

mod error;

pub use error::{ConfigError, Error, GpioError, Result};
pub use gpio::{GpioId, GpioPort, Level};
pub use power::{PowerController, Status, Transition};
