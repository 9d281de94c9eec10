//! powerctl firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  esp_idf_hal PinDriver (output)              │
//! │        │                                     │
//! │  HalGpio ── GpioPort ──▶ PowerController     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Binds the configured power pin, applies the boot level once, then
//! idles.  The pin keeps its level for as long as the driver is alive.
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};
use log::{error, info};

use powerctl::adapters::HalGpio;
use powerctl::config::ControllerConfig;
use powerctl::{Error, PowerController, Status};

type PowerPin = PinDriver<'static, AnyOutputPin, Output>;

/// Validate the config and claim its power pin as an output.
fn bind_power_pin(config: &ControllerConfig) -> powerctl::Result<HalGpio<PowerPin>> {
    config.validate()?;
    // SAFETY: the power pin is claimed exactly once, here, and no other
    // driver in this firmware touches it.
    let pin = unsafe { AnyOutputPin::new(i32::from(config.power_gpio.raw())) };
    let driver = PinDriver::output(pin).map_err(|e| {
        error!("{}: output driver setup failed: {}", config.power_gpio, e);
        Error::Init("power pin driver")
    })?;
    Ok(HalGpio::from_config(driver, config))
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("powerctl v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config ─────────────────────────────────────────────
    let config = ControllerConfig::default();
    info!(
        "Power pin {} ({})",
        config.power_gpio,
        if config.active_low { "active-low" } else { "active-high" }
    );

    // ── 3. Bind the pin ───────────────────────────────────────
    let gpio = bind_power_pin(&config)?;
    let mut power = PowerController::from_config(gpio, &config);

    // ── 4. Boot level ─────────────────────────────────────────
    match config.boot_level {
        Some(level) => {
            let result = power.drive(level);
            let status = Status::from(&result);
            match result {
                Ok(transition) => info!(
                    "Boot: power {} ({}, status={:#04x})",
                    level,
                    if transition.wrote() { "switched" } else { "already set" },
                    status.code()
                ),
                Err(e) => error!(
                    "Boot: could not drive power {}: {} (status={:#04x})",
                    level,
                    e,
                    status.code()
                ),
            }
        }
        None => {
            let state = if power.is_powered() { "on" } else { "off" };
            info!("Boot: power pin left as found ({})", state);
        }
    }

    // ── 5. Idle ───────────────────────────────────────────────
    loop {
        FreeRtos::delay_ms(1000);
    }
}
