//! GPIO pin assignments for the controller board.
//!
//! Single source of truth — every adapter and config default references
//! this module rather than hard-coding pin numbers.

use crate::gpio::GpioId;

/// Digital output: HIGH = load powered, LOW = load off.
pub const POWER_GPIO: GpioId = GpioId::new(0x1a);

/// Digital output: board reset line.  Never a valid power pin.
pub const RESET_GPIO: GpioId = GpioId::new(0x2b);

/// Digital output: front-panel indicator LED.  Never a valid power pin.
pub const LED_GPIO: GpioId = GpioId::new(0x3c);

/// Pins reserved for other functions on this board.
pub const RESERVED: [GpioId; 2] = [RESET_GPIO, LED_GPIO];
