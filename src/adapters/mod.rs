//! Adapters — concrete implementations of the [`GpioPort`](crate::gpio::GpioPort) trait.
//!
//! | Adapter | Implements | Connects to                          |
//! |---------|------------|--------------------------------------|
//! | `hal`   | GpioPort   | any `embedded-hal` 1.0 output pin    |
//! | `sim`   | GpioPort   | in-memory pin bank (host runs/tests) |

pub mod hal;
pub mod sim;

pub use hal::HalGpio;
pub use sim::SimGpio;
