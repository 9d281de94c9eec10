//! Fuzz target: `PowerController` over a simulated pin
//!
//! Each input byte is one step: bit 0 picks on/off, bit 1 toggles write
//! failure injection, bit 2 lets an external agent flip the line first.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - A call never writes when the pin already reads the target level
//! - A call writes at most once
//!
//! cargo fuzz run fuzz_power_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;
use powerctl::adapters::SimGpio;
use powerctl::pins::POWER_GPIO;
use powerctl::{Level, PowerController, Transition};

fuzz_target!(|data: &[u8]| {
    let mut ctrl = PowerController::new(SimGpio::new());
    let mut faulty = false;

    for &step in data {
        if step & 0b010 != 0 {
            faulty = !faulty;
            ctrl.gpio_mut().fail_writes(POWER_GPIO, faulty);
        }
        if step & 0b100 != 0 {
            let flipped = !ctrl.gpio().level(POWER_GPIO);
            let _ = ctrl.gpio_mut().preset(POWER_GPIO, flipped);
        }

        let target = if step & 0b001 != 0 { Level::High } else { Level::Low };
        let before = ctrl.gpio().level(POWER_GPIO);
        let writes = ctrl.gpio().writes();
        let result = ctrl.drive(target);
        let wrote = ctrl.gpio().writes() - writes;

        assert!(wrote <= 1, "more than one write in a single call");
        if before == target {
            assert_eq!(result, Ok(Transition::Unchanged));
            assert_eq!(wrote, 0, "write issued although pin was at target");
        }
    }
});
