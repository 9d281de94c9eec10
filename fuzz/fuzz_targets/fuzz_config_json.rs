//! Fuzz target: `ControllerConfig::from_json`
//!
//! Feeds arbitrary bytes to the config parser.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - Any config the parser accepts also passes `validate()`
//! - An accepted config never names a reserved pin as the power line
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use powerctl::config::ControllerConfig;
use powerctl::pins;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = ControllerConfig::from_json(text) {
        assert!(config.validate().is_ok(), "accepted config must validate");
        assert!(
            !pins::RESERVED.contains(&config.power_gpio),
            "reserved pin accepted as power line"
        );
    }
});
