//! Integration tests for `power_on` / `power_off` against a scripted mock.
//!
//! Every GPIO call the controller makes must be queued up front, so these
//! tests pin down the exact call sequence, not just the result.

use super::mock_gpio::ScriptedGpio;

use powerctl::adapters::SimGpio;
use powerctl::config::ControllerConfig;
use powerctl::pins::{LED_GPIO, POWER_GPIO};
use powerctl::{GpioError, GpioId, Level, PowerController, Status, Transition};

fn controller(setup: impl FnOnce(&mut ScriptedGpio)) -> PowerController<ScriptedGpio> {
    let mut gpio = ScriptedGpio::new();
    setup(&mut gpio);
    PowerController::new(gpio)
}

// ── power_on ──────────────────────────────────────────────────

#[test]
fn power_on_when_power_gpio_is_low() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::Low)
            .expect_set(POWER_GPIO, Level::High, Ok(()));
    });
    let result = ctrl.power_on();
    assert_eq!(result, Ok(Transition::Switched));
    assert_eq!(Status::from(&result), Status::Success);
}

#[test]
fn power_on_when_power_gpio_is_high() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::High);
    });
    assert_eq!(ctrl.power_on(), Ok(Transition::Unchanged));
    assert_eq!(ctrl.gpio().calls, 1, "no write when already on");
}

#[test]
fn power_on_when_power_gpio_is_low_but_fails_to_drive_high() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::Low)
            .expect_set(POWER_GPIO, Level::High, Err(GpioError::WriteFailed));
    });
    let result = ctrl.power_on();
    assert_eq!(result, Err(GpioError::WriteFailed));
    assert_eq!(Status::from(&result), Status::Failure);
}

#[test]
#[should_panic(expected = "unexpected call")]
fn missing_set_expectation_is_caught() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::Low);
    });
    let _ = ctrl.power_on();
}

#[test]
#[should_panic(expected = "unsatisfied expectations")]
fn superfluous_set_expectation_is_caught() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::Low)
            .expect_set(POWER_GPIO, Level::High, Ok(()))
            .expect_set(POWER_GPIO, Level::High, Ok(()));
    });
    let _ = ctrl.power_on();
}

#[test]
#[should_panic(expected = "unexpected pin")]
fn wrong_pin_in_expectation_is_caught() {
    let mut ctrl = controller(|g| {
        g.expect_get(LED_GPIO, Level::Low);
    });
    let _ = ctrl.power_on();
}

// ── power_off ─────────────────────────────────────────────────

#[test]
fn power_off_when_power_gpio_is_high() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::High)
            .expect_set(POWER_GPIO, Level::Low, Ok(()));
    });
    assert_eq!(ctrl.power_off(), Ok(Transition::Switched));
}

#[test]
fn power_off_when_power_gpio_is_low() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::Low);
    });
    assert_eq!(ctrl.power_off(), Ok(Transition::Unchanged));
}

#[test]
fn power_off_when_power_gpio_is_high_but_fails_to_drive_low() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::High)
            .expect_set(POWER_GPIO, Level::Low, Err(GpioError::WriteFailed));
    });
    assert_eq!(ctrl.power_off(), Err(GpioError::WriteFailed));
}

#[test]
fn capability_error_is_propagated_verbatim() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::High)
            .expect_set(POWER_GPIO, Level::Low, Err(GpioError::BankFull));
    });
    assert_eq!(ctrl.power_off(), Err(GpioError::BankFull));
}

// ── Sequences ─────────────────────────────────────────────────

#[test]
fn repeated_power_on_writes_once() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::Low)
            .expect_set(POWER_GPIO, Level::High, Ok(()))
            .expect_get(POWER_GPIO, Level::High);
    });
    assert_eq!(ctrl.power_on(), Ok(Transition::Switched));
    assert_eq!(ctrl.power_on(), Ok(Transition::Unchanged));
}

#[test]
fn failed_power_on_can_be_retried_by_caller() {
    let mut ctrl = controller(|g| {
        g.expect_get(POWER_GPIO, Level::Low)
            .expect_set(POWER_GPIO, Level::High, Err(GpioError::WriteFailed))
            .expect_get(POWER_GPIO, Level::Low)
            .expect_set(POWER_GPIO, Level::High, Ok(()));
    });
    assert!(ctrl.power_on().is_err());
    assert!(ctrl.power_on().is_ok());
    assert_eq!(ctrl.gpio().remaining(), 0);
}

#[test]
fn power_cycle_on_simulated_bank() {
    let mut ctrl = PowerController::new(SimGpio::new());
    assert!(!ctrl.is_powered());

    assert_eq!(ctrl.power_on(), Ok(Transition::Switched));
    assert_eq!(ctrl.power_off(), Ok(Transition::Switched));
    assert_eq!(ctrl.power_off(), Ok(Transition::Unchanged));

    let sim = ctrl.into_inner();
    assert_eq!(sim.writes(), 2);
    assert_eq!(sim.level(POWER_GPIO), Level::Low);
}

#[test]
fn configured_pin_is_driven() {
    let config = ControllerConfig::from_json(r#"{ "power_gpio": 9 }"#).unwrap();
    let mut ctrl = PowerController::from_config(SimGpio::new(), &config);
    ctrl.power_on().unwrap();

    let sim = ctrl.into_inner();
    assert_eq!(sim.level(GpioId::new(9)), Level::High);
    assert_eq!(sim.level(POWER_GPIO), Level::Low, "default pin untouched");
}
