//! Scripted GPIO mock for integration tests.
//!
//! Tests queue the exact calls they expect, in order, together with the
//! value each call returns.  The mock panics on a call nobody expected, on
//! a call with the wrong arguments, and (when dropped) on expectations the
//! code under test never consumed.

use std::collections::VecDeque;

use powerctl::{GpioError, GpioId, GpioPort, Level};

// ── Expectation record ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Expect {
    Get { pin: GpioId, returns: Level },
    Set { pin: GpioId, level: Level, returns: Result<(), GpioError> },
}

// ── ScriptedGpio ──────────────────────────────────────────────

pub struct ScriptedGpio {
    script: VecDeque<Expect>,
    pub calls: usize,
}

#[allow(dead_code)]
impl ScriptedGpio {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            calls: 0,
        }
    }

    pub fn expect_get(&mut self, pin: GpioId, returns: Level) -> &mut Self {
        self.script.push_back(Expect::Get { pin, returns });
        self
    }

    pub fn expect_set(&mut self, pin: GpioId, level: Level, returns: Result<(), GpioError>) -> &mut Self {
        self.script.push_back(Expect::Set { pin, level, returns });
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next(&mut self, call: &str) -> Expect {
        self.calls += 1;
        match self.script.pop_front() {
            Some(e) => e,
            None => panic!("unexpected call: {call} (no expectation queued)"),
        }
    }
}

impl Drop for ScriptedGpio {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.script.is_empty() {
            panic!("unsatisfied expectations: {:?}", self.script);
        }
    }
}

impl GpioPort for ScriptedGpio {
    fn get_gpio(&mut self, pin: GpioId) -> Level {
        match self.next(&format!("get_gpio({pin})")) {
            Expect::Get { pin: want, returns } => {
                assert_eq!(pin, want, "get_gpio called with unexpected pin");
                returns
            }
            other => panic!("get_gpio({pin}) called, expected {other:?}"),
        }
    }

    fn set_gpio(&mut self, pin: GpioId, level: Level) -> Result<(), GpioError> {
        match self.next(&format!("set_gpio({pin}, {level})")) {
            Expect::Set {
                pin: want_pin,
                level: want_level,
                returns,
            } => {
                assert_eq!(pin, want_pin, "set_gpio called with unexpected pin");
                assert_eq!(level, want_level, "set_gpio called with unexpected level");
                returns
            }
            other => panic!("set_gpio({pin}, {level}) called, expected {other:?}"),
        }
    }
}
