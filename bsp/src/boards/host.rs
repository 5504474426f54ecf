//! Host board: the console is stdout and gpios are simulated.
use crate::console::{self, GenericConsole};
use crate::{fmt, gpio};
use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin};
use std::io::Write as _;

const LED_PIN: usize = 22;

pub type Console = StdConsole;
pub type Led = SimPin;

impl super::GenericBoard for super::Board {
    fn init() {
        fmt::trace!("host board: binding console and gpio{}", LED_PIN);
        console::bind_console(|_| StdConsole::new());
        gpio::bind_gpio(LED_PIN, |cfg| SimPin::new(LED_PIN, cfg));
    }
}

pub struct StdConsole {
    out: std::io::Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl core::fmt::Write for StdConsole {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.out
            .write_all(s.as_bytes())
            .map_err(|_| core::fmt::Error)
    }
}

impl GenericConsole for StdConsole {
    fn is_ready(&self) -> bool {
        true
    }
}

/// Output pin that only remembers and logs its level.
#[derive(Debug)]
pub struct SimPin {
    number: usize,
    high: bool,
}

impl SimPin {
    pub fn new(number: usize, cfg: gpio::Config) -> Self {
        Self {
            number,
            high: cfg.initial_high,
        }
    }

    fn set(&mut self, high: bool) {
        if self.high != high {
            fmt::debug!("gpio{}: {}", self.number, if high { "high" } else { "low" });
        }
        self.high = high;
    }
}

impl OutputPin for SimPin {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

impl StatefulOutputPin for SimPin {
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_pin_follows_blink() {
        let mut pin = SimPin::new(LED_PIN, gpio::Config::default());
        assert!(pin.is_set_low().unwrap());
        for _ in 0..3 {
            pin.set_high().unwrap();
            assert!(pin.is_set_high().unwrap());
            pin.set_high().unwrap();
            assert!(pin.is_set_high().unwrap());
            pin.set_low().unwrap();
            assert!(pin.is_set_low().unwrap());
        }
    }
}
