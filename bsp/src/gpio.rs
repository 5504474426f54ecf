use crate::fmt;
use crate::Led;
use core::cell::RefCell;
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use heapless::Vec;

const MAX_GPIO: usize = 5;

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub initial_high: bool,
}

impl Config {
    pub fn default() -> Self {
        Self {
            initial_high: false,
        }
    }

    pub fn initial_high(mut self, high: bool) -> Self {
        self.initial_high = high;
        self
    }
}

/// Takes the output pin bound to `number`. A pin can be taken only once.
pub fn find_by_number(number: usize, cfg: Config) -> Option<Led> {
    let initializer = GPIO_MANAGER.ports.lock(|ports| {
        let mut ports = ports.borrow_mut();
        let n = ports.iter().position(|e| e.gpio_number == number)?;
        Some(ports.remove(n).initializer)
    })?;
    fmt::trace!("gpio{}: taken", number);
    Some(initializer(cfg))
}

pub(crate) fn bind_gpio(number: usize, initializer: fn(Config) -> Led) {
    GPIO_MANAGER.ports.lock(|ports| {
        if ports
            .borrow_mut()
            .push(InitializerWrapper {
                gpio_number: number,
                initializer,
            })
            .is_err()
        {
            panic!("unable to bind gpio {}", number)
        }
    });
}

static GPIO_MANAGER: GpioManager = GpioManager {
    ports: Mutex::new(RefCell::new(Vec::new())),
};

struct InitializerWrapper {
    initializer: fn(Config) -> Led,
    gpio_number: usize,
}

struct GpioManager {
    ports: Mutex<CriticalSectionRawMutex, RefCell<Vec<InitializerWrapper, MAX_GPIO>>>,
}
