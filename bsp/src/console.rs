//! Line oriented text console.
//!
//! A board binds one console initializer during `Board::init`; the
//! application takes it once with [`take`].

use crate::fmt;
use crate::Console;
use core::cell::Cell;
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

pub trait GenericConsole: core::fmt::Write {
    /// `false` until the host side of the console can receive text.
    fn is_ready(&self) -> bool;
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub baud: u32,
}

impl Config {
    pub fn default() -> Self {
        Self { baud: 9_600 }
    }

    pub fn baud(mut self, baud: u32) -> Self {
        self.baud = baud;
        self
    }
}

type Initializer = fn(Config) -> Console;

static CONSOLE: Mutex<CriticalSectionRawMutex, Cell<Option<Initializer>>> =
    Mutex::new(Cell::new(None));

/// Returns the console, or `None` if the board has none or it was already taken.
pub fn take(cfg: Config) -> Option<Console> {
    let initializer = CONSOLE.lock(|c| c.take())?;
    fmt::debug!("console: opening at {} baud", cfg.baud);
    Some(initializer(cfg))
}

pub(crate) fn bind_console(initializer: Initializer) {
    CONSOLE.lock(|c| {
        if c.replace(Some(initializer)).is_some() {
            fmt::debug!("console: initializer rebound");
        }
    });
}
