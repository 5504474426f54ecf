#![cfg_attr(not(test), no_std)]
//! Report routines for the value slot and the numeric gate.
//!
//! Every routine writes `label: value` lines into any [`core::fmt::Write`]
//! sink, so the same code drives a board console or a test buffer.

use core::fmt::{self, Write};
use numeric::add_one;
use value_slot::ValueSlot;

#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Digits printed after the decimal point of float values.
    pub float_precision: usize,
}

impl Config {
    pub fn default() -> Self {
        Self { float_precision: 2 }
    }

    pub fn float_precision(mut self, digits: usize) -> Self {
        self.float_precision = digits;
        self
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    Slot(value_slot::Error),
    /// The sink refused a write.
    Console,
}

impl From<value_slot::Error> for ProbeError {
    fn from(e: value_slot::Error) -> Self {
        ProbeError::Slot(e)
    }
}

impl From<fmt::Error> for ProbeError {
    fn from(_: fmt::Error) -> Self {
        ProbeError::Console
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Slot(e) => write!(f, "slot: {}", e),
            ProbeError::Console => f.write_str("console write failed"),
        }
    }
}

/// Runs both probes, each under its own heading.
pub fn run<W: Write>(out: &mut W, cfg: &Config) -> Result<(), ProbeError> {
    writeln!(out, "Testing tagged value slot")?;
    slot_probe(out, cfg)?;

    writeln!(out)?;
    writeln!(out, "Testing numeric capability gate")?;
    increment_probe(out, cfg)
}

/// Walks one slot through every alternative and reports what it reads back.
pub fn slot_probe<W: Write>(out: &mut W, cfg: &Config) -> Result<(), ProbeError> {
    let mut slot: ValueSlot = ValueSlot::default();

    slot.assign(42);
    writeln!(out, "Slot contains integer: {}", slot.get::<i32>()?)?;

    slot.assign(3.14f32);
    writeln!(
        out,
        "Slot contains float: {:.*}",
        cfg.float_precision,
        slot.get::<f32>()?
    )?;
    if let Err(e) = slot.get::<i32>() {
        writeln!(out, "Stale integer read rejected: {}", e)?;
    }

    slot.set_text("hello")?;
    writeln!(out, "Slot contains text: {}", slot.get_text()?)?;
    Ok(())
}

pub fn increment_probe<W: Write>(out: &mut W, cfg: &Config) -> Result<(), ProbeError> {
    writeln!(out, "add_one with integer: {}", add_one(41i32))?;
    writeln!(
        out,
        "add_one with float: {:.*}",
        cfg.float_precision,
        add_one(2.14f32)
    )?;
    Ok(())
}
