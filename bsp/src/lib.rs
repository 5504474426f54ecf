#![cfg_attr(not(feature = "std"), no_std)]

mod fmt;

mod boards;
pub mod console;
pub mod gpio;

#[allow(unused_imports)]
pub use boards::*;
pub use console::GenericConsole;
