pub struct Board;

pub trait GenericBoard {
    /// Brings up clocks and binds the board's console and gpio initializers.
    fn init();
}

#[allow(unused)]
use super::*;

#[cfg(feature = "f103c8")]
mod f103c8;
#[cfg(feature = "f103c8")]
pub use f103c8::{Console, Led};

#[cfg(feature = "std")]
mod host;
#[cfg(feature = "std")]
pub use host::{Console, Led};
