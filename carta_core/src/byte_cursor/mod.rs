//! Byte-level cursoring over borrowed input, plus small parsing helpers
//! built on top of it.

mod basics;
mod cursor;

pub use basics::*;
pub use cursor::*;
