//! Wire-format codec between the typed entities and the generic JSON tree.
//!
//! Decoding dispatches on the `"type"` member and checks the coordinate
//! nesting depth of every kind; encoding produces the RFC 7946 members,
//! including the `"features":[]` and `"properties":null` defaulting rules.

mod decode;
mod encode;
mod scalar;

pub use decode::*;
pub use scalar::*;
