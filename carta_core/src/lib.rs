//! Format-agnostic JSON primitives: a generic value tree, a byte-level
//! parser and a compact writer.
//!
//! The GeoJSON semantics built on top of this live in `carta_geojson`.

pub mod byte_cursor;
pub mod json;
