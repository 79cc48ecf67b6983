//! Bounding box computation in two deliberately separate flavors.
//!
//! - [`bounds`](crate::Geometry::bounds) implements the four-element
//!   `[west, south, east, north]` convention of RFC 7946 §5. It is specific
//!   to longitude/latitude data and seeds the reduction with sentinel
//!   values, so it always produces four elements.
//! - [`compute_bbox`](crate::Geometry::compute_bbox) is the general form:
//!   it works for any dimensionality, seeds from the first real position
//!   and honors a well-formed cached `bbox`.
//!
//! The two are kept as separate named operations on purpose; merging them
//! would change behavior for 2D callers relying on the sentinel convention.

mod bounds;
mod envelope;

pub use bounds::*;
pub use envelope::*;
