//! GeoJSON (RFC 7946) geometries, features and feature collections.
//!
//! The seven geometry kinds are modeled as one sum type ([`GeometryValue`])
//! wrapped by [`Geometry`], which also carries the optional `bbox` member.
//! Bounding boxes come in two flavors: the four-element lon/lat convention
//! ([`Geometry::bounds`]) and general N-dimensional envelopes
//! ([`Geometry::compute_bbox`]). The [`geojson`] module converts all
//! entities to and from the generic JSON tree of `carta_core`.

mod bbox;
mod error;
mod geo;
pub mod geojson;

pub use bbox::*;
pub use error::*;
pub use geo::*;
pub use geojson::*;
