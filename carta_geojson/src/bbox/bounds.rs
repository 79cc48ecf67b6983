use crate::{Feature, Geometry, GeometryValue, Position};

/// Seed box for the lon/lat reduction: every min field starts at the far
/// maximum of its axis and vice versa, so the first real coordinate always
/// wins. An input without positions keeps the seed (west > east).
pub const BOUNDS_SEED: [f64; 4] = [180.0, 90.0, -180.0, -90.0];

/// Reduces a flat list of lon/lat positions to `[west, south, east, north]`.
///
/// Only the first two axes are read; positions must have at least two.
#[must_use]
pub fn bounds_of_positions(positions: &[Position]) -> [f64; 4] {
	let mut bounds = BOUNDS_SEED;
	for position in positions {
		bounds[0] = bounds[0].min(position.x());
		bounds[1] = bounds[1].min(position.y());
		bounds[2] = bounds[2].max(position.x());
		bounds[3] = bounds[3].max(position.y());
	}
	bounds
}

/// Merges two `[west, south, east, north]` boxes into the smallest box
/// covering both.
#[must_use]
pub fn merge_bounds(a: [f64; 4], b: [f64; 4]) -> [f64; 4] {
	[
		a[0].min(b[0]),
		a[1].min(b[1]),
		a[2].max(b[2]),
		a[3].max(b[3]),
	]
}

impl Geometry {
	/// The 2D lon/lat bounding box of this geometry as
	/// `[west, south, east, north]`.
	///
	/// Ignores any cached bbox and any axis beyond the first two. For
	/// arbitrary dimensionality or cache-aware reads use
	/// [`Geometry::compute_bbox`].
	#[must_use]
	pub fn bounds(&self) -> [f64; 4] {
		use GeometryValue::*;
		match &self.value {
			Point(position) => [position.x(), position.y(), position.x(), position.y()],
			MultiPoint(positions) | LineString(positions) => bounds_of_positions(positions),
			MultiLineString(lines) | Polygon(lines) => lines
				.iter()
				.map(|line| bounds_of_positions(line))
				.fold(BOUNDS_SEED, merge_bounds),
			MultiPolygon(polygons) => polygons
				.iter()
				.flatten()
				.map(|ring| bounds_of_positions(ring))
				.fold(BOUNDS_SEED, merge_bounds),
			GeometryCollection(geometries) => geometries
				.iter()
				.map(Geometry::bounds)
				.fold(BOUNDS_SEED, merge_bounds),
		}
	}
}

impl Feature {
	/// Computes the geometry's 2D bounds and stores them as this feature's
	/// bbox member.
	pub fn update_bounds(&mut self) {
		self.bbox = Some(self.geometry.bounds().to_vec());
	}
}
