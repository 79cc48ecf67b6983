use crate::{Feature, FeatureCollection, Geometry, GeometryValue, Position};

/// Checks the stored-bbox invariant: non-empty, even length and
/// `min <= max` on every axis.
#[must_use]
pub fn check_bbox(bbox: &[f64]) -> bool {
	if bbox.is_empty() || bbox.len() % 2 != 0 {
		return false;
	}
	let dim = bbox.len() / 2;
	(0..dim).all(|axis| bbox[axis] <= bbox[axis + dim])
}

/// An axis-aligned envelope of arbitrary dimensionality.
///
/// `min` and `max` always have the same length; one entry per axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
	pub min: Vec<f64>,
	pub max: Vec<f64>,
}

impl Envelope {
	/// Splits a stored `[min…, max…]` bbox into its two halves.
	#[must_use]
	pub fn split(bbox: &[f64]) -> Self {
		let dim = bbox.len() / 2;
		Envelope {
			min: bbox[..dim].to_vec(),
			max: bbox[dim..].to_vec(),
		}
	}

	/// Flattens the envelope back into the `[min…, max…]` bbox layout.
	#[must_use]
	pub fn to_bbox(&self) -> Vec<f64> {
		let mut bbox = self.min.clone();
		bbox.extend_from_slice(&self.max);
		bbox
	}

	/// Number of axes covered by this envelope.
	#[must_use]
	pub fn dim(&self) -> usize {
		self.min.len()
	}

	fn from_position(position: &Position) -> Self {
		Envelope {
			min: position.0.clone(),
			max: position.0.clone(),
		}
	}

	/// Widens the envelope to cover `position`.
	///
	/// Returns `false` when the dimensionality does not match; the envelope
	/// is left untouched in that case.
	pub fn include(&mut self, position: &Position) -> bool {
		if position.dim() != self.dim() {
			return false;
		}
		for (axis, value) in position.as_slice().iter().enumerate() {
			self.min[axis] = self.min[axis].min(*value);
			self.max[axis] = self.max[axis].max(*value);
		}
		true
	}

	/// Widens the envelope to cover `other`.
	///
	/// Returns `false` when the dimensionality does not match.
	pub fn merge(&mut self, other: &Envelope) -> bool {
		if other.dim() != self.dim() {
			return false;
		}
		for axis in 0..self.dim() {
			self.min[axis] = self.min[axis].min(other.min[axis]);
			self.max[axis] = self.max[axis].max(other.max[axis]);
		}
		true
	}

	/// Reduces an iterator of positions, seeding from the first one.
	///
	/// `None` when the iterator is empty or the positions disagree on
	/// dimensionality.
	fn of_positions<'a>(mut positions: impl Iterator<Item = &'a Position>) -> Option<Self> {
		let mut envelope = Envelope::from_position(positions.next()?);
		for position in positions {
			if !envelope.include(position) {
				return None;
			}
		}
		Some(envelope)
	}
}

/// Returns the stored bbox as an envelope when it may stand in for a
/// recomputation: never when `force` is set, and only when it passes
/// [`check_bbox`]. A malformed stored bbox is treated as absent.
fn stored_envelope(bbox: Option<&[f64]>, force: bool) -> Option<Envelope> {
	if force {
		return None;
	}
	let bbox = bbox?;
	if check_bbox(bbox) {
		Some(Envelope::split(bbox))
	} else {
		log::debug!("ignoring malformed cached bbox {bbox:?}");
		None
	}
}

/// Merges child envelopes into one. `None` when there are no children, any
/// child has no envelope, or the children disagree on dimensionality.
fn merge_envelopes(mut envelopes: impl Iterator<Item = Option<Envelope>>) -> Option<Envelope> {
	let mut merged = envelopes.next()??;
	for envelope in envelopes {
		if !merged.merge(&envelope?) {
			return None;
		}
	}
	Some(merged)
}

impl Geometry {
	/// The N-dimensional bounding box of this geometry.
	///
	/// Unless `force` is set, a stored bbox that passes [`check_bbox`] is
	/// returned as-is, without rescanning any coordinates — even when its
	/// values do not match the geometry. A malformed stored bbox is ignored.
	///
	/// `None` means there is no meaningful envelope: no positions at all, an
	/// empty collection, or positions/children of mismatching
	/// dimensionality. The result is never written back; callers cache it
	/// via [`Envelope::to_bbox`] themselves.
	#[must_use]
	pub fn compute_bbox(&self, force: bool) -> Option<Envelope> {
		if let Some(envelope) = stored_envelope(self.bbox.as_deref(), force) {
			return Some(envelope);
		}
		use GeometryValue::*;
		match &self.value {
			Point(position) => Envelope::of_positions(std::iter::once(position)),
			MultiPoint(positions) | LineString(positions) => Envelope::of_positions(positions.iter()),
			MultiLineString(lines) | Polygon(lines) => Envelope::of_positions(lines.iter().flatten()),
			MultiPolygon(polygons) => Envelope::of_positions(polygons.iter().flatten().flatten()),
			GeometryCollection(geometries) => {
				merge_envelopes(geometries.iter().map(|geometry| geometry.compute_bbox(force)))
			}
		}
	}
}

impl Feature {
	/// Like [`Geometry::compute_bbox`]; a usable feature-level bbox wins
	/// over the geometry's own.
	#[must_use]
	pub fn compute_bbox(&self, force: bool) -> Option<Envelope> {
		stored_envelope(self.bbox.as_deref(), force).or_else(|| self.geometry.compute_bbox(force))
	}
}

impl FeatureCollection {
	/// Like [`Geometry::compute_bbox`], reducing all features into one
	/// envelope. An empty collection has no envelope.
	#[must_use]
	pub fn compute_bbox(&self, force: bool) -> Option<Envelope> {
		stored_envelope(self.bbox.as_deref(), force)
			.or_else(|| merge_envelopes(self.features.iter().map(|feature| feature.compute_bbox(force))))
	}
}
