use carta_core::json::JsonValue;
use std::fmt::Debug;

/// A single position: an ordered list of coordinate values.
///
/// The first two axes are conventionally longitude and latitude; further
/// axes (elevation, …) are allowed. No range checks are applied anywhere —
/// out-of-range coordinates are stored as given.
#[derive(Clone, PartialEq)]
pub struct Position(pub Vec<f64>);

impl Position {
	#[must_use]
	pub fn new(axes: Vec<f64>) -> Self {
		Self(axes)
	}

	/// First axis (longitude). Panics on a position with no axes.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	/// Second axis (latitude). Panics on a position with fewer than two axes.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Number of axes of this position.
	#[must_use]
	pub fn dim(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}

	/// The position as a flat JSON array of numbers.
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		JsonValue::from(&self.0)
	}
}

impl From<Vec<f64>> for Position {
	fn from(axes: Vec<f64>) -> Self {
		Position(axes)
	}
}

impl From<&[f64]> for Position {
	fn from(axes: &[f64]) -> Self {
		Position(axes.to_vec())
	}
}

impl<const N: usize> From<[f64; N]> for Position {
	fn from(axes: [f64; N]) -> Self {
		Position(axes.to_vec())
	}
}

impl<const N: usize> From<&[f64; N]> for Position {
	fn from(axes: &[f64; N]) -> Self {
		Position(axes.to_vec())
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
