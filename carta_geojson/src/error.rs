use thiserror::Error;

/// Errors produced while decoding GeoJSON.
///
/// `BboxField` is kept separate from `Shape` so that callers can accept a
/// geometry while discarding an unusable `"bbox"` member.
#[derive(Debug, Error)]
pub enum GeoJsonError {
	/// The input text was not valid JSON at all.
	#[error("invalid JSON: {0}")]
	Json(anyhow::Error),

	/// The JSON does not have the layout of a geometry, feature or
	/// feature collection.
	#[error("invalid GeoJSON: {0}")]
	Shape(String),

	/// A present `"bbox"` member is not a flat array of numbers.
	#[error("unusable bbox member: {0}")]
	BboxField(String),

	/// A persisted scalar has a representation that cannot hold GeoJSON text.
	#[error("unsupported scalar type: {0}")]
	UnsupportedScalar(String),
}

impl GeoJsonError {
	pub(crate) fn shape(msg: impl Into<String>) -> Self {
		GeoJsonError::Shape(msg.into())
	}
}
