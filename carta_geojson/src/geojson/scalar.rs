use crate::{GeoJsonError, Geometry};

/// A value as handed over by a column-oriented store: one of the five
/// storage classes. Only the textual representations can carry GeoJSON.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
	Null,
	Integer(i64),
	Real(f64),
	Text(String),
	Blob(Vec<u8>),
}

impl ScalarValue {
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use ScalarValue::*;
		match self {
			Null => "null",
			Integer(_) => "integer",
			Real(_) => "real",
			Text(_) => "text",
			Blob(_) => "blob",
		}
	}
}

impl Geometry {
	/// Decodes a geometry from a persisted scalar, e.g. a database column.
	///
	/// `Text` and UTF-8 `Blob` values are parsed as GeoJSON text; every
	/// other storage class is rejected as
	/// [`GeoJsonError::UnsupportedScalar`] — never silently turned into an
	/// empty geometry.
	pub fn from_scalar(value: &ScalarValue) -> Result<Geometry, GeoJsonError> {
		match value {
			ScalarValue::Text(text) => Geometry::from_json_str(text),
			ScalarValue::Blob(bytes) => {
				let text = std::str::from_utf8(bytes)
					.map_err(|_| GeoJsonError::UnsupportedScalar("blob holds no UTF-8 text".to_string()))?;
				Geometry::from_json_str(text)
			}
			other => Err(GeoJsonError::UnsupportedScalar(format!(
				"cannot read GeoJSON from a {} value",
				other.type_as_str()
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const POINT_JSON: &str = r#"{"type":"Point","coordinates":[-93.787988,32.392335]}"#;

	#[test]
	fn decodes_from_text() {
		let geometry = Geometry::from_scalar(&ScalarValue::Text(POINT_JSON.to_string())).unwrap();
		assert!(geometry.is_point());
		assert_eq!(geometry, Geometry::new_point([-93.787988, 32.392335]));
	}

	#[test]
	fn decodes_from_bytes() {
		let geometry = Geometry::from_scalar(&ScalarValue::Blob(POINT_JSON.as_bytes().to_vec())).unwrap();
		assert!(geometry.is_point());
	}

	#[test]
	fn rejects_non_textual_storage_classes() {
		for value in [ScalarValue::Null, ScalarValue::Integer(123), ScalarValue::Real(1.5)] {
			let result = Geometry::from_scalar(&value);
			assert!(matches!(result, Err(GeoJsonError::UnsupportedScalar(_))));
		}
	}

	#[test]
	fn rejects_non_utf8_bytes() {
		let result = Geometry::from_scalar(&ScalarValue::Blob(vec![0xff, 0xfe, 0x00]));
		assert!(matches!(result, Err(GeoJsonError::UnsupportedScalar(_))));
	}

	#[test]
	fn invalid_text_is_a_json_error() {
		let result = Geometry::from_scalar(&ScalarValue::Text("not geojson".to_string()));
		assert!(matches!(result, Err(GeoJsonError::Json(_))));
	}
}
