use super::Geometry;
use carta_core::json::{JsonObject, JsonValue};

/// Identifier of a feature: a string or a number (RFC 7946 §3.2).
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureId {
	Number(f64),
	String(String),
}

impl From<&str> for FeatureId {
	fn from(value: &str) -> Self {
		FeatureId::String(value.to_string())
	}
}

impl From<String> for FeatureId {
	fn from(value: String) -> Self {
		FeatureId::String(value)
	}
}

impl From<f64> for FeatureId {
	fn from(value: f64) -> Self {
		FeatureId::Number(value)
	}
}

impl From<u64> for FeatureId {
	fn from(value: u64) -> Self {
		FeatureId::Number(value as f64)
	}
}

impl From<i64> for FeatureId {
	fn from(value: i64) -> Self {
		FeatureId::Number(value as f64)
	}
}

impl From<u32> for FeatureId {
	fn from(value: u32) -> Self {
		FeatureId::Number(f64::from(value))
	}
}

impl From<i32> for FeatureId {
	fn from(value: i32) -> Self {
		FeatureId::Number(f64::from(value))
	}
}

impl From<FeatureId> for JsonValue {
	fn from(id: FeatureId) -> Self {
		match id {
			FeatureId::Number(number) => JsonValue::Number(number),
			FeatureId::String(text) => JsonValue::String(text),
		}
	}
}

/// A feature: exactly one geometry plus a free-form property map.
///
/// `properties` stays `None` until the first property is set; it still
/// serializes as an explicit `"properties":null`.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
	pub geometry: Geometry,
	pub properties: Option<JsonObject>,
	pub id: Option<FeatureId>,
	pub bbox: Option<Vec<f64>>,
}

impl Feature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry,
			properties: None,
			id: None,
			bbox: None,
		}
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		FeatureId: From<T>,
	{
		self.id = Some(FeatureId::from(id));
	}

	/// Inserts a single property, creating the property map on first use.
	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self
			.properties
			.get_or_insert_with(JsonObject::new)
			.set(key, value);
	}
}
