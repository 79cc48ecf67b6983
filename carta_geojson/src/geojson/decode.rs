use crate::{Feature, FeatureCollection, FeatureId, GeoJsonError, Geometry, GeometryValue, Position};
use carta_core::json::{JsonObject, JsonValue, parse_json_str};

impl Geometry {
	/// Decodes a geometry object from a generic JSON value.
	pub fn from_json(value: &JsonValue) -> Result<Geometry, GeoJsonError> {
		decode_geometry(value)
	}

	/// Parses GeoJSON text and decodes it as a geometry.
	pub fn from_json_str(json: &str) -> Result<Geometry, GeoJsonError> {
		decode_geometry(&parse(json)?)
	}
}

impl Feature {
	/// Decodes a feature object from a generic JSON value.
	pub fn from_json(value: &JsonValue) -> Result<Feature, GeoJsonError> {
		decode_feature(value)
	}

	/// Parses GeoJSON text and decodes it as a feature.
	pub fn from_json_str(json: &str) -> Result<Feature, GeoJsonError> {
		decode_feature(&parse(json)?)
	}
}

impl FeatureCollection {
	/// Decodes a feature collection from a generic JSON value.
	pub fn from_json(value: &JsonValue) -> Result<FeatureCollection, GeoJsonError> {
		decode_feature_collection(value)
	}

	/// Parses GeoJSON text and decodes it as a feature collection.
	pub fn from_json_str(json: &str) -> Result<FeatureCollection, GeoJsonError> {
		decode_feature_collection(&parse(json)?)
	}
}

fn parse(json: &str) -> Result<JsonValue, GeoJsonError> {
	parse_json_str(json).map_err(GeoJsonError::Json)
}

fn expect_object<'a>(value: &'a JsonValue, what: &str) -> Result<&'a JsonObject, GeoJsonError> {
	value.as_object().map_err(|_| {
		GeoJsonError::shape(format!(
			"{what} must be a JSON object, found a {}",
			value.type_as_str()
		))
	})
}

fn expect_member<'a>(object: &'a JsonObject, key: &str, what: &str) -> Result<&'a JsonValue, GeoJsonError> {
	object
		.get(key)
		.ok_or_else(|| GeoJsonError::shape(format!("{what} must have a \"{key}\" member")))
}

fn expect_type<'a>(object: &'a JsonObject, what: &str) -> Result<&'a str, GeoJsonError> {
	match expect_member(object, "type", what)? {
		JsonValue::String(name) => Ok(name.as_str()),
		other => Err(GeoJsonError::shape(format!(
			"\"type\" must be a string, found a {}",
			other.type_as_str()
		))),
	}
}

/// Decodes one position: a flat array of at least two numbers.
fn decode_position(value: &JsonValue) -> Result<Position, GeoJsonError> {
	let array = value.as_array().map_err(|_| {
		GeoJsonError::shape(format!(
			"a position must be an array of numbers, found a {}",
			value.type_as_str()
		))
	})?;
	let axes = array
		.as_number_vec()
		.map_err(|_| GeoJsonError::shape("a position must contain only numbers"))?;
	if axes.len() < 2 {
		return Err(GeoJsonError::shape("a position needs at least two values"));
	}
	Ok(Position(axes))
}

/// Decodes one nesting level of a coordinates member.
fn decode_list<T>(
	value: &JsonValue,
	decode_item: impl Fn(&JsonValue) -> Result<T, GeoJsonError>,
) -> Result<Vec<T>, GeoJsonError> {
	let array = value
		.as_array()
		.map_err(|_| GeoJsonError::shape(format!("expected an array, found a {}", value.type_as_str())))?;
	array.iter().map(decode_item).collect()
}

/// Decodes a geometry object, dispatching on its `"type"` member.
pub fn decode_geometry(value: &JsonValue) -> Result<Geometry, GeoJsonError> {
	let object = expect_object(value, "a geometry")?;
	let geometry_value = match expect_type(object, "a geometry")? {
		"GeometryCollection" => {
			let geometries = expect_member(object, "geometries", "a GeometryCollection")?;
			GeometryValue::GeometryCollection(decode_list(geometries, decode_geometry)?)
		}
		type_name => {
			let coordinates = expect_member(object, "coordinates", "a geometry")?;
			match type_name {
				"Point" => GeometryValue::Point(decode_position(coordinates)?),
				"MultiPoint" => GeometryValue::MultiPoint(decode_list(coordinates, decode_position)?),
				"LineString" => GeometryValue::LineString(decode_list(coordinates, decode_position)?),
				"MultiLineString" => GeometryValue::MultiLineString(decode_list(coordinates, |line| {
					decode_list(line, decode_position)
				})?),
				"Polygon" => GeometryValue::Polygon(decode_list(coordinates, |ring| {
					decode_list(ring, decode_position)
				})?),
				"MultiPolygon" => GeometryValue::MultiPolygon(decode_list(coordinates, |polygon| {
					decode_list(polygon, |ring| decode_list(ring, decode_position))
				})?),
				unknown => return Err(GeoJsonError::shape(format!("unknown geometry type '{unknown}'"))),
			}
		}
	};
	Ok(Geometry {
		value: geometry_value,
		bbox: decode_bbox(object)?,
	})
}

/// Decodes the optional `"bbox"` member of any entity.
///
/// Absent and `null` both mean "no bbox". An array of numbers is stored
/// as-is, even when it violates the min/max invariant — the read paths
/// treat such a box as absent later. Any other shape is a
/// [`GeoJsonError::BboxField`], which callers may catch while still keeping
/// the surrounding entity.
pub fn decode_bbox(object: &JsonObject) -> Result<Option<Vec<f64>>, GeoJsonError> {
	match object.get("bbox") {
		None | Some(JsonValue::Null) => Ok(None),
		Some(JsonValue::Array(array)) => array
			.as_number_vec()
			.map(Some)
			.map_err(|_| GeoJsonError::BboxField("bbox values must all be numbers".to_string())),
		Some(other) => Err(GeoJsonError::BboxField(format!(
			"bbox must be an array, found a {}",
			other.type_as_str()
		))),
	}
}

/// Decodes a feature object.
pub fn decode_feature(value: &JsonValue) -> Result<Feature, GeoJsonError> {
	let object = expect_object(value, "a feature")?;
	let type_name = expect_type(object, "a feature")?;
	if type_name != "Feature" {
		return Err(GeoJsonError::shape(format!(
			"a feature must have type 'Feature', found '{type_name}'"
		)));
	}

	let geometry = decode_geometry(expect_member(object, "geometry", "a feature")?)?;

	let properties = match object.get("properties") {
		None | Some(JsonValue::Null) => None,
		Some(JsonValue::Object(properties)) => Some(properties.clone()),
		Some(other) => {
			return Err(GeoJsonError::shape(format!(
				"\"properties\" must be an object or null, found a {}",
				other.type_as_str()
			)));
		}
	};

	let id = match object.get("id") {
		None | Some(JsonValue::Null) => None,
		Some(JsonValue::String(id)) => Some(FeatureId::String(id.clone())),
		Some(JsonValue::Number(id)) => Some(FeatureId::Number(*id)),
		Some(other) => {
			return Err(GeoJsonError::shape(format!(
				"\"id\" must be a string or a number, found a {}",
				other.type_as_str()
			)));
		}
	};

	Ok(Feature {
		geometry,
		properties,
		id,
		bbox: decode_bbox(object)?,
	})
}

/// Decodes a feature collection object.
pub fn decode_feature_collection(value: &JsonValue) -> Result<FeatureCollection, GeoJsonError> {
	let object = expect_object(value, "a feature collection")?;
	let type_name = expect_type(object, "a feature collection")?;
	if type_name != "FeatureCollection" {
		return Err(GeoJsonError::shape(format!(
			"a feature collection must have type 'FeatureCollection', found '{type_name}'"
		)));
	}

	let features = expect_member(object, "features", "a feature collection")?;
	Ok(FeatureCollection {
		features: decode_list(features, decode_feature)?,
		bbox: decode_bbox(object)?,
	})
}
