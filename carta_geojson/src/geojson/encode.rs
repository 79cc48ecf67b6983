use crate::{Feature, FeatureCollection, Geometry, GeometryValue, Position};
use carta_core::json::{JsonArray, JsonObject, JsonValue};

fn json_list<T>(items: &[T], encode: impl Fn(&T) -> JsonValue) -> JsonValue {
	JsonValue::Array(JsonArray(items.iter().map(encode).collect()))
}

impl Geometry {
	/// Encodes this geometry as an RFC 7946 JSON object.
	///
	/// The `"bbox"` member is only emitted when present.
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut object = JsonObject::new();
		object.set("type", self.type_name());
		match &self.value {
			GeometryValue::Point(position) => object.set("coordinates", position.to_json()),
			GeometryValue::MultiPoint(positions) | GeometryValue::LineString(positions) => {
				object.set("coordinates", json_list(positions, Position::to_json));
			}
			GeometryValue::MultiLineString(lines) | GeometryValue::Polygon(lines) => {
				object.set(
					"coordinates",
					json_list(lines, |line| json_list(line, Position::to_json)),
				);
			}
			GeometryValue::MultiPolygon(polygons) => {
				object.set(
					"coordinates",
					json_list(polygons, |polygon| {
						json_list(polygon, |ring| json_list(ring, Position::to_json))
					}),
				);
			}
			GeometryValue::GeometryCollection(geometries) => {
				object.set(
					"geometries",
					json_list(geometries, |geometry| JsonValue::Object(geometry.to_json())),
				);
			}
		}
		object.set_optional("bbox", &self.bbox);
		object
	}

	/// The compact GeoJSON text of this geometry.
	#[must_use]
	pub fn stringify(&self) -> String {
		self.to_json().stringify()
	}
}

impl Feature {
	/// Encodes this feature as an RFC 7946 JSON object.
	///
	/// `"properties"` is always emitted: a feature without properties gets
	/// an explicit `null`, never an absent member or `{}`.
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut object = JsonObject::new();
		object.set("type", "Feature");
		object.set("geometry", JsonValue::Object(self.geometry.to_json()));
		object.set(
			"properties",
			match &self.properties {
				Some(properties) => JsonValue::Object(properties.clone()),
				None => JsonValue::Null,
			},
		);
		object.set_optional("id", &self.id);
		object.set_optional("bbox", &self.bbox);
		object
	}

	/// The compact GeoJSON text of this feature.
	#[must_use]
	pub fn stringify(&self) -> String {
		self.to_json().stringify()
	}
}

impl FeatureCollection {
	/// Encodes this collection as an RFC 7946 JSON object.
	///
	/// `"features"` is always an array; an empty collection yields `[]`,
	/// never `null` or an absent member.
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut object = JsonObject::new();
		object.set("type", "FeatureCollection");
		object.set(
			"features",
			json_list(&self.features, |feature| JsonValue::Object(feature.to_json())),
		);
		object.set_optional("bbox", &self.bbox);
		object
	}

	/// The compact GeoJSON text of this collection.
	#[must_use]
	pub fn stringify(&self) -> String {
		self.to_json().stringify()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn point() {
		let json = Geometry::new_point([1.0, 2.0]).stringify();
		assert!(json.contains(r#""type":"Point""#));
		assert!(json.contains(r#""coordinates":[1,2]"#));
	}

	#[test]
	fn multi_point() {
		let json = Geometry::new_multi_point(vec![[1.0, 2.0], [3.0, 4.0]]).stringify();
		assert!(json.contains(r#""type":"MultiPoint""#));
		assert!(json.contains(r#""coordinates":[[1,2],[3,4]]"#));
	}

	#[test]
	fn line_string() {
		let json = Geometry::new_line_string(vec![[1.0, 2.0], [3.0, 4.0]]).stringify();
		assert!(json.contains(r#""type":"LineString""#));
		assert!(json.contains(r#""coordinates":[[1,2],[3,4]]"#));
	}

	#[test]
	fn multi_line_string() {
		let json = Geometry::new_multi_line_string(vec![
			vec![[1.0, 2.0], [3.0, 4.0]],
			vec![[5.0, 6.0], [7.0, 8.0]],
		])
		.stringify();
		assert!(json.contains(r#""type":"MultiLineString""#));
		assert!(json.contains(r#""coordinates":[[[1,2],[3,4]],[[5,6],[7,8]]]"#));
	}

	#[test]
	fn polygon() {
		let json = Geometry::new_polygon(vec![vec![[1.0, 2.0], [3.0, 4.0]], vec![[5.0, 6.0], [7.0, 8.0]]]).stringify();
		assert!(json.contains(r#""type":"Polygon""#));
		assert!(json.contains(r#""coordinates":[[[1,2],[3,4]],[[5,6],[7,8]]]"#));
	}

	#[test]
	fn multi_polygon() {
		let json = Geometry::new_multi_polygon(vec![
			vec![vec![[1.0, 2.0], [3.0, 4.0]], vec![[5.0, 6.0], [7.0, 8.0]]],
			vec![vec![[8.0, 7.0], [6.0, 5.0]], vec![[4.0, 3.0], [2.0, 1.0]]],
		])
		.stringify();
		assert!(json.contains(r#""type":"MultiPolygon""#));
		assert!(json.contains(r#""coordinates":[[[[1,2],[3,4]],[[5,6],[7,8]]],[[[8,7],[6,5]],[[4,3],[2,1]]]]"#));
	}

	#[test]
	fn geometry_collection() {
		let json = Geometry::new_collection(vec![
			Geometry::new_point([1.0, 2.0]),
			Geometry::new_multi_point(vec![[1.0, 2.0], [3.0, 4.0]]),
		])
		.stringify();
		assert!(json.contains(r#""type":"GeometryCollection""#));
		assert!(json.contains(r#""geometries":["#));
	}

	#[test]
	fn bbox_is_only_emitted_when_present() {
		let mut geometry = Geometry::new_point([1.0, 2.0]);
		assert!(!geometry.stringify().contains("bbox"));

		geometry.bbox = Some(vec![1.0, 2.0, 1.0, 2.0]);
		assert!(geometry.stringify().contains(r#""bbox":[1,2,1,2]"#));
	}

	#[test]
	fn decoded_point_reencodes_canonically() {
		let geometry = Geometry::from_json_str(r#"{"type":"Point","coordinates":[102.0,0.5]}"#).unwrap();
		let json = geometry.stringify();
		assert!(json.contains(r#""type":"Point""#));
		assert!(json.contains(r#""coordinates":[102,0.5]"#));
	}

	#[test]
	fn feature_without_properties_encodes_null() {
		let json = Feature::new(Geometry::new_point([1.0, 2.0])).stringify();
		assert!(json.contains(r#""properties":null"#));
	}

	#[test]
	fn feature_with_id_and_properties() {
		let mut feature = Feature::new(Geometry::new_point([1.0, 2.0]));
		feature.set_id(13u64);
		feature.set_property("name", "Nice");
		let json = feature.stringify();
		assert!(json.contains(r#""id":13"#));
		assert!(json.contains(r#""properties":{"name":"Nice"}"#));
		assert!(json.contains(r#""geometry":{"coordinates":[1,2],"type":"Point"}"#));
	}

	#[test]
	fn empty_collection_encodes_an_empty_features_array() {
		let json = FeatureCollection::new().stringify();
		assert!(json.contains(r#""features":[]"#));
		assert!(json.contains(r#""type":"FeatureCollection""#));
	}

	#[test]
	fn round_trip_every_kind() {
		let geometries = vec![
			Geometry::new_point([1.0, 2.0]),
			Geometry::new_multi_point(vec![[1.0, 2.0], [3.0, 4.0]]),
			Geometry::new_line_string(vec![[1.0, 2.0], [3.0, 4.0]]),
			Geometry::new_multi_line_string(vec![vec![[1.0, 2.0], [3.0, 4.0]], vec![[5.0, 6.0], [7.0, 8.0]]]),
			Geometry::new_polygon(vec![vec![[1.0, 2.0], [3.0, 4.0], [1.0, 2.0]]]),
			Geometry::new_multi_polygon(vec![vec![vec![[1.0, 2.0], [3.0, 4.0], [1.0, 2.0]]]]),
			Geometry::new_collection(vec![
				Geometry::new_point([1.0, 2.0]),
				Geometry::new_multi_point(vec![[1.0, 2.0], [3.0, 4.0]]),
			]),
		];

		for geometry in geometries {
			let decoded = Geometry::from_json_str(&geometry.stringify()).unwrap();
			assert_eq!(decoded, geometry);
		}
	}

	#[test]
	fn round_trip_feature_collection() {
		let mut feature = Feature::new(Geometry::new_line_string(vec![[102.0, 0.0], [105.0, 1.0]]));
		feature.set_id("segment");
		feature.set_property("prop0", "value0");
		feature.bbox = Some(vec![102.0, 0.0, 105.0, 1.0]);

		let mut collection = FeatureCollection::new();
		collection.add_feature(feature);
		collection.add_feature(Feature::new(Geometry::new_point([102.0, 0.5])));

		let decoded = FeatureCollection::from_json_str(&collection.stringify()).unwrap();
		assert_eq!(decoded, collection);
	}

	#[test]
	fn full_document_of_an_empty_feature() {
		let feature = Feature::new(Geometry::new_point([1.0, 2.0]));
		assert_eq!(
			feature.stringify(),
			r#"{"geometry":{"coordinates":[1,2],"type":"Point"},"properties":null,"type":"Feature"}"#
		);
	}
}
