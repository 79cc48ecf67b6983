use super::Position;
use std::fmt::Debug;

/// Coordinate payload of a geometry, one variant per RFC 7946 kind.
///
/// The variant is the discriminant: exactly one coordinate shape exists per
/// geometry, so "two populated coordinate fields" is unrepresentable.
#[derive(Clone, PartialEq)]
pub enum GeometryValue {
	Point(Position),
	MultiPoint(Vec<Position>),
	LineString(Vec<Position>),
	MultiLineString(Vec<Vec<Position>>),
	Polygon(Vec<Vec<Position>>),
	MultiPolygon(Vec<Vec<Vec<Position>>>),
	GeometryCollection(Vec<Geometry>),
}

impl GeometryValue {
	/// The RFC 7946 `"type"` member for this variant.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		use GeometryValue::*;
		match self {
			Point(_) => "Point",
			MultiPoint(_) => "MultiPoint",
			LineString(_) => "LineString",
			MultiLineString(_) => "MultiLineString",
			Polygon(_) => "Polygon",
			MultiPolygon(_) => "MultiPolygon",
			GeometryCollection(_) => "GeometryCollection",
		}
	}
}

/// A geometry object: coordinate payload plus the optional `bbox` member.
///
/// Construction never validates coordinate values, ring closure or winding
/// order; only the JSON shape is checked, and only at decode time.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
	pub value: GeometryValue,
	pub bbox: Option<Vec<f64>>,
}

fn positions<P: Into<Position>>(values: Vec<P>) -> Vec<Position> {
	values.into_iter().map(Into::into).collect()
}

impl Geometry {
	#[must_use]
	pub fn new(value: GeometryValue) -> Self {
		Self { value, bbox: None }
	}

	pub fn new_point<P: Into<Position>>(position: P) -> Self {
		Self::new(GeometryValue::Point(position.into()))
	}

	pub fn new_multi_point<P: Into<Position>>(points: Vec<P>) -> Self {
		Self::new(GeometryValue::MultiPoint(positions(points)))
	}

	pub fn new_line_string<P: Into<Position>>(points: Vec<P>) -> Self {
		Self::new(GeometryValue::LineString(positions(points)))
	}

	pub fn new_multi_line_string<P: Into<Position>>(lines: Vec<Vec<P>>) -> Self {
		Self::new(GeometryValue::MultiLineString(
			lines.into_iter().map(positions).collect(),
		))
	}

	pub fn new_polygon<P: Into<Position>>(rings: Vec<Vec<P>>) -> Self {
		Self::new(GeometryValue::Polygon(rings.into_iter().map(positions).collect()))
	}

	pub fn new_multi_polygon<P: Into<Position>>(polygons: Vec<Vec<Vec<P>>>) -> Self {
		Self::new(GeometryValue::MultiPolygon(
			polygons
				.into_iter()
				.map(|rings| rings.into_iter().map(positions).collect())
				.collect(),
		))
	}

	/// Wraps previously constructed geometries, taking ownership of them.
	#[must_use]
	pub fn new_collection(geometries: Vec<Geometry>) -> Self {
		Self::new(GeometryValue::GeometryCollection(geometries))
	}

	/// The RFC 7946 `"type"` member of this geometry.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.value.type_name()
	}

	#[must_use]
	pub fn is_point(&self) -> bool {
		matches!(self.value, GeometryValue::Point(_))
	}

	#[must_use]
	pub fn is_multi_point(&self) -> bool {
		matches!(self.value, GeometryValue::MultiPoint(_))
	}

	#[must_use]
	pub fn is_line_string(&self) -> bool {
		matches!(self.value, GeometryValue::LineString(_))
	}

	#[must_use]
	pub fn is_multi_line_string(&self) -> bool {
		matches!(self.value, GeometryValue::MultiLineString(_))
	}

	#[must_use]
	pub fn is_polygon(&self) -> bool {
		matches!(self.value, GeometryValue::Polygon(_))
	}

	#[must_use]
	pub fn is_multi_polygon(&self) -> bool {
		matches!(self.value, GeometryValue::MultiPolygon(_))
	}

	#[must_use]
	pub fn is_collection(&self) -> bool {
		matches!(self.value, GeometryValue::GeometryCollection(_))
	}
}

impl Debug for GeometryValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use GeometryValue::*;
		let inner: &dyn Debug = match self {
			Point(g) => g,
			MultiPoint(g) => g,
			LineString(g) => g,
			MultiLineString(g) => g,
			Polygon(g) => g,
			MultiPolygon(g) => g,
			GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
