use super::Feature;

/// An ordered collection of features.
///
/// Insertion order is significant and preserved through encoding. An empty
/// collection is valid and serializes its `"features"` member as `[]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
	pub features: Vec<Feature>,
	pub bbox: Option<Vec<f64>>,
}

impl FeatureCollection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn from_features(features: Vec<Feature>) -> Self {
		Self { features, bbox: None }
	}

	pub fn add_feature(&mut self, feature: Feature) {
		self.features.push(feature);
	}
}
