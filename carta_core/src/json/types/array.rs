//! JSON array type and conversions from Rust collections.

use crate::json::*;
use anyhow::Result;
use std::fmt::Debug;

/// A JSON array backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	/// Converts every element to `f64`, failing on the first non-number.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_number).collect()
	}

	/// Converts every element to `String`, failing on the first non-string.
	pub fn as_string_vec(&self) -> Result<Vec<String>> {
		self.0.iter().map(JsonValue::as_string).collect()
	}

	/// Serializes to a compact JSON string.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T: Clone> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: &Vec<T>) -> Self {
		JsonArray(input.iter().cloned().map(JsonValue::from).collect())
	}
}

impl<T: Clone> From<&[T]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: &[T]) -> Self {
		JsonArray(input.iter().cloned().map(JsonValue::from).collect())
	}
}

impl<T, const N: usize> From<[T; N]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: [T; N]) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T: Clone, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: &[T; N]) -> Self {
		JsonArray(input.iter().cloned().map(JsonValue::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_collections() {
		let from_vec = JsonArray::from(vec![1.0, 2.0]);
		let from_array = JsonArray::from([1.0, 2.0]);
		let from_slice = JsonArray::from(&[1.0, 2.0][..]);
		assert_eq!(from_vec, from_array);
		assert_eq!(from_vec, from_slice);
		assert_eq!(from_vec.len(), 2);
	}

	#[test]
	fn test_as_number_vec() {
		let array = JsonArray::from(vec![1.5, -2.0, 3.0]);
		assert_eq!(array.as_number_vec().unwrap(), vec![1.5, -2.0, 3.0]);

		let mixed = JsonArray(vec![JsonValue::Number(1.0), JsonValue::from("x")]);
		assert!(mixed.as_number_vec().is_err());
	}

	#[test]
	fn test_as_string_vec() {
		let array = JsonArray::from(vec!["a", "b"]);
		assert_eq!(array.as_string_vec().unwrap(), vec!["a", "b"]);
		assert!(JsonArray::from(vec![1]).as_string_vec().is_err());
	}

	#[test]
	fn test_stringify() {
		let array = JsonArray(vec![JsonValue::from("value"), JsonValue::Number(42.0)]);
		assert_eq!(array.stringify(), r#"["value",42]"#);
		assert_eq!(JsonArray::default().stringify(), "[]");
	}
}
