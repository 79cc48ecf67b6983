use super::JsonValue;

/// Serializes a [`JsonValue`] to compact JSON without any whitespace.
///
/// Numbers use the shortest decimal form (`42`, not `42.0`).
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(text) => format!("\"{}\"", escape_json_string(text)),
		JsonValue::Number(number) => number.to_string(),
		JsonValue::Boolean(boolean) => boolean.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(array) => array.stringify(),
		JsonValue::Object(object) => object.stringify(),
	}
}

/// Escapes a string for embedding in a JSON document, without the quotes.
pub fn escape_json_string(input: &str) -> String {
	input
		.chars()
		.map(|c| match c {
			'"' => "\\\"".to_string(),
			'\\' => "\\\\".to_string(),
			'\n' => "\\n".to_string(),
			'\r' => "\\r".to_string(),
			'\t' => "\\t".to_string(),
			'\u{08}' => "\\b".to_string(),
			'\u{0c}' => "\\f".to_string(),
			c if c.is_control() => format!("\\u{:04x}", c as u32),
			c => c.to_string(),
		})
		.collect()
}
