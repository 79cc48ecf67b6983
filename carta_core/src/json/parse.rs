use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_cursor::*;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Parses a complete JSON document into a [`JsonValue`].
///
/// Trailing non-whitespace input is rejected.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut cursor = ByteCursor::from_str(json);
	let value = parse_json_cursor(&mut cursor).context("while parsing JSON")?;
	cursor.skip_whitespace();
	if cursor.peek().is_some() {
		return Err(cursor.format_error("unexpected trailing data"));
	}
	Ok(value)
}

/// Parses the next JSON value at the cursor position.
pub fn parse_json_cursor(cursor: &mut ByteCursor) -> Result<JsonValue> {
	cursor.skip_whitespace();
	match cursor.expect_peeked_byte()? {
		b'[' => parse_array_entries(cursor, parse_json_cursor).map(|entries| JsonValue::Array(JsonArray(entries))),
		b'{' => parse_json_object(cursor),
		b'"' => parse_quoted_json_string(cursor).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'.' || d == b'-' => parse_number_as::<f64>(cursor).map(JsonValue::Number),
		b't' => parse_tag(cursor, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(cursor, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(cursor, "null").map(|()| JsonValue::Null),
		c => Err(cursor.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(cursor: &mut ByteCursor) -> Result<JsonValue> {
	let mut entries: Vec<(String, JsonValue)> = Vec::new();
	parse_object_entries(cursor, |key, cursor| {
		entries.push((key, parse_json_cursor(cursor)?));
		Ok(())
	})?;
	Ok(JsonValue::Object(JsonObject(BTreeMap::from_iter(entries))))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn v<T>(input: T) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::from(input)
	}

	#[test]
	fn test_nested_document() {
		let data = r#"{"cities":[{"name":"Nantes","pop":320732},{"name":"Bruxelles","pop":1218255}],"countries":["France","Belgium"]}"#;
		let json = parse_json_str(data).unwrap();
		assert_eq!(
			json,
			v(vec![
				(
					"cities",
					v(vec![
						v(vec![("name", v("Nantes")), ("pop", v(320732))]),
						v(vec![("name", v("Bruxelles")), ("pop", v(1218255))]),
					])
				),
				("countries", v(vec!["France", "Belgium"]))
			])
		);
	}

	#[test]
	fn test_primitives() {
		assert_eq!(parse_json_str("true").unwrap(), JsonValue::Boolean(true));
		assert_eq!(parse_json_str("false").unwrap(), JsonValue::Boolean(false));
		assert_eq!(parse_json_str("null").unwrap(), JsonValue::Null);
		assert_eq!(parse_json_str("-12.5e2").unwrap(), JsonValue::Number(-1250.0));
		assert_eq!(parse_json_str("\"x\"").unwrap(), JsonValue::from("x"));
	}

	#[test]
	fn test_whitespace_everywhere() {
		let result = v(vec![(
			"a",
			v(vec![
				v(vec![("b", v(7)), ("c", v(true))]),
				v(vec![("d", v(false)), ("e", JsonValue::Null), ("f", v("g"))]),
			]),
		)]);

		let data = r#"_{_"a"_:_[_{_"b"_:_7_,_"c"_:_true_}_,_{_"d"_:_false_,_"e"_:_null_,_"f"_:_"g"_}_]_}_"#;

		assert_eq!(parse_json_str(&data.replace('_', "")).unwrap(), result);
		assert_eq!(parse_json_str(&data.replace('_', " ")).unwrap(), result);
		assert_eq!(parse_json_str(&data.replace('_', "\t")).unwrap(), result);
		assert_eq!(parse_json_str(&data.replace('_', "\n")).unwrap(), result);
	}

	#[test]
	fn test_errors() {
		assert!(parse_json_str("").is_err());
		assert!(parse_json_str(r#"{"key":}"#).is_err());
		assert!(parse_json_str(r#"{"key":1,}"#).is_err());
		assert!(parse_json_str("[1,2").is_err());
		assert!(parse_json_str("[1,2] trailing").is_err());
		assert!(parse_json_str("{} {}").is_err());
	}

	#[test]
	fn test_error_carries_position() {
		let error = parse_json_str(r#"{"city":"Nantes","country","France"}"#).unwrap_err();
		assert!(error.root_cause().to_string().contains("position"));
	}
}
