//! Parsing helpers built on top of [`ByteCursor`]:
//!
//! - `parse_tag` for fixed ASCII tags
//! - `parse_quoted_json_string` for JSON string literals with escapes
//! - `parse_number_as_string` and `parse_number_as<T>` for the JSON number
//!   grammar
//! - `parse_object_entries` and `parse_array_entries` to walk object and
//!   array contents
//!
//! Each helper consumes only as much input as it needs and leaves the
//! cursor positioned at the next token.

use super::cursor::ByteCursor;
use anyhow::{Error, Result, bail};
use std::str::FromStr;

/// Matches a fixed ASCII tag at the current cursor position.
pub fn parse_tag(cursor: &mut ByteCursor, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if cursor.expect_next_byte()? != expected {
			return Err(cursor.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

/// Parses a JSON quoted string literal, including `\uXXXX` (BMP) escapes.
///
/// Leaves the cursor positioned after the closing quote.
pub fn parse_quoted_json_string(cursor: &mut ByteCursor) -> Result<String> {
	cursor.skip_whitespace();
	if cursor.expect_next_byte()? != b'"' {
		bail!(cursor.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	let mut hex = [0u8; 4];

	loop {
		match cursor.expect_next_byte()? {
			b'"' => break,
			b'\\' => match cursor.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					for digit in &mut hex {
						*digit = cursor.expect_next_byte()?;
					}
					let code_point = std::str::from_utf8(&hex)
						.ok()
						.and_then(|hex| u16::from_str_radix(hex, 16).ok())
						.ok_or_else(|| cursor.format_error("invalid unicode escape"))?;
					bytes.extend_from_slice(
						String::from_utf16(&[code_point])
							.map_err(|_| cursor.format_error("invalid unicode code point"))?
							.as_bytes(),
					);
				}
				_ => return Err(cursor.format_error("invalid escape sequence")),
			},
			byte => bytes.push(byte),
		}
	}
	String::from_utf8(bytes).map_err(Error::from)
}

/// Parses a JSON number and returns its textual form.
///
/// Accepts an optional sign, an integer part, an optional fraction and an
/// optional exponent. Leaves the cursor at the first non-number byte.
pub fn parse_number_as_string(cursor: &mut ByteCursor) -> Result<String> {
	let mut number = Vec::with_capacity(16);

	if let Some(b'+' | b'-') = cursor.peek() {
		number.push(cursor.expect_next_byte()?);
	}

	let mut integer_digits = false;
	while let Some(b'0'..=b'9') = cursor.peek() {
		integer_digits = true;
		number.push(cursor.expect_next_byte()?);
	}
	if !integer_digits {
		return Err(cursor.format_error("expected digits in number"));
	}

	if let Some(b'.') = cursor.peek() {
		number.push(cursor.expect_next_byte()?);
		let mut fraction_digits = false;
		while let Some(b'0'..=b'9') = cursor.peek() {
			fraction_digits = true;
			number.push(cursor.expect_next_byte()?);
		}
		if !fraction_digits {
			return Err(cursor.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = cursor.peek() {
			return Err(cursor.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = cursor.peek() {
		number.push(cursor.expect_next_byte()?);
		if let Some(b'+' | b'-') = cursor.peek() {
			number.push(cursor.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = cursor.peek() {
			exponent_digits = true;
			number.push(cursor.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(cursor.format_error("expected digits after exponent"));
		}
	}

	String::from_utf8(number).map_err(Error::from)
}

/// Parses a JSON number and converts it via `FromStr`.
pub fn parse_number_as<T: FromStr>(cursor: &mut ByteCursor) -> Result<T> {
	parse_number_as_string(cursor)?
		.parse::<T>()
		.map_err(|_| cursor.format_error("invalid number"))
}

/// Walks the entries of a JSON object, invoking `parse_value` for each key.
///
/// The closure receives the key and the cursor positioned at the start of
/// the value; parsing the value is its job.
pub fn parse_object_entries<R>(
	cursor: &mut ByteCursor,
	mut parse_value: impl FnMut(String, &mut ByteCursor) -> Result<R>,
) -> Result<()> {
	cursor.skip_whitespace();
	if cursor.expect_next_byte()? != b'{' {
		bail!(cursor.format_error("expected '{' while parsing an object"));
	}

	loop {
		cursor.skip_whitespace();
		match cursor.expect_peeked_byte()? {
			b'}' => {
				cursor.advance();
				break;
			}
			b'"' => {
				let key = parse_quoted_json_string(cursor)?;

				cursor.skip_whitespace();
				if cursor.expect_next_byte()? != b':' {
					return Err(cursor.format_error("expected ':'"));
				}

				cursor.skip_whitespace();
				parse_value(key, cursor)?;

				cursor.skip_whitespace();
				match cursor.expect_next_byte()? {
					b',' => {
						cursor.skip_whitespace();
						if cursor.expect_peeked_byte()? != b'"' {
							return Err(cursor.format_error("expected '\"' after ','"));
						}
					}
					b'}' => break,
					_ => return Err(cursor.format_error("expected ',' or '}'")),
				}
			}
			_ => return Err(cursor.format_error("parsing object, expected '\"' or '}'")),
		}
	}
	Ok(())
}

/// Walks the entries of a JSON array, collecting the results of `parse_value`.
pub fn parse_array_entries<R>(
	cursor: &mut ByteCursor,
	mut parse_value: impl FnMut(&mut ByteCursor) -> Result<R>,
) -> Result<Vec<R>> {
	cursor.skip_whitespace();
	if cursor.expect_next_byte()? != b'[' {
		bail!(cursor.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	cursor.skip_whitespace();
	if let Some(b']') = cursor.peek() {
		cursor.advance();
		return Ok(result);
	}

	result.push(parse_value(cursor)?);

	loop {
		cursor.skip_whitespace();
		match cursor.expect_next_byte()? {
			b']' => break,
			b',' => {
				cursor.skip_whitespace();
				result.push(parse_value(cursor)?);
			}
			_ => return Err(cursor.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_tag() {
		fn parse(text: &str, tag: &str) -> bool {
			let mut cursor = ByteCursor::from_str(text);
			parse_tag(&mut cursor, tag).is_ok()
		}
		assert!(parse("null", "null"));
		assert!(!parse("nuul", "null"));
		assert!(parse("something", "some"));
	}

	#[test]
	fn test_parse_quoted_json_string() {
		fn parse(text: &str) -> Result<String> {
			let mut cursor = ByteCursor::from_str(text);
			parse_quoted_json_string(&mut cursor)
		}

		assert_eq!(parse(" \"hello\" ").unwrap(), "hello");
		assert_eq!(parse(" \"he\\nllo\" ").unwrap(), "he\nllo");
		assert_eq!(parse(" \"he\\u0041llo\" ").unwrap(), "heAllo");
		assert_eq!(parse(" \"he\\b\\f\\n\\r\\tllo\" ").unwrap(), "he\x08\x0C\n\r\tllo");
		assert_eq!(parse(" \"hello \\\"world\\\"\" ").unwrap(), "hello \"world\"");

		assert!(parse(" \"he\\u004Gllo\" ").is_err());
		assert!(parse(" \"he\\x41llo\" ").is_err());
		assert!(parse(" \"unterminated string ").is_err());
		assert!(parse("hello").is_err());
	}

	#[test]
	fn test_parse_number_as_string() -> Result<()> {
		fn parse(text: &str) -> Result<String> {
			let mut cursor = ByteCursor::from_str(text);
			parse_number_as_string(&mut cursor)
		}

		assert_eq!(parse("123")?, "123");
		assert_eq!(parse("-123")?, "-123");
		assert_eq!(parse("0.456")?, "0.456");
		assert_eq!(parse("3e4")?, "3e4");
		assert_eq!(parse("123E-10")?, "123E-10");
		assert_eq!(parse("-123.45E+6")?, "-123.45E+6");
		assert_eq!(parse("123 ")?, "123");
		assert_eq!(parse("123.45 abc")?, "123.45");

		assert!(parse("123..45").is_err());
		assert!(parse("1.2.3").is_err());
		assert!(parse("123e").is_err());
		assert!(parse("123e+").is_err());
		assert!(parse("e123").is_err());
		assert!(parse("-").is_err());
		assert!(parse("123.").is_err());
		Ok(())
	}

	#[test]
	fn test_parse_number_as() -> Result<()> {
		fn parse<T: FromStr>(text: &str) -> Result<T> {
			let mut cursor = ByteCursor::from_str(text);
			parse_number_as::<T>(&mut cursor)
		}

		assert_eq!(parse::<i32>("-123")?, -123);
		assert!(parse::<i32>("abc").is_err());
		assert!(parse::<i32>("12.34").is_err());

		assert_eq!(parse::<f64>("12.34")?, 12.34);
		assert_eq!(parse::<f64>("-0.123E3")?, -123.0);
		assert_eq!(parse::<f64>("2e-10")?, 2e-10);
		Ok(())
	}

	#[test]
	fn test_parse_object_entries() {
		let mut cursor = ByteCursor::from_str("{\"key1\":\"value1\", \"key2\": \"value2\"}");

		let mut entries = Vec::new();
		parse_object_entries(&mut cursor, |key, cursor| {
			entries.push((key, parse_quoted_json_string(cursor)?));
			Ok(())
		})
		.unwrap();

		assert_eq!(
			entries,
			vec![
				("key1".to_string(), "value1".to_string()),
				("key2".to_string(), "value2".to_string())
			]
		);
	}

	#[test]
	fn test_parse_object_entries_rejects_garbage() {
		let mut cursor = ByteCursor::from_str("{\"key1\" \"value1\"}");
		let result = parse_object_entries(&mut cursor, |_, cursor| parse_quoted_json_string(cursor));
		assert!(result.is_err());
	}

	#[test]
	fn test_parse_array_entries() {
		let mut cursor = ByteCursor::from_str("[\"val1\", \"val2\", \"val3\"]");
		let result = parse_array_entries(&mut cursor, parse_quoted_json_string).unwrap();
		assert_eq!(result, vec!["val1", "val2", "val3"]);
	}

	#[test]
	fn test_parse_array_entries_empty() {
		let mut cursor = ByteCursor::from_str("[ ]");
		let result = parse_array_entries(&mut cursor, parse_number_as::<i32>).unwrap();
		assert!(result.is_empty());
	}

	#[test]
	fn test_parse_array_entries_with_numbers() {
		let mut cursor = ByteCursor::from_str("[1, 2, 3]");
		let result = parse_array_entries(&mut cursor, parse_number_as::<i32>).unwrap();
		assert_eq!(result, vec![1, 2, 3]);
	}
}
