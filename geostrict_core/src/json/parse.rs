use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};

/// Parse a complete JSON document. Trailing non-whitespace content is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::new(json);
	let value = parse_json_iter(&mut iter)
		.and_then(|value| {
			iter.skip_whitespace();
			if iter.is_at_end() {
				Ok(value)
			} else {
				Err(iter.format_error("unexpected trailing content"))
			}
		})
		.with_context(|| format!("while parsing JSON '{}'", shorten(json)))?;
	Ok(value)
}

/// Deepest array or object nesting accepted by the parser.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parse the next JSON value from `iter`, leaving the iterator after it.
///
/// Arrays and objects nested deeper than [`MAX_NESTING_DEPTH`] are rejected.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_value(iter, 0)
}

fn parse_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_NESTING_DEPTH => Err(iter.format_error("maximum nesting depth exceeded")),
		b'[' => parse_array_entries(iter, |iter2| parse_value(iter2, depth + 1)).map(|i| JsonValue::Array(JsonArray(i))),
		b'{' => parse_json_object(iter, depth),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter2| {
		object.0.insert(key, parse_value(iter2, depth + 1)?);
		Ok(())
	})?;
	Ok(JsonValue::Object(object))
}

fn shorten(json: &str) -> String {
	const MAX_CHARS: usize = 64;
	if json.chars().count() <= MAX_CHARS {
		json.to_string()
	} else {
		format!("{}…", json.chars().take(MAX_CHARS).collect::<String>())
	}
}
