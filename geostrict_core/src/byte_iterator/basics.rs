//! Small parsing helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! These functions implement the JSON grammar pieces needed to build a
//! [`JsonValue`](crate::json::JsonValue) tree:
//! - `parse_tag` for matching fixed ASCII tags (`true`, `false`, `null`)
//! - `parse_quoted_json_string` for string literals with escapes, including surrogate pairs
//! - `parse_number_as_string` and `parse_number_as<T>` for JSON number syntax
//! - `parse_object_entries` and `parse_array_entries` to iterate over object/array contents
//!
//! Every function leaves the iterator positioned at the next token, e.g. after a closing `]`.

use super::iterator::ByteIterator;
use anyhow::{Context, Result, bail};
use std::str::FromStr;

/// Match a fixed ASCII tag at the current iterator position.
///
/// # Errors
/// Returns an error if the upcoming bytes do not exactly match `tag` or the input ends early.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for c in tag.bytes() {
		if iter.expect_next_byte()? != c {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut hex = [0u8; 4];
	for byte in &mut hex {
		*byte = iter.expect_next_byte()?;
	}
	if !hex.iter().all(u8::is_ascii_hexdigit) {
		return Err(iter.format_error("invalid unicode escape"));
	}
	std::str::from_utf8(&hex)
		.ok()
		.and_then(|digits| u16::from_str_radix(digits, 16).ok())
		.ok_or_else(|| iter.format_error("invalid unicode escape"))
}

/// Parse a JSON quoted string literal and return it as `String`.
///
/// Supports the escapes `\" \\ \/ \b \f \n \r \t` and `\uXXXX`, where a high surrogate must
/// be followed by an escaped low surrogate. Leaves the iterator **after** the closing quote.
///
/// # Errors
/// Missing quotes, raw control characters, invalid escapes, unpaired surrogates, invalid UTF-8
/// or unexpected end of input.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);

	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut units = vec![parse_hex4(iter)?];
					if (0xD800..0xDC00).contains(&units[0]) {
						if iter.expect_next_byte()? != b'\\' || iter.expect_next_byte()? != b'u' {
							return Err(iter.format_error("expected low surrogate"));
						}
						units.push(parse_hex4(iter)?);
					}
					let text = String::from_utf16(&units).map_err(|_| iter.format_error("invalid unicode code point"))?;
					bytes.extend_from_slice(text.as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c if c < 0x20 => return Err(iter.format_error("unescaped control character in string")),
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).context("string is not valid UTF-8")
}

/// Parse a JSON number and return its textual representation.
///
/// Accepts an optional minus sign, an integer part, an optional fraction and an optional
/// exponent. Leaves the iterator at the first byte that is not part of the number.
///
/// # Errors
/// Returns an error if required digits are missing, the integer part has a leading zero or
/// the number continues with a second `.`.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	fn push_digits(iter: &mut ByteIterator, number: &mut String) -> bool {
		let mut has_digits = false;
		while let Some(byte @ b'0'..=b'9') = iter.peek() {
			has_digits = true;
			number.push(byte as char);
			iter.advance();
		}
		has_digits
	}

	let mut number = String::with_capacity(16);

	if let Some(b'-') = iter.peek() {
		number.push('-');
		iter.advance();
	}

	if let Some(b'0') = iter.peek() {
		number.push('0');
		iter.advance();
		if let Some(b'0'..=b'9') = iter.peek() {
			return Err(iter.format_error("leading zero in number"));
		}
	} else if !push_digits(iter, &mut number) {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		number.push('.');
		iter.advance();
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(byte @ (b'e' | b'E')) = iter.peek() {
		number.push(byte as char);
		iter.advance();
		if let Some(sign @ (b'+' | b'-')) = iter.peek() {
			number.push(sign as char);
			iter.advance();
		}
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	Ok(number)
}

/// Parse a JSON number and convert it to a concrete type `R`.
///
/// # Errors
/// Returns an error if the number syntax is invalid or `R::from_str` rejects it.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Iterate over JSON object entries, invoking `parse_value` for each key.
///
/// The closure receives the parsed key and the iterator positioned at the start of the value,
/// and is responsible for consuming the value.
///
/// # Errors
/// Returns an error on malformed objects or if `parse_value` fails.
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if let Some(b'}') = iter.peek() {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => return Ok(()),
			_ => return Err(iter.format_error("parsing object, expected ',' or '}'")),
		}
	}
}

/// Iterate over JSON array entries, collecting the results from `parse_value`.
///
/// # Errors
/// Returns an error on malformed arrays or if `parse_value` fails.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => return Ok(result),
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}
}
