//! JSON value enum: the untyped tree every geostrict decoder starts from.

use crate::json::*;
use anyhow::{Result, anyhow};
use std::fmt::Display;

/// One node of a parsed (or programmatically built) JSON document.
///
/// Numbers are stored as `f64`. Trees built in code may hold non-finite numbers even though
/// the text parser never produces them.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parses JSON text, see [`parse_json_str`].
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Name of the JSON type of this node, as used in error messages.
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	#[must_use]
	pub fn new_object() -> JsonValue {
		JsonValue::Object(JsonObject::default())
	}

	fn type_error(&self, expected: &str) -> anyhow::Error {
		anyhow!("expected {expected}, found {}", self.type_as_str())
	}

	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => Err(self.type_error("an array")),
		}
	}

	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => Err(self.type_error("an object")),
		}
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => Err(self.type_error("a string")),
		}
	}

	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(number) => Ok(*number),
			_ => Err(self.type_error("a number")),
		}
	}
}

/// Compact JSON text.
impl Display for JsonValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.stringify())
	}
}

impl From<&str> for JsonValue {
	fn from(text: &str) -> Self {
		JsonValue::String(text.to_owned())
	}
}

impl From<String> for JsonValue {
	fn from(text: String) -> Self {
		JsonValue::String(text)
	}
}

impl From<bool> for JsonValue {
	fn from(flag: bool) -> Self {
		JsonValue::Boolean(flag)
	}
}

/// Anything convertible into a [`JsonArray`] (vectors and fixed-size arrays of convertible items).
impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(items: I) -> Self {
		JsonValue::Array(JsonArray::from(items))
	}
}

impl From<JsonObject> for JsonValue {
	fn from(object: JsonObject) -> Self {
		JsonValue::Object(object)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn scalars() {
		assert_eq!(JsonValue::from("Point"), JsonValue::String(String::from("Point")));
		assert_eq!(JsonValue::from(String::from("Point")), JsonValue::String(String::from("Point")));
		assert_eq!(JsonValue::from(false), JsonValue::Boolean(false));
		assert_eq!(JsonValue::from(-0.5), JsonValue::Number(-0.5));
		assert_eq!(JsonValue::from(3), JsonValue::Number(3.0));
	}

	#[test]
	fn coordinate_arrays() {
		let value = JsonValue::from(vec![[1, 2], [3, 4]]);
		assert_eq!(
			value,
			JsonValue::Array(JsonArray(vec![
				JsonValue::Array(JsonArray(vec![JsonValue::Number(1.0), JsonValue::Number(2.0)])),
				JsonValue::Array(JsonArray(vec![JsonValue::Number(3.0), JsonValue::Number(4.0)])),
			]))
		);
		assert_eq!(value.stringify(), "[[1,2],[3,4]]");
	}

	#[test]
	fn type_names() {
		let names = [
			JsonValue::new_array(),
			JsonValue::from(true),
			JsonValue::Null,
			JsonValue::from(1),
			JsonValue::new_object(),
			JsonValue::from("x"),
		]
		.iter()
		.map(JsonValue::type_as_str)
		.collect::<Vec<_>>();
		assert_eq!(names, vec!["array", "boolean", "null", "number", "object", "string"]);
	}

	#[test]
	fn display_is_compact_json() {
		let value = JsonValue::from(vec![("coordinates", JsonValue::from(vec![1.5, 2.0]))]);
		assert_eq!(value.to_string(), r#"{"coordinates":[1.5,2]}"#);
	}

	#[test]
	fn accessors() {
		let array = JsonValue::new_array();
		assert!(array.as_array().is_ok());
		assert_eq!(array.as_object().unwrap_err().to_string(), "expected an object, found array");

		let object = JsonValue::new_object();
		assert!(object.as_object().is_ok());
		assert_eq!(object.as_array().unwrap_err().to_string(), "expected an array, found object");

		assert_eq!(JsonValue::from("Polygon").as_str().unwrap(), "Polygon");
		assert!(JsonValue::from(7).as_str().is_err());

		assert_eq!(JsonValue::from(7).as_number().unwrap(), 7.0);
		assert_eq!(
			JsonValue::from("7").as_number().unwrap_err().to_string(),
			"expected a number, found string"
		);
	}

	#[test]
	fn parse_str() {
		let parsed = JsonValue::parse_str(r#"{"type":"Point","coordinates":[0,1]}"#).unwrap();
		assert_eq!(
			parsed,
			JsonValue::from(vec![("type", JsonValue::from("Point")), ("coordinates", JsonValue::from([0, 1]))])
		);
		assert!(JsonValue::parse_str(r#"{"type":}"#).is_err());
	}
}
