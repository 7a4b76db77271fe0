//! JSON object type.
use crate::json::*;
use std::{
	collections::BTreeMap,
	fmt::{Debug, Display},
};

/// Members of a JSON object, kept in key order.
///
/// Parsed text with duplicate keys keeps the last member.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// The member named `key`, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Inserts or replaces the member `key`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(String::from(key), value.into());
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		let members = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), value.stringify()))
			.collect::<Vec<_>>()
			.join(",");
		format!("{{{members}}}")
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(&self.0).finish()
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.stringify())
	}
}

/// Builds an object value from `(key, value)` pairs.
impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(members: Vec<(&str, T)>) -> Self {
		JsonValue::Object(members.into())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(members: Vec<(&str, T)>) -> Self {
		let mut object = JsonObject::new();
		for (key, value) in members {
			object.set(key, value);
		}
		object
	}
}
