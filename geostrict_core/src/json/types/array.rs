//! JSON array type.
use crate::json::*;
use std::fmt::Debug;

/// Ordered elements of a JSON array.
///
/// Coordinate arrays are plain nestings of this type; decoders index into it by position.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	/// Compact JSON text, e.g. `[1,2]`.
	///
	/// ```rust
	/// use geostrict_core::json::JsonArray;
	/// assert_eq!(JsonArray::from([[0, 0], [1, 1]]).stringify(), "[[0,0],[1,1]]");
	/// ```
	#[must_use]
	pub fn stringify(&self) -> String {
		let mut text = String::from("[");
		for (i, item) in self.0.iter().enumerate() {
			if i > 0 {
				text.push(',');
			}
			text.push_str(&item.stringify());
		}
		text.push(']');
		text
	}

	#[must_use]
	pub fn as_slice(&self) -> &[JsonValue] {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<T> FromIterator<T> for JsonArray
where
	JsonValue: From<T>,
{
	fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
		JsonArray(items.into_iter().map(JsonValue::from).collect())
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(items: Vec<T>) -> Self {
		items.into_iter().collect()
	}
}

impl<T, const N: usize> From<[T; N]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(items: [T; N]) -> Self {
		items.into_iter().collect()
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Copy,
{
	fn from(items: &[T; N]) -> Self {
		items.iter().copied().collect()
	}
}
