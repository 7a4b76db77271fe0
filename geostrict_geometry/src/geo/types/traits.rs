use crate::DecodeError;
use anyhow::Result;
use geostrict_core::json::JsonValue;
use std::fmt::Debug;

/// Validating conversion from the raw JSON tree.
///
/// A successful decode yields a value whose invariants hold by construction; there is no
/// other public way to build one from unchecked data.
pub trait Decode: Sized {
	/// Decodes `value`, stopping at the first violated constraint.
	fn decode(value: &JsonValue) -> Result<Self, DecodeError>;
}

/// Parses JSON text and decodes it as `T`.
///
/// The returned error carries the [`DecodeError`] (reachable through `downcast_ref`) with
/// its path and root cause as context.
pub fn decode_json_str<T: Decode>(json: &str) -> Result<T> {
	let value = JsonValue::parse_str(json)?;
	T::decode(&value).map_err(|error| {
		let description = error.describe();
		anyhow::Error::new(error).context(description)
	})
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
/// For example, a single `Position` can be converted into a `MultiPoint`.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent.
	fn into_multi(self) -> Multi;
}

/// Read-only access to geometries that are sequences of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait Composite<Item>: Debug + Clone {
	/// Returns the elements as a slice.
	fn as_slice(&self) -> &[Item];

	/// Consumes the geometry and returns its elements.
	fn into_inner(self) -> Vec<Item>;

	/// Splits the geometry into its first element and the rest, if available.
	fn into_first_and_rest(self) -> Option<(Item, Vec<Item>)> {
		let mut iter = self.into_inner().into_iter();
		iter.next().map(|first| (first, iter.collect()))
	}

	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_slice().iter()
	}

	fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	fn len(&self) -> usize {
		self.as_slice().len()
	}

	fn first(&self) -> Option<&Item> {
		self.as_slice().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_slice().last()
	}
}
