//! Shared helpers for decoding arrays and objects from the raw tree.

use super::{Dim, Position, SupportedDim, position_arity};
use crate::{Decode, DecodeError};
use geostrict_core::json::{JsonArray, JsonObject, JsonValue};

pub(crate) fn expect_array(value: &JsonValue) -> Result<&JsonArray, DecodeError> {
	match value {
		JsonValue::Array(array) => Ok(array),
		other => Err(DecodeError::unexpected("array", other)),
	}
}

pub(crate) fn expect_object(value: &JsonValue) -> Result<&JsonObject, DecodeError> {
	match value {
		JsonValue::Object(object) => Ok(object),
		other => Err(DecodeError::unexpected("object", other)),
	}
}

/// Decodes every element of the array `value` in order.
///
/// Stops at the first failing element and wraps its failure with the element index.
pub(crate) fn decode_elements<T>(
	value: &JsonValue,
	decode: impl Fn(&JsonValue) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
	expect_array(value)?
		.iter()
		.enumerate()
		.map(|(index, item)| decode(item).map_err(|error| error.at_index(index)))
		.collect()
}

/// Decodes an ordered sequence of positions of one fixed dimensionality.
///
/// An element that is a well-formed position of the other supported dimensionality fails
/// with `DimensionMismatch` rather than `InvalidPosition`.
pub(crate) fn decode_positions<const N: usize>(value: &JsonValue) -> Result<Vec<Position<N>>, DecodeError>
where
	Dim<N>: SupportedDim,
{
	decode_elements(value, |item| {
		Position::<N>::decode(item).map_err(|error| match position_arity(item) {
			Some(actual) if actual != N => DecodeError::DimensionMismatch { expected: N, actual },
			_ => error,
		})
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn elements_in_order() {
		let value = JsonValue::from(vec![[1, 2], [3, 4]]);
		let positions = decode_positions::<2>(&value).unwrap();
		assert_eq!(positions.len(), 2);
		assert_eq!(positions[1].as_array(), &[3.0, 4.0]);
	}

	#[test]
	fn empty_array() {
		assert!(decode_positions::<3>(&JsonValue::new_array()).unwrap().is_empty());
	}

	#[test]
	fn not_an_array() {
		assert_eq!(
			decode_positions::<2>(&JsonValue::new_object()),
			Err(DecodeError::UnexpectedValue {
				expected: "array",
				found: "object"
			})
		);
		assert_eq!(
			expect_object(&JsonValue::Null),
			Err(DecodeError::UnexpectedValue {
				expected: "object",
				found: "null"
			})
		);
	}

	#[test]
	fn first_failure_is_wrapped_with_index() {
		let value = JsonValue::from(vec![
			JsonValue::from([1, 2]),
			JsonValue::from("x"),
			JsonValue::from([1]),
		]);
		assert_eq!(
			decode_positions::<2>(&value),
			Err(
				DecodeError::InvalidPosition {
					value: JsonValue::from("x"),
					arity: 2
				}
				.at_index(1)
			)
		);
	}

	#[test]
	fn mixed_dimensions() {
		let value = JsonValue::from(vec![vec![1, 2], vec![3, 4, 5]]);
		assert_eq!(
			decode_positions::<2>(&value),
			Err(DecodeError::DimensionMismatch { expected: 2, actual: 3 }.at_index(1))
		);

		let value = JsonValue::from(vec![vec![1, 2, 3], vec![3, 4]]);
		assert_eq!(
			decode_positions::<3>(&value),
			Err(DecodeError::DimensionMismatch { expected: 3, actual: 2 }.at_index(1))
		);
	}

	#[test]
	fn other_dimension_at_first_position() {
		let value = JsonValue::from(vec![[1, 2, 3]]);
		assert_eq!(
			decode_positions::<2>(&value),
			Err(DecodeError::DimensionMismatch { expected: 2, actual: 3 }.at_index(0))
		);
	}

	#[test]
	fn unsupported_arity_is_invalid_position() {
		let value = JsonValue::from(vec![vec![1, 2], vec![1, 2, 3, 4]]);
		assert_eq!(
			decode_positions::<2>(&value),
			Err(
				DecodeError::InvalidPosition {
					value: JsonValue::from([1, 2, 3, 4]),
					arity: 2
				}
				.at_index(1)
			)
		);
	}
}
