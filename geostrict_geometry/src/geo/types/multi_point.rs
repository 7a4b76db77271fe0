use super::{Decode, Dim, Position, SupportedDim, decode_positions};
use crate::DecodeError;
use geostrict_core::json::JsonValue;

/// Any number of positions of one dimensionality, including none.
#[derive(Clone, PartialEq)]
pub struct MultiPoint<const N: usize>(Vec<Position<N>>);

pub type MultiPoint2d = MultiPoint<2>;
pub type MultiPoint3d = MultiPoint<3>;

impl<const N: usize> From<Vec<Position<N>>> for MultiPoint<N> {
	fn from(positions: Vec<Position<N>>) -> Self {
		Self(positions)
	}
}

impl<const N: usize> Decode for MultiPoint<N>
where
	Dim<N>: SupportedDim,
{
	fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
		decode_positions::<N>(value).map(Self)
	}
}

crate::impl_composite!(MultiPoint, Position);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Composite;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(JsonValue::new_array(), 0)]
	#[case(JsonValue::from(vec![[1, 2]]), 1)]
	#[case(JsonValue::from(vec![[1, 2], [1, 2], [3, 4]]), 3)]
	fn any_count(#[case] value: JsonValue, #[case] count: usize) {
		assert_eq!(MultiPoint2d::decode(&value).unwrap().len(), count);
	}

	#[test]
	fn three_dimensional() {
		let multi = MultiPoint3d::decode(&JsonValue::from(vec![[1, 2, 3]])).unwrap();
		assert_eq!(multi.first().map(Position::z), Some(3.0));
	}

	#[test]
	fn mixed_dimensions() {
		let value = JsonValue::from(vec![vec![1, 2], vec![1, 2, 3]]);
		assert_eq!(
			MultiPoint2d::decode(&value),
			Err(DecodeError::DimensionMismatch { expected: 2, actual: 3 }.at_index(1))
		);
	}

	#[test]
	fn debug_format() {
		let multi = MultiPoint2d::decode(&JsonValue::from(vec![[1, 2], [3, 4]])).unwrap();
		assert_eq!(format!("{multi:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}
}
