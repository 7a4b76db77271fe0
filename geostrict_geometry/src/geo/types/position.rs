use super::{Decode, MultiPoint, SingleGeometryTrait};
use crate::DecodeError;
use geostrict_core::json::JsonValue;
use std::fmt::Debug;

/// Position arities a decoder can be instantiated with.
pub const SUPPORTED_ARITIES: [usize; 2] = [2, 3];

/// Type-level marker for a position arity.
pub struct Dim<const N: usize>;

mod sealed {
	pub trait Sealed {}
	impl Sealed for super::Dim<2> {}
	impl Sealed for super::Dim<3> {}
}

/// Implemented for `Dim<2>` and `Dim<3>` only.
pub trait SupportedDim: sealed::Sealed {}
impl SupportedDim for Dim<2> {}
impl SupportedDim for Dim<3> {}

/// A single location: exactly `N` finite coordinates, `[x, y]` or `[x, y, z]`.
///
/// The arity is part of the type, so 2d and 3d positions never mix within one geometry.
#[derive(Clone, Copy, PartialEq)]
pub struct Position<const N: usize>([f64; N]);

pub type Position2d = Position<2>;
pub type Position3d = Position<3>;

impl<const N: usize> Position<N> {
	#[must_use]
	pub fn as_array(&self) -> &[f64; N] {
		&self.0
	}

	#[must_use]
	pub fn as_slice(&self) -> &[f64] {
		&self.0
	}
}

impl<const N: usize> Position<N>
where
	Dim<N>: SupportedDim,
{
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}
}

impl Position<3> {
	/// Returns the elevation component.
	#[must_use]
	pub fn z(&self) -> f64 {
		self.0[2]
	}
}

impl<const N: usize> TryFrom<[f64; N]> for Position<N>
where
	Dim<N>: SupportedDim,
{
	type Error = DecodeError;

	fn try_from(values: [f64; N]) -> Result<Self, Self::Error> {
		if values.iter().all(|v| v.is_finite()) {
			Ok(Self(values))
		} else {
			Err(DecodeError::InvalidPosition {
				value: JsonValue::from(values),
				arity: N,
			})
		}
	}
}

impl<const N: usize> From<Position<N>> for [f64; N] {
	fn from(position: Position<N>) -> Self {
		position.0
	}
}

impl<const N: usize> Decode for Position<N>
where
	Dim<N>: SupportedDim,
{
	fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
		read_components::<N>(value)
			.map(Self)
			.ok_or_else(|| DecodeError::InvalidPosition {
				value: value.clone(),
				arity: N,
			})
	}
}

impl<const N: usize> SingleGeometryTrait<MultiPoint<N>> for Position<N> {
	/// Wraps this position into a `MultiPoint` with one element.
	fn into_multi(self) -> MultiPoint<N> {
		MultiPoint::from(vec![self])
	}
}

impl<const N: usize> Debug for Position<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

fn read_components<const N: usize>(value: &JsonValue) -> Option<[f64; N]> {
	let JsonValue::Array(array) = value else {
		return None;
	};
	if array.len() != N {
		return None;
	}
	let mut components = [0.0; N];
	for (component, item) in components.iter_mut().zip(array) {
		match item {
			JsonValue::Number(number) if number.is_finite() => *component = *number,
			_ => return None,
		}
	}
	Some(components)
}

/// Returns the arity of `value` if it is a well-formed position of any supported arity.
pub(crate) fn position_arity(value: &JsonValue) -> Option<usize> {
	let JsonValue::Array(array) = value else {
		return None;
	};
	let well_formed = array
		.iter()
		.all(|item| matches!(item, JsonValue::Number(number) if number.is_finite()));
	(well_formed && SUPPORTED_ARITIES.contains(&array.len())).then_some(array.len())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Composite;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn decode_2d() {
		let position = Position2d::decode(&JsonValue::from([1, 1])).unwrap();
		assert_eq!(position.x(), 1.0);
		assert_eq!(position.y(), 1.0);
		assert_eq!(position.as_slice(), &[1.0, 1.0]);
	}

	#[test]
	fn decode_3d() {
		let position = Position3d::decode(&JsonValue::from([1.5, -2.0, 300.0])).unwrap();
		assert_eq!(position.as_array(), &[1.5, -2.0, 300.0]);
		assert_eq!(position.z(), 300.0);
	}

	#[rstest]
	#[case(JsonValue::from([1]))]
	#[case(JsonValue::from([1, 2, 3]))]
	#[case(JsonValue::new_array())]
	#[case(JsonValue::from(vec![JsonValue::from(1), JsonValue::from("2")]))]
	#[case(JsonValue::from(vec![JsonValue::from(1), JsonValue::Null]))]
	#[case(JsonValue::from([f64::NAN, 1.0]))]
	#[case(JsonValue::from([1.0, f64::INFINITY]))]
	#[case(JsonValue::from("1,2"))]
	#[case(JsonValue::new_object())]
	fn invalid_2d(#[case] value: JsonValue) {
		let error = Position2d::decode(&value).unwrap_err();
		assert!(matches!(error, DecodeError::InvalidPosition { arity: 2, .. }), "{error:?}");
	}

	#[test]
	fn invalid_3d() {
		let value = JsonValue::from([1, 2]);
		assert_eq!(
			Position3d::decode(&value),
			Err(DecodeError::InvalidPosition { value, arity: 3 })
		);
	}

	#[test]
	fn try_from_array() {
		let position = Position2d::try_from([3.0, 4.0]).unwrap();
		assert_eq!(<[f64; 2]>::from(position), [3.0, 4.0]);
		assert!(Position3d::try_from([1.0, f64::NEG_INFINITY, 0.0]).is_err());
	}

	#[test]
	fn arity_of_well_formed_positions() {
		assert_eq!(position_arity(&JsonValue::from([1, 2])), Some(2));
		assert_eq!(position_arity(&JsonValue::from([1, 2, 3])), Some(3));
		assert_eq!(position_arity(&JsonValue::from([1, 2, 3, 4])), None);
		assert_eq!(position_arity(&JsonValue::from(vec![JsonValue::from(1), JsonValue::Null])), None);
		assert_eq!(position_arity(&JsonValue::from(1)), None);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Position2d::try_from([1.0, 2.0]).unwrap()), "[1.0, 2.0]");
	}

	#[test]
	fn into_multi() {
		let position = Position3d::try_from([1.0, 2.0, 3.0]).unwrap();
		let multi = position.into_multi();
		assert_eq!(multi.as_slice(), &[position]);
	}
}
