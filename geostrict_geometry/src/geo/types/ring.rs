use super::{Decode, Dim, LineString, Position, SupportedDim, decode_positions};
use crate::DecodeError;
use geostrict_core::json::JsonValue;

/// A closed line string: at least four positions, the last equal to the first.
///
/// Closure is exact coordinate equality. Three distinct points plus the closing repeat is
/// the smallest valid ring.
#[derive(Clone, PartialEq)]
pub struct LinearRing<const N: usize>(Vec<Position<N>>);

pub type LinearRing2d = LinearRing<2>;
pub type LinearRing3d = LinearRing<3>;

impl<const N: usize> LinearRing<N> {
	pub const MIN_POINTS: usize = 4;
}

impl<const N: usize> TryFrom<Vec<Position<N>>> for LinearRing<N> {
	type Error = DecodeError;

	fn try_from(positions: Vec<Position<N>>) -> Result<Self, Self::Error> {
		if positions.len() < Self::MIN_POINTS {
			return Err(DecodeError::TooFewPoints {
				actual: positions.len(),
				minimum: Self::MIN_POINTS,
			});
		}
		if let (Some(first), Some(last)) = (positions.first(), positions.last())
			&& first.as_array() != last.as_array()
		{
			return Err(DecodeError::RingNotClosed {
				first: first.as_slice().to_vec(),
				last: last.as_slice().to_vec(),
			});
		}
		Ok(Self(positions))
	}
}

impl<const N: usize> TryFrom<LineString<N>> for LinearRing<N> {
	type Error = DecodeError;

	fn try_from(line: LineString<N>) -> Result<Self, Self::Error> {
		Self::try_from(crate::Composite::into_inner(line))
	}
}

impl<const N: usize> Decode for LinearRing<N>
where
	Dim<N>: SupportedDim,
{
	fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
		decode_positions::<N>(value).and_then(Self::try_from)
	}
}

crate::impl_composite!(LinearRing, Position);
