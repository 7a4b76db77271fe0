use super::{Decode, Dim, LinearRing, MultiLineString, Position, SingleGeometryTrait, SupportedDim, decode_positions};
use crate::DecodeError;
use geostrict_core::json::JsonValue;

/// An ordered path of at least two positions.
///
/// Consecutive positions may be equal.
#[derive(Clone, PartialEq)]
pub struct LineString<const N: usize>(Vec<Position<N>>);

pub type LineString2d = LineString<2>;
pub type LineString3d = LineString<3>;

impl<const N: usize> LineString<N> {
	pub const MIN_POINTS: usize = 2;
}

impl<const N: usize> TryFrom<Vec<Position<N>>> for LineString<N> {
	type Error = DecodeError;

	fn try_from(positions: Vec<Position<N>>) -> Result<Self, Self::Error> {
		if positions.len() < Self::MIN_POINTS {
			return Err(DecodeError::TooFewPoints {
				actual: positions.len(),
				minimum: Self::MIN_POINTS,
			});
		}
		Ok(Self(positions))
	}
}

/// Every ring is a valid line string.
impl<const N: usize> From<LinearRing<N>> for LineString<N> {
	fn from(ring: LinearRing<N>) -> Self {
		Self(crate::Composite::into_inner(ring))
	}
}

impl<const N: usize> Decode for LineString<N>
where
	Dim<N>: SupportedDim,
{
	fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
		decode_positions::<N>(value).and_then(Self::try_from)
	}
}

impl<const N: usize> SingleGeometryTrait<MultiLineString<N>> for LineString<N> {
	fn into_multi(self) -> MultiLineString<N> {
		MultiLineString::from(vec![self])
	}
}

crate::impl_composite!(LineString, Position);
