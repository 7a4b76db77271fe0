use super::{LinearRing, MultiPolygon, SingleGeometryTrait};

/// Linear rings sharing one dimensionality: the exterior boundary first, then any holes.
///
/// Winding order and containment are not checked. An empty polygon is valid.
#[derive(Clone, PartialEq)]
pub struct Polygon<const N: usize>(Vec<LinearRing<N>>);

pub type Polygon2d = Polygon<2>;
pub type Polygon3d = Polygon<3>;

impl<const N: usize> Polygon<N> {
	#[must_use]
	pub fn exterior(&self) -> Option<&LinearRing<N>> {
		self.0.first()
	}

	#[must_use]
	pub fn interiors(&self) -> &[LinearRing<N>] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl<const N: usize> From<Vec<LinearRing<N>>> for Polygon<N> {
	fn from(rings: Vec<LinearRing<N>>) -> Self {
		Self(rings)
	}
}

impl<const N: usize> SingleGeometryTrait<MultiPolygon<N>> for Polygon<N> {
	fn into_multi(self) -> MultiPolygon<N> {
		MultiPolygon::from(vec![self])
	}
}

crate::impl_composite!(Polygon, LinearRing);
crate::impl_decode_elements!(Polygon, LinearRing);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Composite, Decode, DecodeError};
	use geostrict_core::json::JsonValue;
	use pretty_assertions::assert_eq;

	fn square(size: i32) -> Vec<[i32; 2]> {
		vec![[0, 0], [size, 0], [size, size], [0, size], [0, 0]]
	}

	#[test]
	fn exterior_and_holes() {
		let value = JsonValue::from(vec![square(10), vec![[2, 2], [3, 2], [3, 3], [2, 2]]]);
		let polygon = Polygon2d::decode(&value).unwrap();
		assert_eq!(polygon.len(), 2);
		assert_eq!(polygon.exterior().map(Composite::len), Some(5));
		assert_eq!(polygon.interiors().len(), 1);
	}

	#[test]
	fn empty_polygon() {
		let polygon = Polygon3d::decode(&JsonValue::new_array()).unwrap();
		assert!(polygon.is_empty());
		assert!(polygon.exterior().is_none());
		assert!(polygon.interiors().is_empty());
	}

	#[test]
	fn invalid_hole_reports_index() {
		let value = JsonValue::from(vec![square(10), square(5), vec![[1, 1], [2, 1], [2, 2], [2, 3]]]);
		assert_eq!(
			Polygon2d::decode(&value),
			Err(DecodeError::RingNotClosed {
				first: vec![1.0, 1.0],
				last: vec![2.0, 3.0]
			}
			.at_index(2))
		);
	}

	#[test]
	fn ring_with_two_points() {
		let value = JsonValue::from(vec![vec![[1, 1], [2, 1]]]);
		assert_eq!(
			Polygon2d::decode(&value),
			Err(DecodeError::TooFewPoints { actual: 2, minimum: 4 }.at_index(0))
		);
	}

	#[test]
	fn dimension_is_fixed_by_the_caller() {
		let value = JsonValue::from(vec![vec![[0, 0, 0], [1, 0, 0], [1, 1, 0], [0, 0, 0]]]);
		assert!(Polygon3d::decode(&value).is_ok());
		assert_eq!(
			Polygon2d::decode(&value),
			Err(DecodeError::DimensionMismatch { expected: 2, actual: 3 }
				.at_index(0)
				.at_index(0))
		);
	}

	#[test]
	fn into_multi() {
		let polygon = Polygon2d::decode(&JsonValue::from(vec![square(1)])).unwrap();
		let multi = polygon.clone().into_multi();
		assert_eq!(multi.into_inner(), vec![polygon]);
	}
}
