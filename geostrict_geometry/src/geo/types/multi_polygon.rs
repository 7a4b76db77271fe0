use super::Polygon;

/// Polygons sharing one dimensionality. May be empty.
#[derive(Clone, PartialEq)]
pub struct MultiPolygon<const N: usize>(Vec<Polygon<N>>);

pub type MultiPolygon2d = MultiPolygon<2>;
pub type MultiPolygon3d = MultiPolygon<3>;

impl<const N: usize> From<Vec<Polygon<N>>> for MultiPolygon<N> {
	fn from(polygons: Vec<Polygon<N>>) -> Self {
		Self(polygons)
	}
}

crate::impl_composite!(MultiPolygon, Polygon);
crate::impl_decode_elements!(MultiPolygon, Polygon);
