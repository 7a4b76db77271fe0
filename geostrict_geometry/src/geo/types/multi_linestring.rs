use super::LineString;

/// Line strings sharing one dimensionality. May be empty.
#[derive(Clone, PartialEq)]
pub struct MultiLineString<const N: usize>(Vec<LineString<N>>);

pub type MultiLineString2d = MultiLineString<2>;
pub type MultiLineString3d = MultiLineString<3>;

impl<const N: usize> From<Vec<LineString<N>>> for MultiLineString<N> {
	fn from(lines: Vec<LineString<N>>) -> Self {
		Self(lines)
	}
}

crate::impl_composite!(MultiLineString, LineString);
crate::impl_decode_elements!(MultiLineString, LineString);
