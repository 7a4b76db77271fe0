//! Decode options for the geometry-level decoders.

/// Which position dimensionalities a geometry decoder accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dimensions {
	/// Try 2d coordinates first and fall back to 3d when the data is not 2d at all.
	#[default]
	Any,
	/// Only `[x, y]` positions.
	Xy,
	/// Only `[x, y, z]` positions.
	Xyz,
}

impl TryFrom<&str> for Dimensions {
	type Error = anyhow::Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		match value.to_lowercase().as_str() {
			"any" => Ok(Dimensions::Any),
			"xy" | "2d" => Ok(Dimensions::Xy),
			"xyz" | "3d" => Ok(Dimensions::Xyz),
			_ => anyhow::bail!("Invalid dimensions '{value}'. Expected 'any', 'xy' or 'xyz'."),
		}
	}
}

/// Options for [`Geometry::decode_with`](crate::Geometry::decode_with) and the collection decoders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
	pub dimensions: Dimensions,
}

impl DecodeOptions {
	#[must_use]
	pub fn with_dimensions(dimensions: Dimensions) -> Self {
		Self { dimensions }
	}
}
