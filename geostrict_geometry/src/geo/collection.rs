use super::*;
use crate::{DecodeError, DecodeOptions};
use geostrict_core::json::JsonValue;
use log::trace;
use std::fmt::Debug;

/// An ordered list of instance geometries, as in `{"type": "GeometryCollection", "geometries": [...]}`.
///
/// Collections do not nest: a member whose type is `GeometryCollection` is rejected.
/// Members may mix dimensionalities, duplicates are kept, and an empty list is valid.
#[derive(Clone, Default, PartialEq)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
	pub fn decode_with(value: &JsonValue, options: &DecodeOptions) -> Result<Self, DecodeError> {
		let object = expect_object(value)?;
		let geometry_type = read_geometry_type(object)?;
		if !geometry_type.is_collection() {
			return Err(DecodeError::UnexpectedValue {
				expected: "GeometryCollection",
				found: geometry_type.as_str(),
			}
			.at_field("type"));
		}
		let geometries = object
			.get("geometries")
			.ok_or(DecodeError::MissingField("geometries"))?;

		decode_elements(geometries, |member| decode_member(member, options))
			.map(Self)
			.map_err(|error| {
				trace!("rejecting GeometryCollection: {}", error.describe());
				error.at_field("geometries")
			})
	}
}

fn decode_member(value: &JsonValue, options: &DecodeOptions) -> Result<Geometry, DecodeError> {
	if let JsonValue::Object(object) = value
		&& let Some(JsonValue::String(name)) = object.get("type")
		&& name == GeometryType::GeometryCollection.as_str()
	{
		return Err(DecodeError::NestedGeometryCollection.at_field("type"));
	}
	Geometry::decode_with(value, options)
}

impl Decode for GeometryCollection {
	fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
		Self::decode_with(value, &DecodeOptions::default())
	}
}

impl From<Vec<Geometry>> for GeometryCollection {
	fn from(geometries: Vec<Geometry>) -> Self {
		Self(geometries)
	}
}

impl Composite<Geometry> for GeometryCollection {
	fn as_slice(&self) -> &[Geometry] {
		&self.0
	}
	fn into_inner(self) -> Vec<Geometry> {
		self.0
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
