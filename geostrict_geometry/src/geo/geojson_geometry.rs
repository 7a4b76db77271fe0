use super::*;
use crate::{DecodeError, DecodeOptions};
use geostrict_core::json::JsonValue;

/// Any GeoJSON geometry object: an instance geometry or a geometry collection.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJsonGeometry {
	Geometry(Geometry),
	Collection(GeometryCollection),
}

impl GeoJsonGeometry {
	/// Dispatches on the `type` member to [`Geometry`] or [`GeometryCollection`].
	pub fn decode_with(value: &JsonValue, options: &DecodeOptions) -> Result<Self, DecodeError> {
		let object = expect_object(value)?;
		if read_geometry_type(object)?.is_collection() {
			GeometryCollection::decode_with(value, options).map(GeoJsonGeometry::Collection)
		} else {
			Geometry::decode_with(value, options).map(GeoJsonGeometry::Geometry)
		}
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			GeoJsonGeometry::Geometry(geometry) => geometry.geometry_type(),
			GeoJsonGeometry::Collection(_) => GeometryType::GeometryCollection,
		}
	}
}

impl Decode for GeoJsonGeometry {
	fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
		Self::decode_with(value, &DecodeOptions::default())
	}
}

impl From<Geometry> for GeoJsonGeometry {
	fn from(geometry: Geometry) -> Self {
		GeoJsonGeometry::Geometry(geometry)
	}
}

impl From<GeometryCollection> for GeoJsonGeometry {
	fn from(collection: GeometryCollection) -> Self {
		GeoJsonGeometry::Collection(collection)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn instance_geometry() {
		let value = JsonValue::parse_str(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#).unwrap();
		let result = GeoJsonGeometry::decode(&value).unwrap();
		assert_eq!(result.geometry_type(), GeometryType::LineString);
		assert!(matches!(result, GeoJsonGeometry::Geometry(Geometry::Xy(Shape::LineString(_)))));
	}

	#[test]
	fn collection() {
		let value = JsonValue::parse_str(r#"{"type":"GeometryCollection","geometries":[]}"#).unwrap();
		let result = GeoJsonGeometry::decode(&value).unwrap();
		assert_eq!(result.geometry_type(), GeometryType::GeometryCollection);
		assert_eq!(result, GeoJsonGeometry::from(GeometryCollection::default()));
	}

	#[test]
	fn unknown_type() {
		let value = JsonValue::parse_str(r#"{"type":"Feature","geometry":null}"#).unwrap();
		assert_eq!(
			GeoJsonGeometry::decode(&value),
			Err(DecodeError::UnknownGeometryType {
				found: Some(String::from("Feature"))
			}
			.at_field("type"))
		);
	}
}
