use crate::DecodeError;
use anyhow::bail;
use geostrict_core::json::{JsonObject, JsonValue};
use std::{fmt::Display, str::FromStr};

/// The `type` discriminator of a GeoJSON geometry object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	pub const ALL: [GeometryType; 7] = [
		GeometryType::Point,
		GeometryType::MultiPoint,
		GeometryType::LineString,
		GeometryType::MultiLineString,
		GeometryType::Polygon,
		GeometryType::MultiPolygon,
		GeometryType::GeometryCollection,
	];

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		use GeometryType::*;
		match self {
			Point => "Point",
			MultiPoint => "MultiPoint",
			LineString => "LineString",
			MultiLineString => "MultiLineString",
			Polygon => "Polygon",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
		}
	}

	#[must_use]
	pub fn is_collection(&self) -> bool {
		*self == GeometryType::GeometryCollection
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for GeometryType {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match GeometryType::ALL.into_iter().find(|t| t.as_str() == s) {
			Some(geometry_type) => Ok(geometry_type),
			None => bail!("unknown geometry type '{s}'"),
		}
	}
}

/// Reads and resolves the `type` member of a geometry object.
///
/// Literals are case-sensitive. Failures are wrapped at the `type` field.
pub(crate) fn read_geometry_type(object: &JsonObject) -> Result<GeometryType, DecodeError> {
	let found = match object.get("type") {
		None => None,
		Some(JsonValue::String(name)) => match name.parse::<GeometryType>() {
			Ok(geometry_type) => return Ok(geometry_type),
			Err(_) => Some(name.clone()),
		},
		Some(other) => Some(other.stringify()),
	};
	Err(DecodeError::UnknownGeometryType { found }.at_field("type"))
}
