use super::*;
use crate::{DecodeError, DecodeOptions, Dimensions};
use geostrict_core::json::JsonValue;
use log::trace;
use std::fmt::Debug;

/// One of the six instance geometry kinds at a fixed dimensionality.
#[derive(Clone, PartialEq)]
pub enum Shape<const N: usize> {
	Point(Position<N>),
	MultiPoint(MultiPoint<N>),
	LineString(LineString<N>),
	MultiLineString(MultiLineString<N>),
	Polygon(Polygon<N>),
	MultiPolygon(MultiPolygon<N>),
}

impl<const N: usize> Shape<N> {
	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Shape::Point(_) => GeometryType::Point,
			Shape::MultiPoint(_) => GeometryType::MultiPoint,
			Shape::LineString(_) => GeometryType::LineString,
			Shape::MultiLineString(_) => GeometryType::MultiLineString,
			Shape::Polygon(_) => GeometryType::Polygon,
			Shape::MultiPolygon(_) => GeometryType::MultiPolygon,
		}
	}

	/// Widens single geometries into their multi counterpart; multi geometries are returned unchanged.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Shape::Point(g) => Shape::MultiPoint(g.into_multi()),
			Shape::LineString(g) => Shape::MultiLineString(g.into_multi()),
			Shape::Polygon(g) => Shape::MultiPolygon(g.into_multi()),
			Shape::MultiPoint(_) | Shape::MultiLineString(_) | Shape::MultiPolygon(_) => self,
		}
	}
}

impl<const N: usize> Shape<N>
where
	Dim<N>: SupportedDim,
{
	/// Decodes `coordinates` with the validator matching `geometry_type`.
	///
	/// `geometry_type` must not be `GeometryCollection`.
	fn decode_coordinates(geometry_type: GeometryType, coordinates: &JsonValue) -> Result<Self, DecodeError> {
		Ok(match geometry_type {
			GeometryType::Point => Shape::Point(Position::decode(coordinates)?),
			GeometryType::MultiPoint => Shape::MultiPoint(MultiPoint::decode(coordinates)?),
			GeometryType::LineString => Shape::LineString(LineString::decode(coordinates)?),
			GeometryType::MultiLineString => Shape::MultiLineString(MultiLineString::decode(coordinates)?),
			GeometryType::Polygon => Shape::Polygon(Polygon::decode(coordinates)?),
			GeometryType::MultiPolygon => Shape::MultiPolygon(MultiPolygon::decode(coordinates)?),
			GeometryType::GeometryCollection => {
				return Err(DecodeError::UnknownGeometryType {
					found: Some(geometry_type.to_string()),
				});
			}
		})
	}
}

impl<const N: usize> Debug for Shape<N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Shape::Point(g) => g,
			Shape::MultiPoint(g) => g,
			Shape::LineString(g) => g,
			Shape::MultiLineString(g) => g,
			Shape::Polygon(g) => g,
			Shape::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.geometry_type().as_str()).field(inner).finish()
	}
}

/// A validated instance geometry, uniformly 2d or uniformly 3d.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Xy(Shape<2>),
	Xyz(Shape<3>),
}

impl Geometry {
	/// Decodes a geometry object `{"type": ..., "coordinates": ...}`.
	///
	/// Members other than `type` and `coordinates` are ignored. With [`Dimensions::Any`] the
	/// coordinates are decoded as 2d first. 3d is attempted when the 2d attempt failed at the
	/// first position in document order, skipping empty containers. When both attempts fail
	/// there, the 2d failure is reported.
	pub fn decode_with(value: &JsonValue, options: &DecodeOptions) -> Result<Self, DecodeError> {
		let object = expect_object(value)?;
		let geometry_type = read_geometry_type(object)?;
		if geometry_type.is_collection() {
			return Err(DecodeError::UnknownGeometryType {
				found: Some(geometry_type.to_string()),
			}
			.at_field("type"));
		}
		let coordinates = object
			.get("coordinates")
			.ok_or(DecodeError::MissingField("coordinates"))?;

		trace!("decoding {geometry_type} coordinates");
		Self::decode_coordinates(geometry_type, coordinates, options.dimensions).map_err(|source| {
			DecodeError::CoordinatesShapeMismatch {
				geometry_type,
				source: Box::new(source),
			}
		})
	}

	fn decode_coordinates(
		geometry_type: GeometryType,
		coordinates: &JsonValue,
		dimensions: Dimensions,
	) -> Result<Self, DecodeError> {
		match dimensions {
			Dimensions::Xy => Shape::<2>::decode_coordinates(geometry_type, coordinates).map(Geometry::Xy),
			Dimensions::Xyz => Shape::<3>::decode_coordinates(geometry_type, coordinates).map(Geometry::Xyz),
			Dimensions::Any => match Shape::<2>::decode_coordinates(geometry_type, coordinates) {
				Ok(shape) => Ok(Geometry::Xy(shape)),
				Err(error_2d) if error_2d.fails_outright(coordinates) => {
					trace!("{geometry_type} coordinates are not 2d, trying 3d");
					match Shape::<3>::decode_coordinates(geometry_type, coordinates) {
						Ok(shape) => Ok(Geometry::Xyz(shape)),
						Err(error_3d) if error_3d.fails_outright(coordinates) => Err(error_2d),
						Err(error_3d) => Err(error_3d),
					}
				}
				Err(error_2d) => Err(error_2d),
			},
		}
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Xy(shape) => shape.geometry_type(),
			Geometry::Xyz(shape) => shape.geometry_type(),
		}
	}

	/// Number of components per position: 2 or 3.
	#[must_use]
	pub fn dimension(&self) -> usize {
		match self {
			Geometry::Xy(_) => 2,
			Geometry::Xyz(_) => 3,
		}
	}

	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Xy(shape) => Geometry::Xy(shape.into_multi()),
			Geometry::Xyz(shape) => Geometry::Xyz(shape.into_multi()),
		}
	}
}

impl Decode for Geometry {
	fn decode(value: &JsonValue) -> Result<Self, DecodeError> {
		Self::decode_with(value, &DecodeOptions::default())
	}
}

impl From<Shape<2>> for Geometry {
	fn from(shape: Shape<2>) -> Self {
		Geometry::Xy(shape)
	}
}

impl From<Shape<3>> for Geometry {
	fn from(shape: Shape<3>) -> Self {
		Geometry::Xyz(shape)
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Geometry::Xy(shape) => shape.fmt(f),
			Geometry::Xyz(shape) => shape.fmt(f),
		}
	}
}
