//! Structured decode failures.
//!
//! Every decoder fails fast with a [`DecodeError`]. Decoders that descend into an array
//! element or an object member wrap the child failure instead of re-deriving it, so the
//! chain of wrappers spells out the accessor [`Path`] from the decode root to the leaf.

use crate::GeometryType;
use geostrict_core::json::JsonValue;
use std::fmt::{self, Display};
use thiserror::Error;

/// One accessor step: an object member or an array element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
	Field(String),
	Index(usize),
}

impl Display for PathSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PathSegment::Field(name) => f.write_str(name),
			PathSegment::Index(index) => write!(f, "[{index}]"),
		}
	}
}

/// Accessor path from the decode root to a failure, rendered like `geometries[1].coordinates[0]`.
///
/// The root itself renders as `$`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathSegment>);

impl Path {
	#[must_use]
	pub fn segments(&self) -> &[PathSegment] {
		&self.0
	}

	#[must_use]
	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}
}

impl Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0.is_empty() {
			return f.write_str("$");
		}
		for (i, segment) in self.0.iter().enumerate() {
			match segment {
				PathSegment::Field(name) if i > 0 => write!(f, ".{name}")?,
				segment => write!(f, "{segment}")?,
			}
		}
		Ok(())
	}
}

/// A failure to decode a raw value into a validated geometry.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DecodeError {
	/// Wrong arity, a non-numeric component or a non-finite component.
	#[error("invalid position {value}, expected an array of {arity} finite numbers")]
	InvalidPosition { value: JsonValue, arity: usize },

	#[error("too few points: found {actual}, at least {minimum} required")]
	TooFewPoints { actual: usize, minimum: usize },

	#[error("linear ring is not closed: first position {first:?} differs from last position {last:?}")]
	RingNotClosed { first: Vec<f64>, last: Vec<f64> },

	/// A well-formed position whose arity differs from the one fixed for the aggregate.
	#[error("dimension mismatch: expected {expected} components, found {actual}")]
	DimensionMismatch { expected: usize, actual: usize },

	#[error("unknown geometry type {}", describe_type(.found))]
	UnknownGeometryType { found: Option<String> },

	#[error("coordinates do not have the shape of a {geometry_type}")]
	CoordinatesShapeMismatch {
		geometry_type: GeometryType,
		source: Box<DecodeError>,
	},

	#[error("invalid value at {segment}")]
	NestedStructureFailure {
		segment: PathSegment,
		source: Box<DecodeError>,
	},

	#[error("expected {expected}, found {found}")]
	UnexpectedValue {
		expected: &'static str,
		found: &'static str,
	},

	#[error("missing field '{0}'")]
	MissingField(&'static str),

	#[error("a GeometryCollection must not contain another GeometryCollection")]
	NestedGeometryCollection,
}

#[allow(clippy::ref_option)]
fn describe_type(found: &Option<String>) -> String {
	match found {
		Some(name) => format!("'{name}'"),
		None => String::from("(missing)"),
	}
}

/// Fieldless tag of a [`DecodeError`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
	InvalidPosition,
	TooFewPoints,
	RingNotClosed,
	DimensionMismatch,
	UnknownGeometryType,
	CoordinatesShapeMismatch,
	NestedStructureFailure,
	UnexpectedValue,
	MissingField,
	NestedGeometryCollection,
}

impl DecodeError {
	pub(crate) fn at_index(self, index: usize) -> Self {
		DecodeError::NestedStructureFailure {
			segment: PathSegment::Index(index),
			source: Box::new(self),
		}
	}

	pub(crate) fn at_field(self, name: &str) -> Self {
		DecodeError::NestedStructureFailure {
			segment: PathSegment::Field(name.to_string()),
			source: Box::new(self),
		}
	}

	pub(crate) fn unexpected(expected: &'static str, value: &JsonValue) -> Self {
		DecodeError::UnexpectedValue {
			expected,
			found: value.type_as_str(),
		}
	}

	/// Returns the wrapped child failure, if this is a wrapper.
	fn child(&self) -> Option<&DecodeError> {
		match self {
			DecodeError::CoordinatesShapeMismatch { source, .. } | DecodeError::NestedStructureFailure { source, .. } => {
				Some(source)
			}
			_ => None,
		}
	}

	/// Accessor path from the decode root to the failing value.
	#[must_use]
	pub fn path(&self) -> Path {
		let mut segments = Vec::new();
		let mut current = self;
		loop {
			match current {
				DecodeError::NestedStructureFailure { segment, source } => {
					segments.push(segment.clone());
					current = source;
				}
				DecodeError::CoordinatesShapeMismatch { source, .. } => {
					segments.push(PathSegment::Field(String::from("coordinates")));
					current = source;
				}
				_ => return Path(segments),
			}
		}
	}

	/// The innermost failure, below all wrappers.
	#[must_use]
	pub fn root_cause(&self) -> &DecodeError {
		let mut current = self;
		while let Some(child) = current.child() {
			current = child;
		}
		current
	}

	#[must_use]
	pub fn kind(&self) -> DecodeErrorKind {
		use DecodeError::*;
		match self {
			InvalidPosition { .. } => DecodeErrorKind::InvalidPosition,
			TooFewPoints { .. } => DecodeErrorKind::TooFewPoints,
			RingNotClosed { .. } => DecodeErrorKind::RingNotClosed,
			DimensionMismatch { .. } => DecodeErrorKind::DimensionMismatch,
			UnknownGeometryType { .. } => DecodeErrorKind::UnknownGeometryType,
			CoordinatesShapeMismatch { .. } => DecodeErrorKind::CoordinatesShapeMismatch,
			NestedStructureFailure { .. } => DecodeErrorKind::NestedStructureFailure,
			UnexpectedValue { .. } => DecodeErrorKind::UnexpectedValue,
			MissingField(_) => DecodeErrorKind::MissingField,
			NestedGeometryCollection => DecodeErrorKind::NestedGeometryCollection,
		}
	}

	/// One-line summary: the failure path followed by the root cause.
	#[must_use]
	pub fn describe(&self) -> String {
		format!("{}: {}", self.path(), self.root_cause())
	}

	/// `true` if decoding `coordinates` failed at the first position in document order, meaning
	/// the data never matched the attempted dimensionality at all.
	///
	/// Empty containers in front of the failure hold no positions and do not count.
	pub(crate) fn fails_outright(&self, coordinates: &JsonValue) -> bool {
		if !matches!(
			self.root_cause(),
			DecodeError::InvalidPosition { .. } | DecodeError::DimensionMismatch { .. }
		) {
			return false;
		}
		let mut current = coordinates;
		for segment in self.path().segments() {
			let (PathSegment::Index(index), JsonValue::Array(items)) = (segment, current) else {
				return false;
			};
			if items.iter().take(*index).any(contains_number) {
				return false;
			}
			match items.get(*index) {
				Some(item) => current = item,
				None => return false,
			}
		}
		true
	}
}

fn contains_number(value: &JsonValue) -> bool {
	match value {
		JsonValue::Number(_) => true,
		JsonValue::Array(items) => items.iter().any(contains_number),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::error::Error;

	fn too_few() -> DecodeError {
		DecodeError::TooFewPoints { actual: 2, minimum: 4 }
	}

	fn nested() -> DecodeError {
		let coordinates = DecodeError::CoordinatesShapeMismatch {
			geometry_type: GeometryType::Polygon,
			source: Box::new(too_few().at_index(0)),
		};
		coordinates.at_index(1).at_field("geometries")
	}

	#[test]
	fn path_of_nested_failure() {
		let error = nested();
		assert_eq!(error.path().to_string(), "geometries[1].coordinates[0]");
		assert_eq!(
			error.path().segments(),
			&[
				PathSegment::Field(String::from("geometries")),
				PathSegment::Index(1),
				PathSegment::Field(String::from("coordinates")),
				PathSegment::Index(0),
			]
		);
	}

	#[test]
	fn path_of_leaf_is_root() {
		let path = too_few().path();
		assert!(path.is_root());
		assert_eq!(path.to_string(), "$");
	}

	#[test]
	fn path_starting_with_index() {
		assert_eq!(too_few().at_index(3).at_index(2).path().to_string(), "[2][3]");
	}

	#[test]
	fn root_cause_and_kind() {
		let error = nested();
		assert_eq!(error.kind(), DecodeErrorKind::NestedStructureFailure);
		assert_eq!(error.root_cause(), &too_few());
		assert_eq!(error.root_cause().kind(), DecodeErrorKind::TooFewPoints);
	}

	#[test]
	fn describe() {
		assert_eq!(
			nested().describe(),
			"geometries[1].coordinates[0]: too few points: found 2, at least 4 required"
		);
	}

	#[test]
	fn source_chain() {
		let error = nested();
		let mut messages = vec![error.to_string()];
		let mut source = error.source();
		while let Some(inner) = source {
			messages.push(inner.to_string());
			source = inner.source();
		}
		assert_eq!(
			messages,
			vec![
				"invalid value at geometries",
				"invalid value at [1]",
				"coordinates do not have the shape of a Polygon",
				"invalid value at [0]",
				"too few points: found 2, at least 4 required",
			]
		);
	}

	#[test]
	fn messages() {
		let error = DecodeError::InvalidPosition {
			value: JsonValue::from(vec![1]),
			arity: 2,
		};
		assert_eq!(error.to_string(), "invalid position [1], expected an array of 2 finite numbers");

		let error = DecodeError::RingNotClosed {
			first: vec![1.0, 1.0],
			last: vec![2.0, 3.0],
		};
		assert_eq!(
			error.to_string(),
			"linear ring is not closed: first position [1.0, 1.0] differs from last position [2.0, 3.0]"
		);

		let error = DecodeError::UnknownGeometryType {
			found: Some(String::from("Circle")),
		};
		assert_eq!(error.to_string(), "unknown geometry type 'Circle'");

		let error = DecodeError::UnknownGeometryType { found: None };
		assert_eq!(error.to_string(), "unknown geometry type (missing)");

		assert_eq!(
			DecodeError::unexpected("array", &JsonValue::from("x")).to_string(),
			"expected array, found string"
		);
		assert_eq!(
			DecodeError::MissingField("coordinates").to_string(),
			"missing field 'coordinates'"
		);
	}

	#[test]
	fn fails_outright() {
		let json = |text: &str| JsonValue::parse_str(text).unwrap();
		let invalid = DecodeError::InvalidPosition {
			value: JsonValue::Null,
			arity: 2,
		};
		let mismatch = DecodeError::DimensionMismatch { expected: 2, actual: 3 };

		assert!(invalid.fails_outright(&JsonValue::Null));
		assert!(invalid.clone().at_index(0).at_index(0).fails_outright(&json("[[null]]")));
		assert!(mismatch.clone().at_index(0).fails_outright(&json("[[1,2,3]]")));

		assert!(!invalid.at_index(1).fails_outright(&json("[[1,2],null]")));
		assert!(!mismatch.at_index(0).at_index(2).fails_outright(&json("[[1,2],[3,4],[[5,6,7]]]")));
		assert!(!too_few().at_index(0).fails_outright(&json("[[[1,2]]]")));
	}

	#[test]
	fn empty_containers_before_the_failure_do_not_count() {
		let coordinates = JsonValue::parse_str("[[],[[[0,0,1],[1,0,1],[1,1,1],[0,0,1]]]]").unwrap();
		let mismatch = DecodeError::DimensionMismatch { expected: 2, actual: 3 };
		assert!(mismatch.clone().at_index(0).at_index(0).at_index(1).fails_outright(&coordinates));
		assert!(!mismatch.at_index(1).at_index(0).at_index(1).fails_outright(&coordinates));
	}
}
