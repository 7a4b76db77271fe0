//! Strict decoding of GeoJSON (RFC 7946) geometries.
//!
//! Raw [`JsonValue`](geostrict_core::json::JsonValue) trees are decoded into validated,
//! immutable values. Minimum point counts, ring closure, uniform dimensionality and the
//! `type` discriminator are all enforced by the decode step. Dimensionality is a const
//! generic parameter, so `LineString<2>` and `LineString<3>` are distinct types.
//!
//! ```
//! use geostrict_geometry::{Geometry, GeometryType, decode_json_str};
//!
//! let geometry: Geometry = decode_json_str(r#"{"type":"Point","coordinates":[1,1]}"#).unwrap();
//! assert_eq!(geometry.geometry_type(), GeometryType::Point);
//! assert_eq!(geometry.dimension(), 2);
//! ```

mod error;
mod geo;
mod options;

pub use error::*;
pub use geo::*;
pub use options::*;
