// GeoJSON geometry model: the dimension-generic types in `types`, the `type` discriminator,
// and the object-level decoders for instance geometries and geometry collections.

mod collection;
mod geojson_geometry;
mod geometry;
mod geometry_type;
mod types;

pub use collection::*;
pub use geojson_geometry::*;
pub use geometry::*;
pub use geometry_type::*;
pub use types::*;
