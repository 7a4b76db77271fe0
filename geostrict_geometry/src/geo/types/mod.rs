// Validated, dimension-generic geometry types. Each type is a thin wrapper around a `Vec` (or,
// for `Position`, a fixed array) whose invariants are established by its `Decode` impl or a
// validating `TryFrom` constructor. Every type is instantiated for 2d and 3d positions.

mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod polygon;
mod position;
mod ring;
mod sequence;
mod traits;

pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use position::*;
pub use ring::*;
pub(crate) use sequence::*;
pub use traits::*;
