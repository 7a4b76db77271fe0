//! Byte-level scanning of JSON text.
//! Re-exports the `basics` parsing helpers and the `iterator` cursor.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
