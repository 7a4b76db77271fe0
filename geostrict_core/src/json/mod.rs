//! The untyped JSON tree consumed by geostrict decoders, plus a text parser and a compact
//! serializer used for diagnostics.

mod parse;
mod stringify;
mod types;

pub use parse::{MAX_NESTING_DEPTH, parse_json_iter, parse_json_str};
pub use stringify::*;
pub use types::{JsonArray, JsonObject, JsonValue};
