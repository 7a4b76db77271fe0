//! Raw input model for geostrict: the JSON value tree that geometry decoders validate, and
//! the byte-level parser that builds it from text.

pub mod byte_iterator;
pub mod json;
