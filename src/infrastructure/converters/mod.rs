//! Built-in converters

mod json;

pub use json::JsonConverter;
