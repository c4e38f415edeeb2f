//! Converter port
//!
//! Converters turn raw request content of one format into a structured value.
//! Services implementing this trait are tagged `converter` with a `type`
//! attribute and collected by `ConverterPass`.

use crate::domain::entities::RegistryError;
use crate::domain::value_objects::{Contract, ServiceId};

pub trait Converter: Send + Sync {
    /// Format handled by this converter (e.g. `json`)
    fn format(&self) -> &str;

    fn convert(&self, content: &str) -> Result<serde_json::Value, ConvertError>;
}

impl Contract for dyn Converter {
    const CONTRACT: &'static str = "wireup::Converter";
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("no converter registered for type '{kind}' (available: {available})")]
    UnknownType { kind: String, available: String },

    #[error("invalid {format} content: {message}")]
    InvalidContent { format: String, message: String },

    #[error("converter service \"{id}\" could not be resolved")]
    UnresolvedService { id: ServiceId },

    #[error("invalid converter registry: {0}")]
    InvalidRegistry(#[from] RegistryError),
}
