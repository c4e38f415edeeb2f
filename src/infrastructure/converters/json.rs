//! JSON converter

use serde_json::Value;

use crate::domain::entities::kind_of;
use crate::domain::ports::{ConvertError, Converter};

/// Converts a JSON body into a structured value.
///
/// Only objects and lists are accepted; a bare scalar is not a usable body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl JsonConverter {
    pub const FORMAT: &'static str = "json";
}

impl Converter for JsonConverter {
    fn format(&self) -> &str {
        Self::FORMAT
    }

    fn convert(&self, content: &str) -> Result<Value, ConvertError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ConvertError::InvalidContent {
                format: Self::FORMAT.to_string(),
                message: e.to_string(),
            })?;

        match value {
            Value::Object(_) | Value::Array(_) => Ok(value),
            other => Err(ConvertError::InvalidContent {
                format: Self::FORMAT.to_string(),
                message: format!("body should be a JSON object or list, found {}", kind_of(&other)),
            }),
        }
    }
}
