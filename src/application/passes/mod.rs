//! Compiler passes
//!
//! Both passes treat their target definition as an optional integration: when
//! it is not registered the pass leaves the container untouched.

mod converter;
mod translator;

pub use converter::{ConverterPass, DEFAULT_CONVERTER_REGISTRY, DEFAULT_CONVERTER_TAG};
pub use translator::{
    TranslatorPass, DEFAULT_TRANSLATOR, RESOURCE_FILES_KEY, TRANSLATION_FILE_PATTERN,
};
