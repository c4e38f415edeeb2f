//! Application Layer
//!
//! Compiler passes and the pipeline that runs them.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain validation or merge rules (those are in Domain)
//! - Coordinates between Infrastructure, Domain and the container
//!
//! ## Passes
//!
//! - `TranslatorPass` - Registers translation files into the translator options
//! - `ConverterPass` - Registers tagged converters into the converter registry
//!
//! ## Runtime
//!
//! - `ConverterRegistry` - Resolves converters from a compiled container

pub mod compiler;
pub mod converter_registry;
pub mod passes;

pub use compiler::{CompileReport, Compiler, CompilerPass, PassState};
pub use converter_registry::ConverterRegistry;
pub use passes::{ConverterPass, TranslatorPass};
