//! Wireup - build-time service discovery for dependency-injection containers
//!
//! Wireup provides the compiler passes that run while a container is being
//! built: translation resource files are discovered on disk and grouped by
//! locale, tagged converter services are validated and collected into a
//! registry, and both results are merged into the arguments of their target
//! service definitions before the container is frozen.

pub mod application;
pub mod config;
pub mod container;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CompileReport, Compiler, CompilerPass, ConverterPass, ConverterRegistry, PassState,
    TranslatorPass,
};
pub use config::{ConfigError, ConfigWarning, ConverterConfig, TranslatorConfig, WireupConfig};
pub use container::{Container, ContainerBuilder, Definition, DirectoryResource};
pub use domain::entities::{CandidateResource, Registry, RoleTag, TagAttributes};
pub use domain::ports::{
    Converter, ConvertError, DiscoveryError, DomainManager, FormHandler, ResourceDiscovery,
};
pub use domain::services::{Insertion, RegistryBuilder, TagValidator, ValidationError};
pub use domain::value_objects::{
    Capability, Contract, Reference, ServiceId, TranslationFileName, TraversalOrder,
};
pub use error::{WireupError, WireupResult};
pub use infrastructure::{FsScanner, JsonConverter};
