//! Domain Services
//!
//! Pure logic over domain entities: validating tagged services and merging
//! candidates into registries. No container or file system access.

mod registry_builder;
mod tag_validator;

pub use registry_builder::{Insertion, RegistryBuilder};
pub use tag_validator::{TagValidator, TaggedComponent, ValidationError, DEFAULT_ATTRIBUTE};
