//! Container model
//!
//! The build context the compiler passes operate on. A `ContainerBuilder` is
//! mutable and exclusively owned by the build; compiling it runs the passes
//! once and freezes the result into a read-only `Container`.

mod builder;
mod definition;
mod resource;

pub use builder::{Container, ContainerBuilder};
pub use definition::Definition;
pub use resource::DirectoryResource;
