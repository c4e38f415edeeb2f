//! Domain Entities
//!
//! - `CandidateResource` - a discovered unit waiting to be registered
//! - `RoleTag` - role metadata attached to a service definition
//! - `Registry` - the merged, read-only result installed into the container

mod candidate;
mod registry;
mod role_tag;

pub use candidate::{CandidateResource, RegistryEntry};
pub use registry::{Registry, RegistryError};
pub use role_tag::{RoleTag, TagAttributes};

pub(crate) use registry::kind_of;
