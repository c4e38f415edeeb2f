//! Domain Value Objects
//!
//! Immutable value types shared by the domain services and the container.

mod capability;
mod service_id;
mod translation_file;
mod traversal;

pub use capability::{Capability, Contract, Implementation};
pub use service_id::{Reference, ServiceId};
pub use translation_file::TranslationFileName;
pub use traversal::TraversalOrder;
