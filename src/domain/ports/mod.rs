//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod converter;
pub mod domain_manager;
pub mod form_handler;
pub mod resource_discovery;

pub use converter::{ConvertError, Converter};
pub use domain_manager::{DomainError, DomainManager, ResourceDomain};
pub use form_handler::FormHandler;
pub use resource_discovery::{Discovered, DiscoveryError, ResourceDiscovery};
