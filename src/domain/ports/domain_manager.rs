//! DomainManager port
//!
//! Contract for a registry of resource domains keyed by the class they
//! manage. No implementation ships with this crate.

use std::sync::Arc;

pub trait ResourceDomain: Send + Sync {
    /// Class of the resources managed by this domain
    fn class(&self) -> &str;
}

pub trait DomainManager {
    /// Check if the class is managed
    fn has(&self, class: &str) -> bool;

    fn add(&mut self, domain: Arc<dyn ResourceDomain>);

    fn remove(&mut self, class: &str);

    fn all(&self) -> Vec<Arc<dyn ResourceDomain>>;

    /// Get the domain managing `class`.
    ///
    /// Fails with [`DomainError::NotManaged`] when no domain manages it.
    fn get(&self, class: &str) -> Result<Arc<dyn ResourceDomain>, DomainError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("the resource domain for the class \"{class}\" is not managed")]
    NotManaged { class: String },
}
