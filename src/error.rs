//! Error types for Wireup
//!
//! Each layer owns a `thiserror` enum; `WireupError` rolls them up so a
//! container build surfaces a single error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::entities::RegistryError;
use crate::domain::ports::DiscoveryError;
use crate::domain::services::ValidationError;
use crate::domain::value_objects::ServiceId;

/// Result type alias for Wireup operations
pub type WireupResult<T> = Result<T, WireupError>;

/// Main error type for a container build.
///
/// Every variant is fatal: the build is aborted and no partial registry is
/// installed for the pass that failed.
#[derive(Error, Debug)]
pub enum WireupError {
    /// Scan root missing or unreadable
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// A tagged service failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A target definition carries an argument that cannot hold a registry
    #[error("invalid argument {index} of service \"{service}\": {source}")]
    InvalidArgument {
        service: ServiceId,
        index: usize,
        #[source]
        source: RegistryError,
    },

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WireupError {
    /// Whether this error was raised by tag validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, WireupError::Validation(_))
    }
}
