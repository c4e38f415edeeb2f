//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `discovery/` - File system resource discovery
//! - `converters/` - Built-in format converters

pub mod converters;
pub mod discovery;

// Re-export for convenience
pub use converters::JsonConverter;
pub use discovery::FsScanner;
