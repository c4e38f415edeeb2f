//! Domain Layer
//!
//! Discovery, validation and registry rules, without touching the container
//! or the file system directly.
//!
//! ## Structure
//!
//! - `entities/` - Candidate resources, role tags, registries
//! - `value_objects/` - Service ids, references, capabilities, file-name convention
//! - `services/` - Tag validation and registry merging
//! - `ports/` - Interface definitions (discovery, converters, contracts)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - File system walking lives in `infrastructure`
//! 2. **Fail fast** - Validation stops at the first invalid component
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
