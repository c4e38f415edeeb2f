//! Common test utilities for Wireup property and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with a translations folder
//! - Fixtures: Reusable definitions and file sets

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;

/// Route `tracing` output through the test harness; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
