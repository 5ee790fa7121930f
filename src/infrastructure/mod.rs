//! Infrastructure layer module
//!
//! This module contains the ambient infrastructure around the workflow engine:
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Snapshot file loading for the CLI

/// Configuration loading
pub mod config;
/// Logging setup
pub mod logging;
/// Snapshot and payload documents
pub mod snapshot;
