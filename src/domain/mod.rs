//! Domain layer for the intervention workflow engine
//!
//! This module contains the domain models, errors and port traits.

/// Domain error type
pub mod errors;
/// Domain models
pub mod models;
/// Ports to external collaborators
pub mod ports;

// Re-export error types for convenient access
pub use errors::{DomainError, DomainResult};
