//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces that the persistence
//! collaborator must implement:
//! - InterventionRepository: snapshot reads, status updates and phase saves
//!
//! These traits keep the workflow engine independent of how interventions
//! are actually stored.

/// Intervention persistence port
pub mod intervention_repository;

pub use intervention_repository::InterventionRepository;
