//! Workflow rules and the request flows built on them.

/// Completion percentage
pub mod completion_calculator;
/// Description parsing and composing
pub mod description_parser;
/// Request flows
pub mod intervention_service;
/// Next-action recommendations
pub mod next_action_advisor;
/// Workflow phase derivation
pub mod phase_deriver;
/// Phase submission validation
pub mod phase_validator;
/// Enriched read model
pub mod workflow_facade;

pub use completion_calculator::calculate_completion;
pub use description_parser::{
    compose_description, compose_from_diagnostic, parse_spare_parts, parse_work_items,
};
pub use intervention_service::{InterventionService, StatusChangeRequest};
pub use next_action_advisor::next_actions;
pub use phase_deriver::derive_phase;
pub use phase_validator::{
    validate_diagnostic, validate_planning, validate_quality_control, validate_submission,
    ValidationReport,
};
pub use workflow_facade::{can_transition, enrich, enrich_snapshot};
