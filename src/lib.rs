//! maintflow - Maintenance Intervention Workflow Engine
//!
//! maintflow holds the rules that govern a maintenance intervention: which
//! status changes are legal, which workflow phase it is in, how far along it
//! is, what the operator should do next, and which work items and spare
//! parts its description lists.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors and the repository port
//! - **Service Layer** (`services`): pure workflow rules and the request flows
//! - **Infrastructure Layer** (`infrastructure`): configuration, logging, snapshot loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use maintflow::{enrich, Intervention, InterventionStatus, WorkflowPhase};
//!
//! let intervention = Intervention::new(1, "REQUIRED WORK:\n- Replace bearing (HIGH, 45min)")
//!     .with_status(InterventionStatus::Planned);
//! let enriched = enrich(&intervention, None, None, None);
//!
//! assert_eq!(enriched.phase, WorkflowPhase::Diagnostic);
//! assert_eq!(enriched.work_items[0].estimated_minutes, 45);
//! ```

/// Command-line interface
pub mod cli;
/// Domain layer
pub mod domain;
/// Infrastructure layer
pub mod infrastructure;
/// Workflow rules and request flows
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    is_legal_transition, is_legal_transition_str, Config, DiagnosticPayload, DiagnosticRecord,
    EnrichedIntervention, Intervention, InterventionSnapshot, InterventionStatus, NextAction,
    NextActionKind, PhaseKind, PhaseSubmission, PlanningPayload, PlanningRecord,
    QualityControlPayload, QualityControlRecord, SparePart, WorkItem, WorkItemPriority,
    WorkflowPhase,
};
pub use domain::ports::InterventionRepository;
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    calculate_completion, can_transition, derive_phase, enrich, enrich_snapshot, next_actions,
    parse_spare_parts, parse_work_items, validate_diagnostic, validate_planning,
    validate_quality_control, validate_submission, InterventionService, StatusChangeRequest,
    ValidationReport,
};
