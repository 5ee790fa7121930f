//! Domain models for the intervention workflow.

/// Configuration model
pub mod config;
/// Enriched read model
pub mod enriched;
/// Interventions and their status
pub mod intervention;
/// Phases, payloads and records
pub mod phase;
/// Parsed description entries
pub mod work_item;

pub use config::{Config, DisplayConfig, LogFormat, LoggingConfig, RotationPolicy};
pub use enriched::{EnrichedIntervention, NextAction, NextActionKind};
pub use intervention::{
    is_legal_transition, is_legal_transition_str, Intervention, InterventionStatus,
};
pub use phase::{
    DiagnosticPayload, DiagnosticRecord, Evaluation, InterventionSnapshot, PhaseKind,
    PhaseSubmission, PlanningPayload, PlanningRecord, QualityControlPayload,
    QualityControlRecord, RequiredWorkEntry, SparePartEntry, TestResult, WorkflowPhase,
};
pub use work_item::{SparePart, WorkItem, WorkItemPriority};
