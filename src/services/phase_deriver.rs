//! Current workflow phase, derived from phase records and status.
//!
//! The phase is never stored. It is recomputed from which phase records
//! exist plus the coarse status, so it cannot drift out of sync with them.

use crate::domain::models::{
    DiagnosticRecord, Intervention, InterventionStatus, PlanningRecord, QualityControlRecord,
    WorkflowPhase,
};

/// Derive the workflow phase. The first matching rule wins:
///
/// 1. no diagnostic record: `Diagnostic`
/// 2. no planning record, or parts not available: `Planning`
/// 3. status `InProgress` or `Paused`: `Execution`
/// 4. quality-control record present and status not `Done`: `QualityControl`
/// 5. status `Done`: `Complete`
/// 6. otherwise `Unknown`
///
/// Rule 2 holds even when the status already says `InProgress`; an
/// intervention whose parts are unavailable stays in `Planning`.
pub fn derive_phase(
    intervention: &Intervention,
    diagnostic: Option<&DiagnosticRecord>,
    planning: Option<&PlanningRecord>,
    quality_control: Option<&QualityControlRecord>,
) -> WorkflowPhase {
    let status = intervention.status;

    if diagnostic.is_none() {
        return WorkflowPhase::Diagnostic;
    }

    if !planning.is_some_and(|p| p.parts_available) {
        return WorkflowPhase::Planning;
    }

    if matches!(status, InterventionStatus::InProgress | InterventionStatus::Paused) {
        return WorkflowPhase::Execution;
    }

    if quality_control.is_some() && status != InterventionStatus::Done {
        return WorkflowPhase::QualityControl;
    }

    if status == InterventionStatus::Done {
        return WorkflowPhase::Complete;
    }

    WorkflowPhase::Unknown
}
