//! Recommended next actions for the operator.

use crate::domain::models::{
    DiagnosticRecord, Intervention, InterventionStatus, NextAction, NextActionKind, PlanningRecord,
};

/// Recommended next actions for an intervention, most important first.
pub fn next_actions(
    intervention: &Intervention,
    diagnostic: Option<&DiagnosticRecord>,
    planning: Option<&PlanningRecord>,
) -> Vec<NextAction> {
    let kinds: Vec<NextActionKind> = match intervention.status {
        InterventionStatus::Planned if diagnostic.is_none() => {
            vec![NextActionKind::StartDiagnostic]
        }
        InterventionStatus::AwaitingParts => {
            let mut kinds = vec![NextActionKind::UpdatePlanning];
            if planning.is_some_and(|p| p.parts_available) {
                kinds.push(NextActionKind::StartWork);
            }
            kinds
        }
        InterventionStatus::InProgress => {
            vec![NextActionKind::QualityControl, NextActionKind::PauseWork]
        }
        InterventionStatus::Paused => vec![NextActionKind::ResumeWork],
        _ => vec![],
    };

    kinds.into_iter().map(NextAction::from).collect()
}
