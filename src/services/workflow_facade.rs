//! Composition of the workflow rules into one read model.

use tracing::debug;

use crate::domain::models::{
    is_legal_transition, DiagnosticRecord, EnrichedIntervention, Intervention,
    InterventionSnapshot, InterventionStatus, PlanningRecord, QualityControlRecord,
};
use crate::services::completion_calculator::calculate_completion;
use crate::services::description_parser::{parse_spare_parts, parse_work_items};
use crate::services::next_action_advisor::next_actions;
use crate::services::phase_deriver::derive_phase;

/// Enrich an intervention with its derived phase, progress, recommended
/// actions and parsed description.
///
/// Pure: identical inputs always give identical output. Nothing is cached.
pub fn enrich(
    intervention: &Intervention,
    diagnostic: Option<&DiagnosticRecord>,
    planning: Option<&PlanningRecord>,
    quality_control: Option<&QualityControlRecord>,
) -> EnrichedIntervention {
    let phase = derive_phase(intervention, diagnostic, planning, quality_control);
    let completion_percentage =
        calculate_completion(intervention, diagnostic, planning, quality_control);
    let work_items = parse_work_items(&intervention.description);
    let total_estimated_minutes = work_items
        .iter()
        .fold(0u32, |total, item| total.saturating_add(item.estimated_minutes));

    debug!(
        intervention_id = intervention.id,
        status = %intervention.status,
        phase = %phase,
        completion = completion_percentage,
        "enriched intervention"
    );

    EnrichedIntervention {
        intervention: intervention.clone(),
        phase,
        completion_percentage,
        next_actions: next_actions(intervention, diagnostic, planning),
        spare_parts: parse_spare_parts(&intervention.description),
        work_items,
        allowed_transitions: intervention.status.valid_transitions().to_vec(),
        total_estimated_minutes,
        is_terminal: intervention.is_terminal(),
    }
}

/// [`enrich`] over a snapshot.
pub fn enrich_snapshot(snapshot: &InterventionSnapshot) -> EnrichedIntervention {
    enrich(
        &snapshot.intervention,
        snapshot.diagnostic.as_ref(),
        snapshot.planning.as_ref(),
        snapshot.quality_control.as_ref(),
    )
}

/// Whether the intervention may move to `target`.
pub fn can_transition(intervention: &Intervention, target: InterventionStatus) -> bool {
    is_legal_transition(intervention.status, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{NextActionKind, WorkflowPhase};

    #[test]
    fn test_in_progress_scenario() {
        let intervention = Intervention::new(
            11,
            "REQUIRED WORK:\n- Replace bearing (HIGH, 45min)\nSPARE PARTS:\n- Bearing x2 (SKF)",
        )
        .with_status(InterventionStatus::InProgress);
        let diag = DiagnosticRecord::default();
        let plan = PlanningRecord {
            parts_available: true,
            ..Default::default()
        };

        let enriched = enrich(&intervention, Some(&diag), Some(&plan), None);

        assert_eq!(enriched.phase, WorkflowPhase::Execution);
        assert_eq!(enriched.completion_percentage, 50);
        let actions: Vec<_> = enriched.next_actions.iter().map(|a| a.action).collect();
        assert_eq!(
            actions,
            vec![NextActionKind::QualityControl, NextActionKind::PauseWork]
        );
        assert_eq!(enriched.work_items.len(), 1);
        assert_eq!(enriched.spare_parts.len(), 1);
        assert_eq!(enriched.total_estimated_minutes, 45);
        assert_eq!(
            enriched.allowed_transitions,
            vec![
                InterventionStatus::Paused,
                InterventionStatus::Done,
                InterventionStatus::Failed
            ]
        );
        assert!(!enriched.is_terminal);
    }

    #[test]
    fn test_enrich_is_idempotent() {
        let snapshot = InterventionSnapshot::new(
            Intervention::new(5, "Leaking valve").with_status(InterventionStatus::Planned),
        );
        assert_eq!(enrich_snapshot(&snapshot), enrich_snapshot(&snapshot));
    }

    #[test]
    fn test_can_transition_delegates_to_table() {
        let intervention = Intervention::new(5, "Leaking valve");
        assert!(can_transition(&intervention, InterventionStatus::AwaitingParts));
        assert!(!can_transition(&intervention, InterventionStatus::InProgress));
        assert!(!can_transition(&intervention, InterventionStatus::Planned));
    }

    #[test]
    fn test_serialized_read_model_is_flat_camel_case() {
        let snapshot = InterventionSnapshot::new(Intervention::new(5, ""));
        let value = serde_json::to_value(enrich_snapshot(&snapshot)).unwrap();
        assert_eq!(value["id"], 5);
        assert_eq!(value["status"], "PLANNED");
        assert_eq!(value["phase"], "DIAGNOSTIC");
        assert_eq!(value["completionPercentage"], 0);
        assert_eq!(value["nextActions"][0]["action"], "START_DIAGNOSTIC");
        assert_eq!(value["workItems"].as_array().unwrap().len(), 2);
        assert_eq!(value["totalEstimatedMinutes"], 45);
    }
}
