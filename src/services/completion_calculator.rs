//! Completion percentage of an intervention.

use crate::domain::models::{
    DiagnosticRecord, Intervention, InterventionStatus, PlanningRecord, QualityControlRecord,
};

/// Points awarded for each phase boundary crossed
pub const PHASE_WEIGHT: u8 = 25;

/// Coarse completion percentage in `0..=100`.
///
/// Four disjoint contributions of 25 points each: a diagnostic record exists,
/// planning reports parts available, a quality-control record exists, and
/// the status is `Done`. There is no partial credit within a phase.
pub fn calculate_completion(
    intervention: &Intervention,
    diagnostic: Option<&DiagnosticRecord>,
    planning: Option<&PlanningRecord>,
    quality_control: Option<&QualityControlRecord>,
) -> u8 {
    let reached = [
        diagnostic.is_some(),
        planning.is_some_and(|p| p.parts_available),
        quality_control.is_some(),
        intervention.status == InterventionStatus::Done,
    ];

    reached
        .iter()
        .filter(|&&crossed| crossed)
        .fold(0u8, |total, _| total + PHASE_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_done_is_zero() {
        let intervention = Intervention::new(1, "Boiler check");
        assert_eq!(calculate_completion(&intervention, None, None, None), 0);
    }

    #[test]
    fn test_planning_without_parts_earns_nothing() {
        let intervention = Intervention::new(1, "Boiler check");
        let diag = DiagnosticRecord::default();
        let plan = PlanningRecord::default();
        assert_eq!(calculate_completion(&intervention, Some(&diag), Some(&plan), None), 25);
    }

    #[test]
    fn test_everything_done_is_hundred() {
        let intervention =
            Intervention::new(1, "Boiler check").with_status(InterventionStatus::Done);
        let diag = DiagnosticRecord::default();
        let plan = PlanningRecord {
            parts_available: true,
            ..Default::default()
        };
        let qc = QualityControlRecord::default();
        assert_eq!(
            calculate_completion(&intervention, Some(&diag), Some(&plan), Some(&qc)),
            100
        );
    }

    #[test]
    fn test_done_status_alone_counts() {
        let intervention =
            Intervention::new(1, "Boiler check").with_status(InterventionStatus::Done);
        assert_eq!(calculate_completion(&intervention, None, None, None), 25);
    }
}
