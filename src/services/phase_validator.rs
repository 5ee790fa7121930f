//! Structural checks on phase submissions before they are persisted.
//!
//! Only the diagnostic form has codified rules. Planning and quality-control
//! submissions are accepted as long as they carry something.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::models::{
    DiagnosticPayload, PhaseKind, PhaseSubmission, PlanningPayload, QualityControlPayload,
};

/// Minimum length of a required-work description, after trimming
pub const MIN_WORK_DESCRIPTION_LEN: usize = 5;

/// Outcome of validating a phase submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// No errors were found
    pub is_valid: bool,
    /// One message per problem, in payload order
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(phase: PhaseKind, errors: Vec<String>) -> Self {
        if !errors.is_empty() {
            warn!(phase = %phase, errors = errors.len(), "phase payload rejected");
        }
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// At least one required-work entry, each described in 5 or more characters.
pub fn validate_diagnostic(payload: &DiagnosticPayload) -> ValidationReport {
    let mut errors = Vec::new();

    if payload.required_work.is_empty() {
        errors.push("At least one required work entry must be provided".to_string());
    }

    for (index, entry) in payload.required_work.iter().enumerate() {
        if entry.description.trim().chars().count() < MIN_WORK_DESCRIPTION_LEN {
            errors.push(format!(
                "Required work #{}: description must be at least {} characters",
                index + 1,
                MIN_WORK_DESCRIPTION_LEN
            ));
        }
    }

    ValidationReport::from_errors(PhaseKind::Diagnostic, errors)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Accepts any planning payload that sets at least one field.
pub fn validate_planning(payload: &PlanningPayload) -> ValidationReport {
    let empty = payload.estimated_duration_minutes.is_none()
        && is_blank(payload.execution_capacity.as_deref())
        && payload.parts_available.is_none()
        && payload.planned_start.is_none();

    let errors = if empty {
        vec!["Planning payload is empty".to_string()]
    } else {
        vec![]
    };
    ValidationReport::from_errors(PhaseKind::Planning, errors)
}

/// Accepts any quality-control payload that sets at least one field.
pub fn validate_quality_control(payload: &QualityControlPayload) -> ValidationReport {
    let empty = payload.test_results.is_empty()
        && payload.overall_evaluation.is_none()
        && is_blank(payload.comments.as_deref());

    let errors = if empty {
        vec!["Quality control payload is empty".to_string()]
    } else {
        vec![]
    };
    ValidationReport::from_errors(PhaseKind::QualityControl, errors)
}

/// Dispatch to the validator for the submitted phase.
pub fn validate_submission(submission: &PhaseSubmission) -> ValidationReport {
    match submission {
        PhaseSubmission::Diagnostic(payload) => validate_diagnostic(payload),
        PhaseSubmission::Planning(payload) => validate_planning(payload),
        PhaseSubmission::QualityControl(payload) => validate_quality_control(payload),
    }
}
