//! Read model returned to forms and detail views.

use serde::{Deserialize, Serialize};

use super::intervention::{Intervention, InterventionStatus};
use super::phase::WorkflowPhase;
use super::work_item::{SparePart, WorkItem};

/// Recommended operator actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NextActionKind {
    /// Fill in the diagnostic form
    StartDiagnostic,
    /// Revise planning, usually once parts arrive
    UpdatePlanning,
    /// Move to IN_PROGRESS
    StartWork,
    /// Fill in the quality-control form
    QualityControl,
    /// Move to PAUSED
    PauseWork,
    /// Move back to IN_PROGRESS
    ResumeWork,
}

impl NextActionKind {
    /// Wire value of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartDiagnostic => "START_DIAGNOSTIC",
            Self::UpdatePlanning => "UPDATE_PLANNING",
            Self::StartWork => "START_WORK",
            Self::QualityControl => "QUALITY_CONTROL",
            Self::PauseWork => "PAUSE_WORK",
            Self::ResumeWork => "RESUME_WORK",
        }
    }

    /// Short button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartDiagnostic => "Start diagnostic",
            Self::UpdatePlanning => "Update planning",
            Self::StartWork => "Start work",
            Self::QualityControl => "Quality control",
            Self::PauseWork => "Pause work",
            Self::ResumeWork => "Resume work",
        }
    }

    /// One-sentence explanation for the operator.
    pub fn description(&self) -> &'static str {
        match self {
            Self::StartDiagnostic => "Inspect the equipment and record the required work and parts.",
            Self::UpdatePlanning => "Confirm duration, assigned team and spare-part availability.",
            Self::StartWork => "All parts are available; begin the intervention on site.",
            Self::QualityControl => "Run the post-intervention tests and record the evaluation.",
            Self::PauseWork => "Suspend the intervention until work can continue.",
            Self::ResumeWork => "Continue the paused intervention.",
        }
    }

    /// Status change this action asks for, if it is a status change at all.
    pub fn target_status(&self) -> Option<InterventionStatus> {
        match self {
            Self::StartWork | Self::ResumeWork => Some(InterventionStatus::InProgress),
            Self::PauseWork => Some(InterventionStatus::Paused),
            Self::StartDiagnostic | Self::UpdatePlanning | Self::QualityControl => None,
        }
    }
}

/// A recommended next step shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    /// Which action this is
    pub action: NextActionKind,
    /// Short button label
    pub label: String,
    /// One-sentence explanation
    pub description: String,
    /// Status the action moves to, for status-changing actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_status: Option<InterventionStatus>,
}

impl From<NextActionKind> for NextAction {
    fn from(kind: NextActionKind) -> Self {
        Self {
            action: kind,
            label: kind.label().to_string(),
            description: kind.description().to_string(),
            target_status: kind.target_status(),
        }
    }
}

/// An intervention with its derived workflow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedIntervention {
    /// The intervention itself, flattened into the output
    #[serde(flatten)]
    pub intervention: Intervention,
    /// Derived workflow phase
    pub phase: WorkflowPhase,
    /// Coarse progress, a multiple of 25
    pub completion_percentage: u8,
    /// Recommended actions, most important first
    pub next_actions: Vec<NextAction>,
    /// Work items parsed from the description
    pub work_items: Vec<WorkItem>,
    /// Spare parts parsed from the description
    pub spare_parts: Vec<SparePart>,
    /// Legal targets from the current status, in table order
    pub allowed_transitions: Vec<InterventionStatus>,
    /// Sum of the work items' estimates
    pub total_estimated_minutes: u32,
    /// Status is DONE or CANCELLED
    pub is_terminal: bool,
}
