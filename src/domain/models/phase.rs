//! Phase records and phase submission payloads.
//!
//! An intervention has at most one record per phase. A record is created
//! when the corresponding form is submitted and is only ever replaced by a
//! later submission for the same phase.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::models::work_item::WorkItemPriority;

/// Coarse stage of work, derived from the phase records and the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowPhase {
    /// Findings not recorded yet
    Diagnostic,
    /// Diagnosed; planning missing or parts unavailable
    Planning,
    /// Work under way or paused
    Execution,
    /// Inspected but not closed
    QualityControl,
    /// Status is DONE
    Complete,
    /// No rule matched
    Unknown,
}

impl WorkflowPhase {
    /// Wire value of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diagnostic => "DIAGNOSTIC",
            Self::Planning => "PLANNING",
            Self::Execution => "EXECUTION",
            Self::QualityControl => "QUALITY_CONTROL",
            Self::Complete => "COMPLETE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three phases that accept form submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Diagnostic form
    Diagnostic,
    /// Planning form
    Planning,
    /// Quality-control form
    QualityControl,
}

impl PhaseKind {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Diagnostic => "diagnostic",
            Self::Planning => "planning",
            Self::QualityControl => "quality_control",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhaseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "diagnostic" => Ok(Self::Diagnostic),
            "planning" => Ok(Self::Planning),
            "quality_control" | "qualitycontrol" | "qc" => Ok(Self::QualityControl),
            _ => Err(DomainError::UnknownPhaseKind(s.to_string())),
        }
    }
}

/// One required-work entry captured by the diagnostic form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredWorkEntry {
    /// What needs doing
    pub description: String,
    /// Priority when the technician gave one
    #[serde(default)]
    pub priority: Option<WorkItemPriority>,
    /// Estimate when the technician gave one
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
}

impl RequiredWorkEntry {
    /// Entry with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }
}

/// One spare-part entry captured by the diagnostic form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePartEntry {
    /// Part name or reference
    pub name: String,
    /// Units needed
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Preferred supplier
    #[serde(default)]
    pub supplier: Option<String>,
}

const fn default_quantity() -> u32 {
    1
}

/// Overall verdict of a quality-control inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Evaluation {
    /// Passed
    Compliant,
    /// Failed
    NonCompliant,
    /// Passed with remarks
    CompliantWithReservations,
}

/// A single test performed during quality control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// What was tested
    pub name: String,
    /// Outcome
    pub passed: bool,
    /// Free-text remarks
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload of a diagnostic submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticPayload {
    /// Work the technician found necessary
    #[serde(default)]
    pub required_work: Vec<RequiredWorkEntry>,
    /// Parts the work needs
    #[serde(default)]
    pub spare_parts: Vec<SparePartEntry>,
    /// Free-text findings
    #[serde(default)]
    pub observations: Option<String>,
}

/// Payload of a planning submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningPayload {
    /// Planned duration
    #[serde(default)]
    pub estimated_duration_minutes: Option<u32>,
    /// Team or technicians assigned to the work
    #[serde(default)]
    pub execution_capacity: Option<String>,
    /// `None` when the form left the field out; an explicit `false` is a
    /// statement that parts are missing
    #[serde(default)]
    pub parts_available: Option<bool>,
    /// Planned start of the work
    #[serde(default)]
    pub planned_start: Option<DateTime<Utc>>,
}

/// Payload of a quality-control submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityControlPayload {
    /// Individual test outcomes
    #[serde(default)]
    pub test_results: Vec<TestResult>,
    /// Overall verdict
    #[serde(default)]
    pub overall_evaluation: Option<Evaluation>,
    /// Free-text remarks
    #[serde(default)]
    pub comments: Option<String>,
}

/// A phase form submission, tagged by phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "payload", rename_all = "snake_case")]
pub enum PhaseSubmission {
    /// Diagnostic form submission
    Diagnostic(DiagnosticPayload),
    /// Planning form submission
    Planning(PlanningPayload),
    /// Quality-control form submission
    QualityControl(QualityControlPayload),
}

impl PhaseSubmission {
    /// Phase this submission belongs to.
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Diagnostic(_) => PhaseKind::Diagnostic,
            Self::Planning(_) => PhaseKind::Planning,
            Self::QualityControl(_) => PhaseKind::QualityControl,
        }
    }

    /// Decode a raw payload for the given phase.
    pub fn from_json(kind: PhaseKind, payload: serde_json::Value) -> Result<Self, DomainError> {
        Ok(match kind {
            PhaseKind::Diagnostic => Self::Diagnostic(serde_json::from_value(payload)?),
            PhaseKind::Planning => Self::Planning(serde_json::from_value(payload)?),
            PhaseKind::QualityControl => Self::QualityControl(serde_json::from_value(payload)?),
        })
    }
}

/// Persisted diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    /// Form was submitted as complete
    #[serde(default)]
    pub completed: bool,
    /// First saved
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Accepted as complete
    #[serde(default)]
    pub validated_at: Option<DateTime<Utc>>,
    /// Work found necessary
    #[serde(default)]
    pub required_work: Vec<RequiredWorkEntry>,
    /// Parts the work needs
    #[serde(default)]
    pub spare_parts: Vec<SparePartEntry>,
    /// Free-text findings
    #[serde(default)]
    pub observations: Option<String>,
}

/// Persisted planning record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningRecord {
    /// Form was submitted as complete
    #[serde(default)]
    pub completed: bool,
    /// First saved
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Accepted as complete
    #[serde(default)]
    pub validated_at: Option<DateTime<Utc>>,
    /// Planned duration
    #[serde(default)]
    pub estimated_duration_minutes: Option<u32>,
    /// Team or technicians assigned
    #[serde(default)]
    pub execution_capacity: Option<String>,
    /// All required parts are on hand
    #[serde(default)]
    pub parts_available: bool,
    /// Planned start of the work
    #[serde(default)]
    pub planned_start: Option<DateTime<Utc>>,
}

/// Persisted quality-control record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityControlRecord {
    /// Form was submitted as complete
    #[serde(default)]
    pub completed: bool,
    /// First saved
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Accepted as complete
    #[serde(default)]
    pub validated_at: Option<DateTime<Utc>>,
    /// Individual test outcomes
    #[serde(default)]
    pub test_results: Vec<TestResult>,
    /// Overall verdict
    #[serde(default)]
    pub overall_evaluation: Option<Evaluation>,
    /// Free-text remarks
    #[serde(default)]
    pub comments: Option<String>,
}

impl DiagnosticRecord {
    /// Build the record the persistence layer stores for an accepted submission.
    pub fn from_payload(payload: DiagnosticPayload, completed: bool, now: DateTime<Utc>) -> Self {
        Self {
            completed,
            created_at: Some(now),
            validated_at: completed.then_some(now),
            required_work: payload.required_work,
            spare_parts: payload.spare_parts,
            observations: payload.observations,
        }
    }
}

impl PlanningRecord {
    /// Build the record stored for an accepted planning submission.
    pub fn from_payload(payload: PlanningPayload, completed: bool, now: DateTime<Utc>) -> Self {
        Self {
            completed,
            created_at: Some(now),
            validated_at: completed.then_some(now),
            estimated_duration_minutes: payload.estimated_duration_minutes,
            execution_capacity: payload.execution_capacity,
            parts_available: payload.parts_available.unwrap_or(false),
            planned_start: payload.planned_start,
        }
    }
}

impl QualityControlRecord {
    /// Build the record stored for an accepted quality-control submission.
    pub fn from_payload(payload: QualityControlPayload, completed: bool, now: DateTime<Utc>) -> Self {
        Self {
            completed,
            created_at: Some(now),
            validated_at: completed.then_some(now),
            test_results: payload.test_results,
            overall_evaluation: payload.overall_evaluation,
            comments: payload.comments,
        }
    }
}

/// An intervention together with whatever phase records exist for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionSnapshot {
    /// The intervention
    pub intervention: super::Intervention,
    /// Diagnostic record, if submitted
    #[serde(default)]
    pub diagnostic: Option<DiagnosticRecord>,
    /// Planning record, if submitted
    #[serde(default)]
    pub planning: Option<PlanningRecord>,
    /// Quality-control record, if submitted
    #[serde(default)]
    pub quality_control: Option<QualityControlRecord>,
}

impl InterventionSnapshot {
    /// Snapshot with no phase records.
    pub fn new(intervention: super::Intervention) -> Self {
        Self {
            intervention,
            diagnostic: None,
            planning: None,
            quality_control: None,
        }
    }

    /// Replace the record for the submitted phase.
    pub fn apply_submission(&mut self, submission: PhaseSubmission, now: DateTime<Utc>) {
        match submission {
            PhaseSubmission::Diagnostic(payload) => {
                self.diagnostic = Some(DiagnosticRecord::from_payload(payload, true, now));
            }
            PhaseSubmission::Planning(payload) => {
                self.planning = Some(PlanningRecord::from_payload(payload, true, now));
            }
            PhaseSubmission::QualityControl(payload) => {
                self.quality_control =
                    Some(QualityControlRecord::from_payload(payload, true, now));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Intervention;

    #[test]
    fn test_phase_kind_parsing() {
        assert_eq!("diagnostic".parse::<PhaseKind>().unwrap(), PhaseKind::Diagnostic);
        assert_eq!("Planning".parse::<PhaseKind>().unwrap(), PhaseKind::Planning);
        assert_eq!(
            "quality-control".parse::<PhaseKind>().unwrap(),
            PhaseKind::QualityControl
        );
        assert!(matches!(
            "execution".parse::<PhaseKind>(),
            Err(DomainError::UnknownPhaseKind(_))
        ));
    }

    #[test]
    fn test_submission_decodes_tagged_json() {
        let json = r#"{"phase":"planning","payload":{"partsAvailable":true,"estimatedDurationMinutes":90}}"#;
        let submission: PhaseSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.kind(), PhaseKind::Planning);
        match submission {
            PhaseSubmission::Planning(p) => {
                assert_eq!(p.parts_available, Some(true));
                assert_eq!(p.estimated_duration_minutes, Some(90));
            }
            _ => panic!("Expected planning submission"),
        }
    }

    #[test]
    fn test_submission_from_raw_payload() {
        let payload = serde_json::json!({
            "requiredWork": [{"description": "Check oil level"}],
            "spareParts": [{"name": "Oil filter"}]
        });
        let submission = PhaseSubmission::from_json(PhaseKind::Diagnostic, payload).unwrap();
        match submission {
            PhaseSubmission::Diagnostic(d) => {
                assert_eq!(d.required_work.len(), 1);
                assert_eq!(d.spare_parts[0].quantity, 1);
            }
            _ => panic!("Expected diagnostic submission"),
        }
    }

    #[test]
    fn test_apply_submission_overwrites_same_phase() {
        let now = Utc::now();
        let mut snapshot = InterventionSnapshot::new(Intervention::new(1, "Conveyor noise"));

        snapshot.apply_submission(
            PhaseSubmission::Planning(PlanningPayload {
                parts_available: Some(false),
                ..Default::default()
            }),
            now,
        );
        snapshot.apply_submission(
            PhaseSubmission::Planning(PlanningPayload {
                parts_available: Some(true),
                ..Default::default()
            }),
            now,
        );

        let planning = snapshot.planning.unwrap();
        assert!(planning.parts_available);
        assert!(planning.completed);
        assert_eq!(planning.validated_at, Some(now));
        assert!(snapshot.diagnostic.is_none());
    }
}
