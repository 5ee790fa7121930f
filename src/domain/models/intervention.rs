//! Intervention domain model.
//!
//! An intervention is a single maintenance work order against one piece of
//! equipment. Its status moves through a fixed transition table; everything
//! else about its progress is derived from the phase records attached to it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Persisted lifecycle status of an intervention.
///
/// The wire values are the exact strings stored by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterventionStatus {
    /// Created and scheduled, nothing started yet
    #[default]
    Planned,
    /// Waiting on spare parts before work can begin
    AwaitingParts,
    /// Technicians are working on the equipment
    InProgress,
    /// Work interrupted, expected to resume
    Paused,
    /// Work finished
    Done,
    /// Abandoned before completion
    Cancelled,
    /// Work attempted and failed; may be retried
    Failed,
}

impl InterventionStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Planned,
        Self::AwaitingParts,
        Self::InProgress,
        Self::Paused,
        Self::Done,
        Self::Cancelled,
        Self::Failed,
    ];

    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "PLANNED",
            Self::AwaitingParts => "AWAITING_PARTS",
            Self::InProgress => "IN_PROGRESS",
            Self::Paused => "PAUSED",
            Self::Done => "DONE",
            Self::Cancelled => "CANCELLED",
            Self::Failed => "FAILED",
        }
    }

    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    /// Valid transitions from this status.
    pub fn valid_transitions(&self) -> &'static [InterventionStatus] {
        match self {
            Self::Planned => &[Self::AwaitingParts, Self::Cancelled],
            Self::AwaitingParts => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::Paused, Self::Done, Self::Failed],
            Self::Paused => &[Self::InProgress, Self::Cancelled],
            Self::Done => &[],
            Self::Cancelled => &[],
            Self::Failed => &[Self::InProgress], // Can recover
        }
    }

    /// Whether the table allows a move to `new_status`.
    pub fn can_transition_to(&self, new_status: Self) -> bool {
        self.valid_transitions().contains(&new_status)
    }
}

impl fmt::Display for InterventionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterventionStatus {
    type Err = DomainError;

    /// Parse a wire value. Matching is exact: the persistence layer stores
    /// these strings verbatim, so anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}

/// Whether moving an intervention from `from` to `to` is allowed.
pub fn is_legal_transition(from: InterventionStatus, to: InterventionStatus) -> bool {
    from.can_transition_to(to)
}

/// String-level variant of [`is_legal_transition`].
///
/// Unknown status values never match anything, so they yield `false`.
pub fn is_legal_transition_str(from: &str, to: &str) -> bool {
    match (from.parse::<InterventionStatus>(), to.parse::<InterventionStatus>()) {
        (Ok(from), Ok(to)) => is_legal_transition(from, to),
        _ => false,
    }
}

/// A maintenance intervention as supplied by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    /// Identifier assigned by the persistence layer
    pub id: i64,
    /// Current lifecycle status
    pub status: InterventionStatus,
    /// Flagged for priority handling
    #[serde(default)]
    pub urgent: bool,
    /// Free text; may embed REQUIRED WORK / SPARE PARTS / OBSERVATIONS sections
    #[serde(default)]
    pub description: String,
    /// When the work is planned to happen
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    /// When the intervention was opened
    pub created_at: DateTime<Utc>,
}

impl Intervention {
    /// Create a planned intervention with the given description.
    pub fn new(id: i64, description: impl Into<String>) -> Self {
        Self {
            id,
            status: InterventionStatus::Planned,
            urgent: false,
            description: description.into(),
            scheduled_date: None,
            created_at: Utc::now(),
        }
    }

    /// Set the status, bypassing the transition table.
    pub fn with_status(mut self, status: InterventionStatus) -> Self {
        self.status = status;
        self
    }

    /// Check if this intervention is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Check if this intervention can transition to the given status.
    pub fn can_transition_to(&self, new_status: InterventionStatus) -> bool {
        self.status.can_transition_to(new_status)
    }

    /// Transition to a new status.
    pub fn transition_to(&mut self, new_status: InterventionStatus) -> Result<(), DomainError> {
        if !self.can_transition_to(new_status) {
            return Err(DomainError::IllegalTransition {
                from: self.status.as_str().to_string(),
                to: new_status.as_str().to_string(),
            });
        }
        self.status = new_status;
        Ok(())
    }
}
