//! Intervention service: status changes and phase submissions.
//!
//! Both request flows are checked here before anything is forwarded to the
//! persistence collaborator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{EnrichedIntervention, InterventionStatus, PhaseSubmission};
use crate::domain::ports::InterventionRepository;
use crate::services::phase_validator::{validate_submission, ValidationReport};
use crate::services::workflow_facade::enrich_snapshot;

/// A request to move an intervention to a new status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    /// Intervention to change
    pub intervention_id: i64,
    /// Status the caller believes the intervention is in
    pub current_status: InterventionStatus,
    /// Requested status
    pub target_status: InterventionStatus,
}

/// Guards status changes and phase submissions before they reach the repository.
pub struct InterventionService<R: InterventionRepository> {
    repository: Arc<R>,
}

impl<R: InterventionRepository> InterventionService<R> {
    /// Service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get the enriched read model for an intervention.
    pub async fn enriched(&self, id: i64) -> DomainResult<EnrichedIntervention> {
        let snapshot = self
            .repository
            .get_snapshot(id)
            .await?
            .ok_or(DomainError::InterventionNotFound(id))?;

        Ok(enrich_snapshot(&snapshot))
    }

    /// Apply a status change if the transition table allows it.
    ///
    /// The request's `current_status` must match the stored status; a stale
    /// request is rejected as an illegal transition from the stored status.
    pub async fn change_status(
        &self,
        request: StatusChangeRequest,
    ) -> DomainResult<InterventionStatus> {
        let id = request.intervention_id;
        let snapshot = self
            .repository
            .get_snapshot(id)
            .await?
            .ok_or(DomainError::InterventionNotFound(id))?;
        let stored = snapshot.intervention.status;

        if stored != request.current_status || !stored.can_transition_to(request.target_status) {
            warn!(
                intervention_id = id,
                stored = %stored,
                requested_from = %request.current_status,
                to = %request.target_status,
                "illegal status transition rejected"
            );
            return Err(DomainError::IllegalTransition {
                from: stored.as_str().to_string(),
                to: request.target_status.as_str().to_string(),
            });
        }

        self.repository
            .update_status(id, request.target_status)
            .await?;

        info!(
            intervention_id = id,
            from = %stored,
            to = %request.target_status,
            "intervention status changed"
        );

        Ok(request.target_status)
    }

    /// Validate a phase submission and forward it for persistence when valid.
    ///
    /// Nothing is persisted when validation fails.
    pub async fn submit_phase(
        &self,
        id: i64,
        submission: PhaseSubmission,
    ) -> DomainResult<ValidationReport> {
        if self.repository.get_snapshot(id).await?.is_none() {
            return Err(DomainError::InterventionNotFound(id));
        }

        let report = validate_submission(&submission);
        if !report.is_valid {
            return Err(DomainError::InvalidPhasePayload {
                phase: submission.kind().to_string(),
                errors: report.errors,
            });
        }

        self.repository.save_phase(id, &submission).await?;

        info!(
            intervention_id = id,
            phase = %submission.kind(),
            "phase submission saved"
        );

        Ok(report)
    }
}
