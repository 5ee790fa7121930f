//! Intervention repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{InterventionSnapshot, InterventionStatus, PhaseSubmission};

/// Repository interface for the persistence collaborator.
///
/// The workflow engine never stores anything itself; it reads snapshots and
/// forwards accepted changes through this trait.
#[async_trait]
pub trait InterventionRepository: Send + Sync {
    /// Get an intervention with whatever phase records exist for it.
    async fn get_snapshot(&self, id: i64) -> DomainResult<Option<InterventionSnapshot>>;

    /// Persist a new status for an intervention.
    async fn update_status(&self, id: i64, status: InterventionStatus) -> DomainResult<()>;

    /// Persist an accepted phase submission, replacing any earlier record for that phase.
    async fn save_phase(&self, id: i64, submission: &PhaseSubmission) -> DomainResult<()>;
}
