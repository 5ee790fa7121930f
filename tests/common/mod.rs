//! Common test utilities for integration tests
//!
//! Provides shared fixtures and an in-memory stand-in for the persistence
//! collaborator.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use maintflow::domain::models::{
    DiagnosticRecord, Intervention, InterventionSnapshot, InterventionStatus, PhaseSubmission,
    PlanningRecord, QualityControlRecord, RequiredWorkEntry,
};
use maintflow::{DomainError, DomainResult, InterventionRepository};

/// Fixed timestamp so fixtures compare equal across calls
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
}

pub const CONVEYOR_DESCRIPTION: &str = "Bearing noise on conveyor 3.

REQUIRED WORK:
- Replace bearing (HIGH, 45min)
- Realign drive belt

SPARE PARTS:
- Bearing 6204 x2 (SKF)
- Drive belt

OBSERVATIONS:
Vibration above threshold since last week.";

pub fn intervention(id: i64, status: InterventionStatus) -> Intervention {
    Intervention {
        id,
        status,
        urgent: false,
        description: CONVEYOR_DESCRIPTION.to_string(),
        scheduled_date: None,
        created_at: fixed_time(),
    }
}

pub fn diagnostic() -> DiagnosticRecord {
    DiagnosticRecord {
        completed: true,
        created_at: Some(fixed_time()),
        validated_at: Some(fixed_time()),
        required_work: vec![RequiredWorkEntry::new("Replace bearing")],
        ..Default::default()
    }
}

pub fn planning(parts_available: bool) -> PlanningRecord {
    PlanningRecord {
        completed: true,
        created_at: Some(fixed_time()),
        parts_available,
        estimated_duration_minutes: Some(75),
        ..Default::default()
    }
}

pub fn quality_control() -> QualityControlRecord {
    QualityControlRecord {
        completed: true,
        created_at: Some(fixed_time()),
        ..Default::default()
    }
}

/// In-memory persistence collaborator.
#[derive(Default)]
pub struct InMemoryInterventionRepository {
    snapshots: Mutex<HashMap<i64, InterventionSnapshot>>,
    saved_phases: Mutex<Vec<(i64, PhaseSubmission)>>,
}

impl InMemoryInterventionRepository {
    pub fn with_snapshot(snapshot: InterventionSnapshot) -> Self {
        let repo = Self::default();
        repo.insert(snapshot);
        repo
    }

    pub fn insert(&self, snapshot: InterventionSnapshot) {
        self.snapshots
            .lock()
            .unwrap()
            .insert(snapshot.intervention.id, snapshot);
    }

    pub fn snapshot(&self, id: i64) -> Option<InterventionSnapshot> {
        self.snapshots.lock().unwrap().get(&id).cloned()
    }

    pub fn saved_phases(&self) -> Vec<(i64, PhaseSubmission)> {
        self.saved_phases.lock().unwrap().clone()
    }
}

#[async_trait]
impl InterventionRepository for InMemoryInterventionRepository {
    async fn get_snapshot(&self, id: i64) -> DomainResult<Option<InterventionSnapshot>> {
        Ok(self.snapshot(id))
    }

    async fn update_status(&self, id: i64, status: InterventionStatus) -> DomainResult<()> {
        let mut snapshots = self.snapshots.lock().unwrap();
        let snapshot = snapshots
            .get_mut(&id)
            .ok_or(DomainError::InterventionNotFound(id))?;
        snapshot.intervention.status = status;
        Ok(())
    }

    async fn save_phase(&self, id: i64, submission: &PhaseSubmission) -> DomainResult<()> {
        {
            let mut snapshots = self.snapshots.lock().unwrap();
            let snapshot = snapshots
                .get_mut(&id)
                .ok_or(DomainError::InterventionNotFound(id))?;
            snapshot.apply_submission(submission.clone(), fixed_time());
        }
        self.saved_phases
            .lock()
            .unwrap()
            .push((id, submission.clone()));
        Ok(())
    }
}
