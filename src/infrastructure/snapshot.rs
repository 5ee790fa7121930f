//! Loading of snapshot and payload documents exported by the persistence layer.
//!
//! Files ending in `.yaml`/`.yml` are read as YAML, everything else as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::domain::models::{InterventionSnapshot, PhaseKind, PhaseSubmission};

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Read and deserialize a JSON or YAML document.
pub fn load_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from {}", path.display()))
    }
}

/// Load an intervention snapshot.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<InterventionSnapshot> {
    load_document(path)
}

/// Load the raw payload of a phase submission.
pub fn load_submission(kind: PhaseKind, path: impl AsRef<Path>) -> Result<PhaseSubmission> {
    let path = path.as_ref();
    let payload: serde_json::Value = load_document(path)?;
    PhaseSubmission::from_json(kind, payload)
        .with_context(|| format!("Invalid {kind} payload in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::InterventionStatus;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{
                "intervention": {"id": 3, "status": "PAUSED", "createdAt": "2024-05-02T09:00:00Z"},
                "planning": {"partsAvailable": true, "completed": true}
            }"#,
        )
        .unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.intervention.status, InterventionStatus::Paused);
        assert!(snapshot.planning.unwrap().parts_available);
        assert!(snapshot.diagnostic.is_none());
    }

    #[test]
    fn test_load_yaml_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.yml");
        fs::write(
            &path,
            "intervention:\n  id: 4\n  status: DONE\n  createdAt: 2024-05-02T09:00:00Z\ndiagnostic:\n  completed: true\n",
        )
        .unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.intervention.id, 4);
        assert!(snapshot.diagnostic.is_some());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{"intervention": {"id": 3, "status": "ON_HOLD", "createdAt": "2024-05-02T09:00:00Z"}}"#,
        )
        .unwrap();

        assert!(load_snapshot(&path).is_err());
    }

    #[test]
    fn test_load_submission() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("qc.json");
        fs::write(&path, r#"{"overallEvaluation": "COMPLIANT"}"#).unwrap();

        let submission = load_submission(PhaseKind::QualityControl, &path).unwrap();
        assert_eq!(submission.kind(), PhaseKind::QualityControl);
    }
}
