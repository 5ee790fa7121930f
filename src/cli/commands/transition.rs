//! `maintflow transition`: legality of a single status change.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::display::{action_failure, action_success, output, CommandOutput};
use crate::domain::models::{is_legal_transition_str, InterventionStatus};
use crate::infrastructure::snapshot::load_snapshot;

/// Arguments for `maintflow transition`
#[derive(Args, Debug)]
pub struct TransitionArgs {
    /// Current status (omit when --snapshot is given)
    pub from: Option<String>,

    /// Requested status
    #[arg(short, long)]
    pub to: String,

    /// Take the current status from an intervention snapshot
    #[arg(short, long, conflicts_with = "from")]
    pub snapshot: Option<PathBuf>,
}

/// Verdict on one status change
#[derive(Debug, Serialize)]
pub struct TransitionOutput {
    /// Set when the current status came from a snapshot
    pub intervention_id: Option<i64>,
    /// Current status as given
    pub from: String,
    /// Requested status as given
    pub to: String,
    /// Whether the transition table allows the change
    pub legal: bool,
    /// One-line explanation of the verdict
    pub message: String,
}

impl CommandOutput for TransitionOutput {
    fn to_human(&self) -> String {
        if self.legal {
            action_success(&self.message)
        } else {
            action_failure(&self.message)
        }
    }
}

/// Decide a transition between two raw status strings.
pub fn decide(intervention_id: Option<i64>, from: &str, to: &str) -> TransitionOutput {
    let legal = is_legal_transition_str(from, to);

    let message = if legal {
        format!("{from} -> {to} is allowed")
    } else if let Err(err) = from.parse::<InterventionStatus>() {
        err.to_string()
    } else if let Err(err) = to.parse::<InterventionStatus>() {
        err.to_string()
    } else {
        format!("{from} -> {to} is not allowed")
    };

    TransitionOutput {
        intervention_id,
        from: from.to_string(),
        to: to.to_string(),
        legal,
        message,
    }
}

/// Check a transition. Returns `Ok(false)` when it is illegal.
pub fn execute(args: TransitionArgs, json_mode: bool) -> Result<bool> {
    let (intervention_id, from) = match (args.snapshot, args.from) {
        (Some(path), _) => {
            let snapshot = load_snapshot(&path)?;
            (
                Some(snapshot.intervention.id),
                snapshot.intervention.status.as_str().to_string(),
            )
        }
        (None, Some(from)) => (None, from),
        (None, None) => bail!("Provide the current status or --snapshot <file>"),
    };

    let out = decide(intervention_id, &from, &args.to);
    output(&out, json_mode);
    Ok(out.legal)
}
