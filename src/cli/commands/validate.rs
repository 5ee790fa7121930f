//! `maintflow validate`: check a phase submission before it is saved.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::display::{action_failure, action_success, output, CommandOutput};
use crate::domain::models::PhaseKind;
use crate::infrastructure::snapshot::load_submission;
use crate::services::{validate_submission, ValidationReport};

/// Arguments for `maintflow validate`
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Phase: diagnostic, planning or quality_control
    pub phase: String,

    /// Payload file (JSON or YAML)
    pub payload: PathBuf,
}

/// Validation report for one payload
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Phase the payload was validated as
    pub phase: PhaseKind,
    /// Outcome and error messages
    #[serde(flatten)]
    pub report: ValidationReport,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        if self.report.is_valid {
            return action_success(&format!("{} payload is valid", self.phase));
        }

        let mut lines = vec![action_failure(&format!(
            "{} payload is invalid ({} error(s))",
            self.phase,
            self.report.errors.len()
        ))];
        for error in &self.report.errors {
            lines.push(format!("  - {error}"));
        }
        lines.join("\n")
    }
}

/// Validate a payload file. Returns `Ok(false)` when it is invalid.
pub fn execute(args: ValidateArgs, json_mode: bool) -> Result<bool> {
    let phase: PhaseKind = args.phase.parse()?;
    let submission = load_submission(phase, &args.payload)?;

    let out = ValidateOutput {
        phase,
        report: validate_submission(&submission),
    };
    output(&out, json_mode);
    Ok(out.report.is_valid)
}
