//! `maintflow compose`: fold a diagnostic submission into description text.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::display::{output, CommandOutput};
use crate::domain::models::DiagnosticPayload;
use crate::infrastructure::snapshot::load_document;
use crate::services::compose_from_diagnostic;

/// Arguments for `maintflow compose`
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Diagnostic payload file (JSON or YAML)
    pub payload: PathBuf,

    /// Opening summary line of the description
    #[arg(short, long, default_value = "")]
    pub summary: String,
}

/// Composed description text
#[derive(Debug, Serialize)]
pub struct ComposeOutput {
    /// Section-marked description, ready for the description field
    pub description: String,
}

impl CommandOutput for ComposeOutput {
    fn to_human(&self) -> String {
        self.description.clone()
    }
}

/// Compose a description from a diagnostic payload file.
pub fn execute(args: ComposeArgs, json_mode: bool) -> Result<bool> {
    let payload: DiagnosticPayload = load_document(&args.payload)?;

    let out = ComposeOutput {
        description: compose_from_diagnostic(&args.summary, &payload),
    };
    output(&out, json_mode);
    Ok(true)
}
