//! `maintflow transitions`: the status transition table.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::display::{colorize_status, list_table, output, render_list, CommandOutput};
use crate::domain::models::InterventionStatus;

/// Arguments for `maintflow transitions`
#[derive(Args, Debug)]
pub struct TransitionsArgs {
    /// Only show transitions out of this status
    pub from: Option<String>,
}

/// Legal targets out of one status
#[derive(Debug, Serialize)]
pub struct TransitionRow {
    /// Source status
    pub from: InterventionStatus,
    /// Legal targets, in table order
    pub to: Vec<InterventionStatus>,
    /// No transitions leave this status
    pub terminal: bool,
}

/// The transition table, or one row of it
#[derive(Debug, Serialize)]
pub struct TransitionTableOutput {
    /// One row per source status
    pub transitions: Vec<TransitionRow>,
}

impl CommandOutput for TransitionTableOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["from", "allowed targets"]);
        for row in &self.transitions {
            let targets = if row.terminal {
                "(terminal)".to_string()
            } else {
                row.to
                    .iter()
                    .map(|s| colorize_status(s.as_str()).to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            table.add_row(vec![colorize_status(row.from.as_str()).to_string(), targets]);
        }
        render_list("status", &table, self.transitions.len())
    }
}

/// Print the transition table.
pub fn execute(args: TransitionsArgs, json_mode: bool) -> Result<bool> {
    let statuses = match args.from {
        Some(from) => vec![from.parse::<InterventionStatus>()?],
        None => InterventionStatus::ALL.to_vec(),
    };

    let out = TransitionTableOutput {
        transitions: statuses
            .into_iter()
            .map(|status| TransitionRow {
                from: status,
                to: status.valid_transitions().to_vec(),
                terminal: status.is_terminal(),
            })
            .collect(),
    };
    output(&out, json_mode);
    Ok(true)
}
