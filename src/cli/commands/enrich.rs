//! `maintflow enrich`: derived workflow state of one intervention.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::display::{
    colorize_phase, colorize_priority, colorize_status, list_table, minutes, output,
    progress_bar, render_list, section_header, timestamp, truncate_ellipsis, CommandOutput,
    DetailView,
};
use crate::domain::models::{DisplayConfig, EnrichedIntervention};
use crate::infrastructure::snapshot::load_snapshot;
use crate::services::enrich_snapshot;

/// Arguments for `maintflow enrich`
#[derive(Args, Debug)]
pub struct EnrichArgs {
    /// Snapshot file (JSON or YAML): intervention plus optional phase records
    pub snapshot: PathBuf,
}

/// Enriched read model plus the date pattern for the human view
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct EnrichOutput {
    /// Derived workflow state
    pub enriched: EnrichedIntervention,
    /// chrono pattern for timestamps in the human view
    #[serde(skip)]
    pub date_format: String,
}

impl CommandOutput for EnrichOutput {
    fn to_human(&self) -> String {
        let e = &self.enriched;
        let intervention = &e.intervention;

        let allowed = if e.allowed_transitions.is_empty() {
            "none (terminal)".to_string()
        } else {
            e.allowed_transitions
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let scheduled = intervention
            .scheduled_date
            .as_ref()
            .map(|date| timestamp(date, &self.date_format));

        let mut view = DetailView::new(&format!("Intervention #{}", intervention.id))
            .field("Status", &colorize_status(intervention.status.as_str()).to_string())
            .field("Phase", &colorize_phase(e.phase.as_str()).to_string())
            .field("Completion", &progress_bar(e.completion_percentage))
            .field("Urgent", if intervention.urgent { "yes" } else { "no" })
            .field_opt("Scheduled", scheduled.as_deref())
            .field("Created", &timestamp(&intervention.created_at, &self.date_format))
            .field("Allowed next", &allowed)
            .field("Estimated work", &minutes(e.total_estimated_minutes));

        if !e.next_actions.is_empty() {
            view = view.section("Next actions");
            for action in &e.next_actions {
                view = view.item(&format!("{}: {}", action.label, action.description));
            }
        }

        let mut lines = vec![view.render()];

        let mut work_table = list_table(&["#", "work item", "priority", "estimate"]);
        for (index, item) in e.work_items.iter().enumerate() {
            work_table.add_row(vec![
                (index + 1).to_string(),
                truncate_ellipsis(&item.description, 60),
                colorize_priority(item.priority.as_str()).to_string(),
                minutes(item.estimated_minutes),
            ]);
        }
        lines.push(section_header("Work items"));
        lines.push(render_list("work item", &work_table, e.work_items.len()));

        let mut parts_table = list_table(&["part", "qty", "supplier"]);
        for part in &e.spare_parts {
            parts_table.add_row(vec![
                truncate_ellipsis(&part.name, 50),
                part.quantity.to_string(),
                part.supplier.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        lines.push(section_header("Spare parts"));
        lines.push(render_list("spare part", &parts_table, e.spare_parts.len()));

        lines.join("\n")
    }
}

/// Enrich the snapshot in `args.snapshot` and print it.
pub fn execute(args: EnrichArgs, json_mode: bool, display: &DisplayConfig) -> Result<bool> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let out = EnrichOutput {
        enriched: enrich_snapshot(&snapshot),
        date_format: display.date_format.clone(),
    };
    output(&out, json_mode);
    Ok(true)
}
