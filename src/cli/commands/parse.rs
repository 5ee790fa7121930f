//! `maintflow parse`: work items and spare parts embedded in a description.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::display::{
    colorize_priority, list_table, minutes, output, render_list, section_header, CommandOutput,
};
use crate::domain::models::{SparePart, WorkItem};
use crate::services::{parse_spare_parts, parse_work_items};

/// Arguments for `maintflow parse`
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Description text file; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,
}

/// Entries extracted from a description
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutput {
    /// Work items, or the default checklist
    pub work_items: Vec<WorkItem>,
    /// Spare parts; empty when none are listed
    pub spare_parts: Vec<SparePart>,
}

impl CommandOutput for ParseOutput {
    fn to_human(&self) -> String {
        let mut work_table = list_table(&["work item", "priority", "estimate"]);
        for item in &self.work_items {
            work_table.add_row(vec![
                item.description.clone(),
                colorize_priority(item.priority.as_str()).to_string(),
                minutes(item.estimated_minutes),
            ]);
        }

        let mut parts_table = list_table(&["part", "qty", "supplier"]);
        for part in &self.spare_parts {
            parts_table.add_row(vec![
                part.name.clone(),
                part.quantity.to_string(),
                part.supplier.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }

        [
            render_list("work item", &work_table, self.work_items.len()),
            section_header("Spare parts"),
            render_list("spare part", &parts_table, self.spare_parts.len()),
        ]
        .join("\n")
    }
}

fn read_text(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read description from stdin")?;
            Ok(text)
        }
    }
}

/// Parse a description from a file or stdin.
pub fn execute(args: ParseArgs, json_mode: bool) -> Result<bool> {
    let text = read_text(args.file.as_ref())?;
    let out = ParseOutput {
        work_items: parse_work_items(&text),
        spare_parts: parse_spare_parts(&text),
    };
    output(&out, json_mode);
    Ok(true)
}
