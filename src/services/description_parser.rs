//! Work items and spare parts embedded in an intervention description.
//!
//! The diagnostic form folds its findings into the free-text description as
//! marker-delimited sections:
//!
//! ```text
//! Bearing noise on conveyor 3.
//!
//! REQUIRED WORK:
//! - Replace bearing (HIGH, 45min)
//! - Realign drive belt
//!
//! SPARE PARTS:
//! - Bearing 6204 x2 (SKF)
//! - Drive belt
//!
//! OBSERVATIONS:
//! Vibration above threshold since last week.
//! ```
//!
//! Parsing is lenient. Lines that do not match the entry pattern still
//! produce an entry with default values, and text without any sections is
//! not an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::models::{DiagnosticPayload, SparePart, WorkItem, WorkItemPriority};

const REQUIRED_WORK_MARKER: &str = "REQUIRED WORK";
const SPARE_PARTS_MARKER: &str = "SPARE PARTS";
const OBSERVATIONS_MARKER: &str = "OBSERVATIONS";

const BULLETS: [char; 3] = ['-', '*', '•'];

/// Duration assumed for a work item without an explicit `(PRIORITY, Nmin)` suffix
pub const DEFAULT_WORK_ITEM_MINUTES: u32 = 30;

/// `<description> (<PRIORITY>, <N>min)`
static WORK_ITEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<description>.+?)\s*\(\s*(?P<priority>(?i:low|normal|high|critical))\s*,\s*(?P<minutes>\d+)\s*min\s*\)$",
    )
    .expect("work item pattern is a valid regex")
});

/// `<name> x<N> (<supplier>)`, supplier optional and may itself hold parentheses
static SPARE_PART_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)\s+[xX](?P<quantity>\d+)(?:\s*\((?P<supplier>.*)\))?$")
        .expect("spare part pattern is a valid regex")
});

/// Checklist returned when the description lists no work at all.
pub fn default_work_items() -> Vec<WorkItem> {
    vec![
        WorkItem::new("Visual inspection of the equipment", WorkItemPriority::Normal, 15),
        WorkItem::new(
            "Functional test after intervention",
            WorkItemPriority::Normal,
            DEFAULT_WORK_ITEM_MINUTES,
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    RequiredWork,
    SpareParts,
    Observations,
}

/// Classify a non-bullet line as a section marker.
fn section_marker(line: &str) -> Option<Section> {
    let upper = line.to_uppercase();
    if upper.contains(REQUIRED_WORK_MARKER) {
        Some(Section::RequiredWork)
    } else if upper.contains(SPARE_PARTS_MARKER) {
        Some(Section::SpareParts)
    } else if upper.contains(OBSERVATIONS_MARKER) {
        Some(Section::Observations)
    } else {
        None
    }
}

/// Strip a leading bullet, returning the entry text.
///
/// A run of bullet characters such as `---` is a rule, not an entry.
fn bullet_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(BULLETS)?;
    if rest.starts_with(BULLETS) {
        return None;
    }
    Some(rest.trim())
}

/// Bullet entries found inside `target`, in order.
///
/// Marker lines are only recognised when they are not bullets, so an entry
/// such as "- Order spare parts" does not switch sections.
fn section_entries(text: &str, target: Section) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut inside = false;

    for line in text.lines().map(str::trim) {
        match bullet_text(line) {
            Some(entry) => {
                if inside && !entry.is_empty() {
                    entries.push(entry);
                }
            }
            None => {
                if let Some(section) = section_marker(line) {
                    inside = section == target;
                }
            }
        }
    }

    entries
}

fn parse_work_item(entry: &str) -> WorkItem {
    let matched = WORK_ITEM_PATTERN.captures(entry).and_then(|caps| {
        let priority = caps["priority"].parse::<WorkItemPriority>().ok()?;
        let minutes = caps["minutes"].parse::<u32>().ok().filter(|&m| m > 0)?;
        Some(WorkItem::new(caps["description"].trim(), priority, minutes))
    });

    matched.unwrap_or_else(|| {
        WorkItem::new(entry, WorkItemPriority::Normal, DEFAULT_WORK_ITEM_MINUTES)
    })
}

fn parse_spare_part(entry: &str) -> SparePart {
    let matched = SPARE_PART_PATTERN.captures(entry).and_then(|caps| {
        let quantity = caps["quantity"].parse::<u32>().ok().filter(|&q| q > 0)?;
        let supplier = caps
            .name("supplier")
            .map(|s| s.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(String::from);
        Some(SparePart::new(caps["name"].trim(), quantity, supplier))
    });

    matched.unwrap_or_else(|| SparePart::new(entry, 1, None))
}

/// Extract work items from the REQUIRED WORK section.
///
/// Falls back to [`default_work_items`] when no entry is found, so callers
/// always have a checklist to show.
pub fn parse_work_items(text: &str) -> Vec<WorkItem> {
    let items: Vec<WorkItem> = section_entries(text, Section::RequiredWork)
        .into_iter()
        .map(parse_work_item)
        .collect();

    if items.is_empty() {
        debug!("no required work listed in description, using default checklist");
        return default_work_items();
    }

    items
}

/// Extract spare parts from the SPARE PARTS section. Empty when none are listed.
pub fn parse_spare_parts(text: &str) -> Vec<SparePart> {
    section_entries(text, Section::SpareParts)
        .into_iter()
        .map(parse_spare_part)
        .collect()
}

/// Free-text lines, with any line that would read as a section marker
/// turned into a bullet so it cannot open a section.
fn free_text_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines().map(|line| {
        let trimmed = line.trim();
        if bullet_text(trimmed).is_none() && section_marker(trimmed).is_some() {
            format!("- {trimmed}")
        } else {
            line.to_string()
        }
    })
}

/// Write work items, spare parts and observations back into the
/// section-marked layout that [`parse_work_items`] and
/// [`parse_spare_parts`] read.
pub fn compose_description(
    summary: &str,
    work_items: &[WorkItem],
    spare_parts: &[SparePart],
    observations: Option<&str>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    let summary = summary.trim();
    if !summary.is_empty() {
        lines.extend(free_text_lines(summary));
        lines.push(String::new());
    }

    if !work_items.is_empty() {
        lines.push(format!("{REQUIRED_WORK_MARKER}:"));
        for item in work_items {
            lines.push(format!(
                "- {} ({}, {}min)",
                item.description, item.priority, item.estimated_minutes
            ));
        }
        lines.push(String::new());
    }

    if !spare_parts.is_empty() {
        lines.push(format!("{SPARE_PARTS_MARKER}:"));
        for part in spare_parts {
            match &part.supplier {
                Some(supplier) => {
                    lines.push(format!("- {} x{} ({})", part.name, part.quantity, supplier));
                }
                None => lines.push(format!("- {} x{}", part.name, part.quantity)),
            }
        }
        lines.push(String::new());
    }

    if let Some(observations) = observations.map(str::trim).filter(|o| !o.is_empty()) {
        lines.push(format!("{OBSERVATIONS_MARKER}:"));
        lines.extend(free_text_lines(observations));
    }

    lines.join("\n").trim_end().to_string()
}

/// Compose a description from a diagnostic submission.
///
/// Entries without a priority or duration get the same defaults the parser
/// would assign.
pub fn compose_from_diagnostic(summary: &str, payload: &DiagnosticPayload) -> String {
    let work_items: Vec<WorkItem> = payload
        .required_work
        .iter()
        .map(|entry| {
            WorkItem::new(
                entry.description.trim(),
                entry.priority.unwrap_or_default(),
                entry
                    .estimated_minutes
                    .filter(|&m| m > 0)
                    .unwrap_or(DEFAULT_WORK_ITEM_MINUTES),
            )
        })
        .collect();

    let spare_parts: Vec<SparePart> = payload
        .spare_parts
        .iter()
        .map(|entry| SparePart::new(entry.name.trim(), entry.quantity.max(1), entry.supplier.clone()))
        .collect();

    compose_description(summary, &work_items, &spare_parts, payload.observations.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{RequiredWorkEntry, SparePartEntry};

    const SAMPLE: &str = "Bearing noise on conveyor 3.

REQUIRED WORK:
- Replace bearing (HIGH, 45min)
- Realign drive belt
* Lubricate chain (low, 10 min)

SPARE PARTS:
- Bearing 6204 x2 (SKF)
- Drive belt
- Grease cartridge x3

OBSERVATIONS:
- Vibration above threshold since last week
";

    #[test]
    fn test_empty_text_yields_default_checklist() {
        let items = parse_work_items("");
        assert_eq!(items, default_work_items());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_single_structured_work_item() {
        let items = parse_work_items("REQUIRED WORK\n- Replace bearing (HIGH, 45min)");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Replace bearing");
        assert_eq!(items[0].priority, WorkItemPriority::High);
        assert_eq!(items[0].estimated_minutes, 45);
        assert!(!items[0].completed);
    }

    #[test]
    fn test_work_items_from_full_description() {
        let items = parse_work_items(SAMPLE);
        assert_eq!(items.len(), 3);

        assert_eq!(items[1].description, "Realign drive belt");
        assert_eq!(items[1].priority, WorkItemPriority::Normal);
        assert_eq!(items[1].estimated_minutes, DEFAULT_WORK_ITEM_MINUTES);

        assert_eq!(items[2].description, "Lubricate chain");
        assert_eq!(items[2].priority, WorkItemPriority::Low);
        assert_eq!(items[2].estimated_minutes, 10);
    }

    #[test]
    fn test_unrecognised_priority_keeps_whole_line() {
        let items = parse_work_items("REQUIRED WORK:\n- Flush circuit (URGENT, 20min)");
        assert_eq!(items[0].description, "Flush circuit (URGENT, 20min)");
        assert_eq!(items[0].priority, WorkItemPriority::Normal);
        assert_eq!(items[0].estimated_minutes, DEFAULT_WORK_ITEM_MINUTES);
    }

    #[test]
    fn test_zero_minutes_falls_back_to_defaults() {
        let items = parse_work_items("REQUIRED WORK:\n- Tighten bolts (HIGH, 0min)");
        assert_eq!(items[0].description, "Tighten bolts (HIGH, 0min)");
        assert_eq!(items[0].estimated_minutes, DEFAULT_WORK_ITEM_MINUTES);
    }

    #[test]
    fn test_bullets_outside_section_are_ignored() {
        let text = "- stray bullet\nREQUIRED WORK:\n\nnot a bullet\n-   \n- Check valve";
        let items = parse_work_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Check valve");
    }

    #[test]
    fn test_spare_parts_section_ends_required_work() {
        let text = "REQUIRED WORK:\nSPARE PARTS:\n- Bearing x2";
        assert_eq!(parse_work_items(text), default_work_items());
    }

    #[test]
    fn test_bullet_mentioning_marker_does_not_switch_section() {
        let text = "REQUIRED WORK:\n- Order spare parts from supplier\n- Replace filter";
        let items = parse_work_items(text);
        assert_eq!(items.len(), 2);
        assert!(parse_spare_parts(text).is_empty());
    }

    #[test]
    fn test_spare_part_with_supplier() {
        let parts = parse_spare_parts("SPARE PARTS:\n- Bearing x2 (SKF)");
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "Bearing");
        assert_eq!(parts[0].quantity, 2);
        assert_eq!(parts[0].supplier.as_deref(), Some("SKF"));
        assert!(!parts[0].available);
    }

    #[test]
    fn test_spare_parts_from_full_description() {
        let parts = parse_spare_parts(SAMPLE);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].name, "Bearing 6204");
        assert_eq!(parts[1], SparePart::new("Drive belt", 1, None));
        assert_eq!(parts[2].quantity, 3);
        assert_eq!(parts[2].supplier, None);
    }

    #[test]
    fn test_observations_end_spare_parts() {
        let parts = parse_spare_parts("SPARE PARTS:\n- Seal x1\nOBSERVATIONS:\n- Seal kit x4");
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn test_no_spare_parts_has_no_fallback() {
        assert!(parse_spare_parts("").is_empty());
        assert!(parse_spare_parts("Routine visit, nothing to order").is_empty());
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let parts = parse_spare_parts("Spare parts needed:\n- O-ring x6 (Parker)");
        assert_eq!(parts[0].quantity, 6);
        assert_eq!(parts[0].supplier.as_deref(), Some("Parker"));
    }

    #[test]
    fn test_composed_description_parses_back() {
        let work = vec![
            WorkItem::new("Replace bearing", WorkItemPriority::High, 45),
            WorkItem::new("Realign drive belt", WorkItemPriority::Normal, 30),
        ];
        let parts = vec![
            SparePart::new("Bearing 6204", 2, Some("SKF".to_string())),
            SparePart::new("Drive belt", 1, None),
        ];

        let text = compose_description("Conveyor 3", &work, &parts, Some("Noisy since Monday"));

        assert!(text.starts_with("Conveyor 3\n\nREQUIRED WORK:"));
        assert!(text.ends_with("OBSERVATIONS:\nNoisy since Monday"));
        assert_eq!(parse_work_items(&text), work);
        assert_eq!(parse_spare_parts(&text), parts);
    }

    #[test]
    fn test_supplier_with_parentheses() {
        let parts = parse_spare_parts("SPARE PARTS:\n- Seal x1 (Acme (EU))");
        assert_eq!(parts[0].name, "Seal");
        assert_eq!(parts[0].quantity, 1);
        assert_eq!(parts[0].supplier.as_deref(), Some("Acme (EU)"));
    }

    #[test]
    fn test_rule_line_is_not_an_entry() {
        let text = "REQUIRED WORK:\n---\n- Check valve\n***";
        let items = parse_work_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Check valve");
    }

    #[test]
    fn test_composed_free_text_cannot_open_sections() {
        let work = vec![WorkItem::new("Replace seal", WorkItemPriority::Critical, 60)];
        let parts = vec![SparePart::new("Seal", 1, Some("Acme (EU)".to_string()))];

        let text = compose_description(
            "Spare parts pending\n- Gasket x4",
            &work,
            &parts,
            Some("Required work follow-up:\n- Recheck in 2 weeks"),
        );

        assert_eq!(parse_work_items(&text), work);
        assert_eq!(parse_spare_parts(&text), parts);
        assert!(text.contains("Recheck in 2 weeks"));
    }

    #[test]
    fn test_compose_from_diagnostic_applies_defaults() {
        let payload = DiagnosticPayload {
            required_work: vec![RequiredWorkEntry::new("  Check oil level ")],
            spare_parts: vec![SparePartEntry {
                name: "Oil filter".to_string(),
                quantity: 0,
                supplier: None,
            }],
            observations: None,
        };

        let text = compose_from_diagnostic("", &payload);
        assert_eq!(
            text,
            "REQUIRED WORK:\n- Check oil level (NORMAL, 30min)\n\nSPARE PARTS:\n- Oil filter x1"
        );
    }
}
