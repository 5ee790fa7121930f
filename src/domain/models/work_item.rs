//! Work items and spare parts extracted from an intervention description.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Priority level for work items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkItemPriority {
    /// Can wait
    Low = 1,
    /// Default priority
    #[default]
    Normal = 2,
    /// Do first
    High = 3,
    /// Safety or production impact
    Critical = 4,
}

impl WorkItemPriority {
    /// Wire value of the priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for WorkItemPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkItemPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "NORMAL" => Ok(Self::Normal),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(format!("Invalid priority: {other}")),
        }
    }
}

/// A discrete task listed in the description's REQUIRED WORK section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// What needs doing
    pub description: String,
    /// Priority, NORMAL when not given
    pub priority: WorkItemPriority,
    /// Estimated duration
    pub estimated_minutes: u32,
    /// Checked off by the technician
    #[serde(default)]
    pub completed: bool,
}

impl WorkItem {
    /// Open work item.
    pub fn new(
        description: impl Into<String>,
        priority: WorkItemPriority,
        estimated_minutes: u32,
    ) -> Self {
        Self {
            description: description.into(),
            priority,
            estimated_minutes,
            completed: false,
        }
    }
}

/// A parts requirement listed in the description's SPARE PARTS section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePart {
    /// Part name or reference
    pub name: String,
    /// Units needed, at least 1
    pub quantity: u32,
    /// Preferred supplier
    #[serde(default)]
    pub supplier: Option<String>,
    /// Part is on hand
    #[serde(default)]
    pub available: bool,
}

impl SparePart {
    /// Part not yet marked available.
    pub fn new(name: impl Into<String>, quantity: u32, supplier: Option<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            supplier,
            available: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parsing_is_case_insensitive() {
        assert_eq!("high".parse::<WorkItemPriority>().unwrap(), WorkItemPriority::High);
        assert_eq!(" CRITICAL ".parse::<WorkItemPriority>().unwrap(), WorkItemPriority::Critical);
        assert!("urgent".parse::<WorkItemPriority>().is_err());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(WorkItemPriority::Critical > WorkItemPriority::High);
        assert!(WorkItemPriority::Low < WorkItemPriority::Normal);
        assert_eq!(WorkItemPriority::default(), WorkItemPriority::Normal);
    }
}
