//! QA inspection models
//!
//! QA records which machines ran a program, which inspection parameters were
//! checked, and per-process run details for the fixed LASER/FOLDING/FORMING
//! sequence.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Production processes tracked by QA, in shop-floor order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProcessKind {
    Laser,
    Folding,
    Forming,
}

impl ProcessKind {
    pub const ALL: [ProcessKind; 3] = [ProcessKind::Laser, ProcessKind::Folding, ProcessKind::Forming];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessKind::Laser => "LASER",
            ProcessKind::Folding => "FOLDING",
            ProcessKind::Forming => "FORMING",
        }
    }
}

impl std::fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inspection parameters offered on the QA checklist
pub const INSPECTION_PARAMETERS: &[&str] = &[
    "Dimensions",
    "Thickness",
    "Flatness",
    "Burr",
    "Edge Quality",
    "Bend Angle",
    "Surface Finish",
];

/// One process line on the QA form, edited as form cells
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessRow {
    pub process: ProcessKind,
    pub date: Option<NaiveDate>,
    pub cycle_time_minutes: String,
}

impl ProcessRow {
    pub fn new(process: ProcessKind) -> Self {
        Self {
            process,
            date: None,
            cycle_time_minutes: String::new(),
        }
    }
}

/// A validated process line inside a create request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessEntry {
    pub process: ProcessKind,
    pub date: NaiveDate,
    pub cycle_time_minutes: u32,
}

/// Request body for creating a QA entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQaRequest {
    #[validate(length(min = 1))]
    pub program_number: String,
    /// M/C allotment: at least one machine
    #[validate(length(min = 1))]
    pub machine_ids: Vec<Uuid>,
    /// Checked inspection parameters
    #[validate(length(min = 1))]
    pub parameters: Vec<String>,
    pub processes: Vec<ProcessEntry>,
}

/// A persisted QA entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRecord {
    pub id: Uuid,
    pub program_number: String,
    pub machine_ids: Vec<Uuid>,
    pub parameters: Vec<String>,
    pub processes: Vec<ProcessEntry>,
    pub created_at: DateTime<Utc>,
}
