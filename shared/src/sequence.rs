//! Program number formatting
//!
//! Program numbers follow `YYMM{CODE}-NNN`, e.g. "2511AD-008" for the 8th
//! program cut by operator "AD" in November 2025. Sequence allocation lives
//! with the caller; this module only formats.

use chrono::{Datelike, NaiveDate};

/// Format a program number for a date, operator code and sequence value
pub fn program_number(date: NaiveDate, operator_code: &str, sequence: u32) -> String {
    format!(
        "{:02}{:02}{}-{:03}",
        date.year() % 100,
        date.month(),
        operator_code,
        sequence
    )
}
