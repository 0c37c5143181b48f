//! Programmer entry models
//!
//! The programmer records per-sheet cutting figures for a material; the five
//! total cells are always the per-sheet value scaled by the sheet count.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::validation::parse_positive_decimal;

/// Per-sheet cutting figures, edited as form cells
///
/// The `total_*` cells are derived and recomputed whenever any of the six
/// input cells changes; empty inputs leave the corresponding total empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgramSheet {
    pub quantity_processed: String,
    pub weight_used: String,
    pub cut_length: String,
    pub pierce_count: String,
    pub minutes_per_sheet: String,
    pub sheet_count: String,
    pub total_quantity: String,
    pub total_weight: String,
    pub total_cut_length: String,
    pub total_pierce_count: String,
    pub total_minutes: String,
}

/// Editable cells of a program sheet; totals have no variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetField {
    QuantityProcessed,
    WeightUsed,
    CutLength,
    PierceCount,
    MinutesPerSheet,
    SheetCount,
}

impl ProgramSheet {
    /// Apply a single cell edit and recompute the totals
    pub fn edited(&self, field: SheetField, value: &str) -> Self {
        let mut next = self.clone();
        match field {
            SheetField::QuantityProcessed => next.quantity_processed = value.to_string(),
            SheetField::WeightUsed => next.weight_used = value.to_string(),
            SheetField::CutLength => next.cut_length = value.to_string(),
            SheetField::PierceCount => next.pierce_count = value.to_string(),
            SheetField::MinutesPerSheet => next.minutes_per_sheet = value.to_string(),
            SheetField::SheetCount => next.sheet_count = value.to_string(),
        }
        recalculate_totals(&next)
    }

    /// True when all six input cells are present and numeric
    pub fn is_complete(&self) -> bool {
        [
            &self.quantity_processed,
            &self.weight_used,
            &self.cut_length,
            &self.pierce_count,
            &self.minutes_per_sheet,
            &self.sheet_count,
        ]
        .iter()
        .all(|cell| parse_positive_decimal(cell).is_some())
    }
}

/// Recompute the five total cells from the inputs
///
/// Each total is sheet_count times the per-sheet value, rounded to three
/// places; a total is empty unless both of its factors are present.
pub fn recalculate_totals(sheet: &ProgramSheet) -> ProgramSheet {
    let mut next = sheet.clone();
    let count = parse_positive_decimal(&sheet.sheet_count);

    next.total_quantity = scaled(count, &sheet.quantity_processed);
    next.total_weight = scaled(count, &sheet.weight_used);
    next.total_cut_length = scaled(count, &sheet.cut_length);
    next.total_pierce_count = scaled(count, &sheet.pierce_count);
    next.total_minutes = scaled(count, &sheet.minutes_per_sheet);
    next
}

fn scaled(count: Option<Decimal>, per_sheet: &str) -> String {
    match (count, parse_positive_decimal(per_sheet)) {
        (Some(n), Some(v)) => (n * v)
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        _ => String::new(),
    }
}

/// Parsed sheet figures inside a create request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetFigures {
    pub quantity_processed: Decimal,
    pub weight_used: Decimal,
    pub cut_length: Decimal,
    pub pierce_count: Decimal,
    pub minutes_per_sheet: Decimal,
    pub sheet_count: Decimal,
    pub total_quantity: Decimal,
    pub total_weight: Decimal,
    pub total_cut_length: Decimal,
    pub total_pierce_count: Decimal,
    pub total_minutes: Decimal,
}

/// Why a program sheet could not be turned into request figures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SheetFiguresError {
    #[error("{0} is missing or not a valid number")]
    Invalid(&'static str),
}

impl TryFrom<&ProgramSheet> for SheetFigures {
    type Error = SheetFiguresError;

    fn try_from(sheet: &ProgramSheet) -> Result<Self, Self::Error> {
        fn cell(value: &str, name: &'static str) -> Result<Decimal, SheetFiguresError> {
            value
                .trim()
                .parse()
                .map_err(|_| SheetFiguresError::Invalid(name))
        }

        Ok(Self {
            quantity_processed: cell(&sheet.quantity_processed, "quantity_processed")?,
            weight_used: cell(&sheet.weight_used, "weight_used")?,
            cut_length: cell(&sheet.cut_length, "cut_length")?,
            pierce_count: cell(&sheet.pierce_count, "pierce_count")?,
            minutes_per_sheet: cell(&sheet.minutes_per_sheet, "minutes_per_sheet")?,
            sheet_count: cell(&sheet.sheet_count, "sheet_count")?,
            total_quantity: cell(&sheet.total_quantity, "total_quantity")?,
            total_weight: cell(&sheet.total_weight, "total_weight")?,
            total_cut_length: cell(&sheet.total_cut_length, "total_cut_length")?,
            total_pierce_count: cell(&sheet.total_pierce_count, "total_pierce_count")?,
            total_minutes: cell(&sheet.total_minutes, "total_minutes")?,
        })
    }
}

/// Request body for creating a programmer entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProgramRequest {
    #[validate(length(min = 1))]
    pub program_number: String,
    pub program_date: NaiveDate,
    pub material_id: Uuid,
    pub figures: SheetFigures,
}

/// A persisted programmer entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub id: Uuid,
    pub program_number: String,
    pub program_date: NaiveDate,
    pub material_id: Uuid,
    pub figures: SheetFigures,
    pub created_at: DateTime<Utc>,
}

/// Response for a server-allocated program number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextProgramNumberResponse {
    pub program_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_sheet() -> ProgramSheet {
        recalculate_totals(&ProgramSheet {
            quantity_processed: "4".to_string(),
            weight_used: "12.5".to_string(),
            cut_length: "3400".to_string(),
            pierce_count: "18".to_string(),
            minutes_per_sheet: "7.5".to_string(),
            sheet_count: "6".to_string(),
            ..ProgramSheet::default()
        })
    }

    #[test]
    fn test_totals_are_sheet_count_scaled() {
        let sheet = filled_sheet();
        assert_eq!(sheet.total_quantity, "24");
        assert_eq!(sheet.total_weight, "75");
        assert_eq!(sheet.total_cut_length, "20400");
        assert_eq!(sheet.total_pierce_count, "108");
        assert_eq!(sheet.total_minutes, "45");
    }

    #[test]
    fn test_missing_sheet_count_clears_all_totals() {
        let sheet = filled_sheet().edited(SheetField::SheetCount, "");
        assert_eq!(sheet.total_quantity, "");
        assert_eq!(sheet.total_weight, "");
        assert_eq!(sheet.total_minutes, "");
    }

    #[test]
    fn test_missing_input_clears_only_its_total() {
        let sheet = filled_sheet().edited(SheetField::WeightUsed, "");
        assert_eq!(sheet.total_weight, "");
        assert_eq!(sheet.total_quantity, "24");
        assert_eq!(sheet.total_pierce_count, "108");
    }

    #[test]
    fn test_every_input_edit_recomputes() {
        let sheet = filled_sheet().edited(SheetField::MinutesPerSheet, "8");
        assert_eq!(sheet.total_minutes, "48");
    }

    #[test]
    fn test_fractional_totals_round_to_three_places() {
        let sheet = ProgramSheet {
            minutes_per_sheet: "7.3333".to_string(),
            sheet_count: "3".to_string(),
            ..ProgramSheet::default()
        };
        let sheet = recalculate_totals(&sheet);
        assert_eq!(sheet.total_minutes, "22");
    }

    #[test]
    fn test_is_complete() {
        assert!(filled_sheet().is_complete());
        assert!(!ProgramSheet::default().is_complete());
        assert!(!filled_sheet().edited(SheetField::CutLength, "abc").is_complete());
    }

    #[test]
    fn test_figures_from_complete_sheet() {
        let figures = SheetFigures::try_from(&filled_sheet()).unwrap();
        assert_eq!(figures.total_weight, "75".parse::<Decimal>().unwrap());
        assert_eq!(figures.sheet_count, "6".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_figures_from_incomplete_sheet_fails() {
        let sheet = filled_sheet().edited(SheetField::PierceCount, "");
        assert_eq!(
            SheetFigures::try_from(&sheet),
            Err(SheetFiguresError::Invalid("pierce_count"))
        );
    }
}
