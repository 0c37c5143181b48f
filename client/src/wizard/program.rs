//! Programmer entry wizard
//!
//! Two steps: program identity (material selection, program number, date)
//! and the per-sheet cutting figures with their derived totals.

use chrono::NaiveDate;
use uuid::Uuid;

use shared::{
    validate_positive_number, validate_required, CreateProgramRequest, ProgramSheet, SheetField,
    SheetFigures,
};

use super::{FieldErrors, SteppedForm};

/// Accumulated state of the programmer wizard
#[derive(Debug, Clone, Default)]
pub struct ProgramForm {
    pub material_id: Option<Uuid>,
    /// Allocated by the backend, or by the offline session fallback
    pub program_number: String,
    pub program_date: Option<NaiveDate>,
    pub sheet: ProgramSheet,
}

impl ProgramForm {
    /// Edit one figure cell; totals recompute on every input change
    pub fn edit_sheet(&mut self, field: SheetField, value: &str) {
        self.sheet = self.sheet.edited(field, value);
    }
}

impl SteppedForm for ProgramForm {
    type Payload = CreateProgramRequest;

    fn step_count(&self) -> u8 {
        2
    }

    fn validate_step(&self, step: u8) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            1 => {
                if self.material_id.is_none() {
                    errors.push("material_id", "Select a material");
                }
                errors.check("program_number", validate_required(&self.program_number));
                if self.program_date.is_none() {
                    errors.push("program_date", "Required");
                }
            }
            2 => {
                errors.check(
                    "quantity_processed",
                    validate_positive_number(&self.sheet.quantity_processed),
                );
                errors.check("weight_used", validate_positive_number(&self.sheet.weight_used));
                errors.check("cut_length", validate_positive_number(&self.sheet.cut_length));
                errors.check(
                    "pierce_count",
                    validate_positive_number(&self.sheet.pierce_count),
                );
                errors.check(
                    "minutes_per_sheet",
                    validate_positive_number(&self.sheet.minutes_per_sheet),
                );
                errors.check("sheet_count", validate_positive_number(&self.sheet.sheet_count));
            }
            _ => {}
        }
        errors
    }

    fn assemble(&self) -> Result<Self::Payload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let figures = match SheetFigures::try_from(&self.sheet) {
            Ok(figures) => Some(figures),
            Err(err) => {
                errors.push("sheet", err.to_string());
                None
            }
        };

        match (self.material_id, self.program_date, figures) {
            (Some(material_id), Some(program_date), Some(figures)) if errors.is_empty() => {
                Ok(CreateProgramRequest {
                    program_number: self.program_number.trim().to_string(),
                    program_date,
                    material_id,
                    figures,
                })
            }
            (material_id, program_date, _) => {
                if material_id.is_none() {
                    errors.push("material_id", "Select a material");
                }
                if program_date.is_none() {
                    errors.push("program_date", "Required");
                }
                Err(errors)
            }
        }
    }
}
