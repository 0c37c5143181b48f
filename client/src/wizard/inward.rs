//! Inward intake wizard
//!
//! Three steps: slip and party identity, the material table, and a review
//! step whose only gate is the full re-validation before submission.

use chrono::NaiveDate;

use shared::{
    validate_digits_only, validate_phone_number, validate_positive_number, validate_quantity,
    validate_required, CreateIntakeRequest, DensityCatalog, MaterialField, MaterialLine,
    MaterialRow, SlipColor,
};

use super::{FieldErrors, SteppedForm};

/// Accumulated state of the inward wizard
#[derive(Debug, Clone)]
pub struct InwardForm {
    /// Server-assigned; prefilled from `/inward/next-serial`
    pub serial_number: String,
    pub slip_number: String,
    pub date: Option<NaiveDate>,
    pub color: Option<SlipColor>,
    pub work_order: String,
    pub company_name: String,
    pub customer_name: String,
    pub phone: String,
    pub materials: Vec<MaterialRow>,
    catalog: DensityCatalog,
}

impl Default for InwardForm {
    fn default() -> Self {
        Self {
            serial_number: String::new(),
            slip_number: String::new(),
            date: None,
            color: None,
            work_order: String::new(),
            company_name: String::new(),
            customer_name: String::new(),
            phone: String::new(),
            // The material table mounts with one blank row
            materials: vec![MaterialRow::default()],
            catalog: DensityCatalog::default(),
        }
    }
}

impl InwardForm {
    /// Form with the type -> density catalog for this session
    pub fn with_catalog(catalog: DensityCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &DensityCatalog {
        &self.catalog
    }

    /// Append a blank material row
    pub fn add_row(&mut self) {
        self.materials.push(MaterialRow::default());
    }

    /// Remove a row by index; the last row cannot be removed
    pub fn remove_row(&mut self, index: usize) {
        if self.materials.len() > 1 && index < self.materials.len() {
            self.materials.remove(index);
        }
    }

    /// Edit one cell of a row, recomputing derived cells as needed
    pub fn edit_row(&mut self, index: usize, field: MaterialField, value: &str) {
        if let Some(row) = self.materials.get(index) {
            self.materials[index] = row.edited(field, value, &self.catalog);
        }
    }
}

impl SteppedForm for InwardForm {
    type Payload = CreateIntakeRequest;

    fn step_count(&self) -> u8 {
        3
    }

    fn validate_step(&self, step: u8) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match step {
            1 => {
                errors.check("serial_number", validate_digits_only(&self.serial_number));
                errors.check("slip_number", validate_digits_only(&self.slip_number));
                if self.date.is_none() {
                    errors.push("date", "Required");
                }
                if self.color.is_none() {
                    errors.push("color", "Required");
                }
                errors.check("work_order", validate_required(&self.work_order));
                errors.check("company_name", validate_required(&self.company_name));
                errors.check("customer_name", validate_required(&self.customer_name));
                errors.check("phone", validate_phone_number(&self.phone));
            }
            2 => {
                if self.materials.is_empty() {
                    errors.push("materials", "At least one material row is required");
                }
                for (i, row) in self.materials.iter().enumerate() {
                    errors.check(
                        &format!("materials[{i}].material_type"),
                        validate_required(&row.material_type),
                    );
                    errors.check(
                        &format!("materials[{i}].thickness"),
                        validate_positive_number(&row.thickness),
                    );
                    errors.check(
                        &format!("materials[{i}].width"),
                        validate_positive_number(&row.width),
                    );
                    errors.check(
                        &format!("materials[{i}].length"),
                        validate_positive_number(&row.length),
                    );
                    errors.check(
                        &format!("materials[{i}].density"),
                        validate_positive_number(&row.density),
                    );
                    errors.check(
                        &format!("materials[{i}].quantity"),
                        validate_quantity(&row.quantity),
                    );
                    // Derived cells must have caught up with the inputs
                    if row.unit_weight.is_empty() || row.total_weight.is_empty() {
                        errors.push(
                            format!("materials[{i}].unit_weight"),
                            "Weights are not yet computed",
                        );
                    }
                }
            }
            // Review step registers no fields of its own
            _ => {}
        }
        errors
    }

    fn assemble(&self) -> Result<Self::Payload, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.date.is_none() {
            errors.push("date", "Required");
        }
        if self.color.is_none() {
            errors.push("color", "Required");
        }

        let mut materials = Vec::with_capacity(self.materials.len());
        for (i, row) in self.materials.iter().enumerate() {
            match MaterialLine::try_from(row) {
                Ok(line) => materials.push(line),
                Err(err) => errors.push(format!("materials[{i}]"), err.to_string()),
            }
        }
        if materials.is_empty() {
            errors.push("materials", "At least one material row is required");
        }

        match (self.date, self.color) {
            (Some(date), Some(color)) if errors.is_empty() => Ok(CreateIntakeRequest {
                serial_number: self.serial_number.trim().to_string(),
                slip_number: self.slip_number.trim().to_string(),
                date,
                color,
                work_order: self.work_order.trim().to_string(),
                company_name: self.company_name.trim().to_string(),
                customer_name: self.customer_name.trim().to_string(),
                phone: self.phone.trim().to_string(),
                materials,
            }),
            _ => Err(errors),
        }
    }
}
