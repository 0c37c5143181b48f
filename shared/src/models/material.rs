//! Material catalog and intake material rows
//!
//! A material row is edited cell by cell; weights and the stock-due tier are
//! always recomputed from the dimensional inputs, never entered directly.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::validation::parse_positive_decimal;

/// A material type from the backend catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialType {
    pub name: String,
    pub density: Decimal,
}

/// Name -> density lookup built from the catalog fetched once per form session
#[derive(Debug, Clone, Default)]
pub struct DensityCatalog {
    densities: BTreeMap<String, Decimal>,
}

impl DensityCatalog {
    pub fn new(types: Vec<MaterialType>) -> Self {
        Self {
            densities: types.into_iter().map(|t| (t.name, t.density)).collect(),
        }
    }

    /// Density for a material type, or `None` when the type is unknown
    pub fn density_for(&self, name: &str) -> Option<Decimal> {
        self.densities.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.densities.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }
}

/// One line item of stock within a product intake
///
/// Cells hold the user's raw input. An empty string means "not yet
/// computable", which is distinct from a literal zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MaterialRow {
    pub material_type: String,
    pub grade: String,
    /// Millimeters
    pub thickness: String,
    /// Millimeters
    pub width: String,
    /// Millimeters
    pub length: String,
    /// Populated from the catalog when the type is selected
    pub density: String,
    pub quantity: String,
    /// Derived: round(thickness * width * length * density, 3)
    pub unit_weight: String,
    /// Derived: round(quantity * unit_weight, 3)
    pub total_weight: String,
    /// Derived lead-time tier, in days
    pub stock_due_days: String,
    pub remarks: String,
}

/// Editable cells of a material row
///
/// There is deliberately no variant for the derived cells: weights and the
/// stock-due tier cannot be written to directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialField {
    Type,
    Grade,
    Thickness,
    Width,
    Length,
    Density,
    Quantity,
    Remarks,
}

impl MaterialRow {
    /// Apply a single cell edit, returning the resulting row
    ///
    /// Selecting a type re-resolves the density from the catalog. Edits to a
    /// dimensional cell, the density, or the quantity recompute the derived
    /// cells; grade and remarks edits leave them untouched.
    pub fn edited(&self, field: MaterialField, value: &str, catalog: &DensityCatalog) -> Self {
        let mut next = self.clone();
        match field {
            MaterialField::Type => {
                next.material_type = value.to_string();
                next.density = catalog
                    .density_for(value)
                    .map(|d| d.normalize().to_string())
                    .unwrap_or_default();
            }
            MaterialField::Grade => next.grade = value.to_string(),
            MaterialField::Thickness => next.thickness = value.to_string(),
            MaterialField::Width => next.width = value.to_string(),
            MaterialField::Length => next.length = value.to_string(),
            MaterialField::Density => next.density = value.to_string(),
            MaterialField::Quantity => next.quantity = value.to_string(),
            MaterialField::Remarks => next.remarks = value.to_string(),
        }
        match field {
            MaterialField::Grade | MaterialField::Remarks => next,
            _ => recalculate(&next),
        }
    }

    /// True when every numeric input and every derived cell is populated
    pub fn is_complete(&self) -> bool {
        !self.material_type.is_empty()
            && [
                &self.thickness,
                &self.width,
                &self.length,
                &self.density,
                &self.quantity,
            ]
            .iter()
            .all(|cell| parse_positive_decimal(cell).is_some())
            && !self.unit_weight.is_empty()
            && !self.total_weight.is_empty()
    }
}

/// Recompute the derived cells of a row from its inputs
///
/// Pure: never fails, never touches the input cells. Incomplete or
/// non-numeric input yields empty derived cells rather than an error.
pub fn recalculate(row: &MaterialRow) -> MaterialRow {
    let mut next = row.clone();

    let volume = match (
        parse_positive_decimal(&row.thickness),
        parse_positive_decimal(&row.width),
        parse_positive_decimal(&row.length),
    ) {
        (Some(t), Some(w), Some(l)) => t * w * l,
        _ => Decimal::ZERO,
    };

    let unit_weight = parse_positive_decimal(&row.density)
        .filter(|_| volume > Decimal::ZERO)
        .map(|d| round_weight(volume * d));

    let total_weight = match (parse_positive_decimal(&row.quantity), unit_weight) {
        (Some(q), Some(u)) if u > Decimal::ZERO => Some(round_weight(q * u)),
        _ => None,
    };

    next.unit_weight = weight_cell(unit_weight);
    next.total_weight = weight_cell(total_weight);
    next.stock_due_days = total_weight
        .and_then(stock_due_days)
        .unwrap_or_default()
        .to_string();
    next
}

/// Stock-due tier (in days) for a total weight
///
/// Lower bounds are inclusive: exactly 50 is tier "3", exactly 200 is "5".
pub fn stock_due_days(total_weight: Decimal) -> Option<&'static str> {
    if total_weight >= Decimal::from(200) {
        Some("5")
    } else if total_weight >= Decimal::from(50) {
        Some("3")
    } else if total_weight > Decimal::ZERO {
        Some("1")
    } else {
        None
    }
}

fn round_weight(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
}

fn weight_cell(value: Option<Decimal>) -> String {
    value.map(|v| v.normalize().to_string()).unwrap_or_default()
}
