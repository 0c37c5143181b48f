//! Product intake models
//!
//! An intake is assembled client-side across the inward wizard's steps and
//! persisted through a single create call; downstream edits go through the
//! programmer/QA/accounts workflows, never through this entity again.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::models::material::MaterialRow;

/// Slip color for an inward transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlipColor {
    White,
    Green,
}

impl std::fmt::Display for SlipColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlipColor::White => write!(f, "White"),
            SlipColor::Green => write!(f, "Green"),
        }
    }
}

/// A fully validated material line inside a create request
///
/// Unlike [`MaterialRow`], every numeric field is parsed; a line can only be
/// built from a complete row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialLine {
    pub material_type: String,
    pub grade: String,
    pub thickness_mm: Decimal,
    pub width_mm: Decimal,
    pub length_mm: Decimal,
    pub density: Decimal,
    pub quantity: u32,
    pub unit_weight: Decimal,
    pub total_weight: Decimal,
    pub stock_due_days: String,
    pub remarks: String,
}

/// Why a material row could not be turned into a request line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterialLineError {
    #[error("{0} is missing or not a valid number")]
    Invalid(&'static str),
}

impl TryFrom<&MaterialRow> for MaterialLine {
    type Error = MaterialLineError;

    fn try_from(row: &MaterialRow) -> Result<Self, Self::Error> {
        fn cell(value: &str, name: &'static str) -> Result<Decimal, MaterialLineError> {
            value
                .trim()
                .parse()
                .map_err(|_| MaterialLineError::Invalid(name))
        }

        if row.material_type.trim().is_empty() {
            return Err(MaterialLineError::Invalid("material_type"));
        }
        let quantity: u32 = row
            .quantity
            .trim()
            .parse()
            .map_err(|_| MaterialLineError::Invalid("quantity"))?;

        Ok(Self {
            material_type: row.material_type.clone(),
            grade: row.grade.clone(),
            thickness_mm: cell(&row.thickness, "thickness")?,
            width_mm: cell(&row.width, "width")?,
            length_mm: cell(&row.length, "length")?,
            density: cell(&row.density, "density")?,
            quantity,
            unit_weight: cell(&row.unit_weight, "unit_weight")?,
            total_weight: cell(&row.total_weight, "total_weight")?,
            stock_due_days: row.stock_due_days.clone(),
            remarks: row.remarks.clone(),
        })
    }
}

/// Request body for creating an inward intake
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateIntakeRequest {
    /// Server-assigned sequential number, echoed back for verification
    #[validate(length(min = 1))]
    pub serial_number: String,
    #[validate(length(min = 1))]
    pub slip_number: String,
    pub date: NaiveDate,
    pub color: SlipColor,
    #[validate(length(min = 1))]
    pub work_order: String,
    #[validate(length(min = 1))]
    pub company_name: String,
    #[validate(length(min = 1))]
    pub customer_name: String,
    #[validate(length(min = 10, max = 10))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub materials: Vec<MaterialLine>,
}

/// A persisted inward transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: Uuid,
    pub serial_number: String,
    pub slip_number: String,
    pub date: NaiveDate,
    pub color: SlipColor,
    pub work_order: String,
    pub company_name: String,
    pub customer_name: String,
    pub phone: String,
    pub materials: Vec<MaterialLine>,
    pub created_at: DateTime<Utc>,
}

/// Response for the next server-assigned serial number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextSerialResponse {
    pub serial_number: String,
}
