//! WebAssembly module for Fabtrack
//!
//! Provides client-side computation for:
//! - Material row weight recalculation
//! - Stock-due tier lookup
//! - Program sheet totals
//! - Offline field validation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Recompute the derived cells of a material row
#[wasm_bindgen]
pub fn recalculate_material_row(row_json: &str) -> Result<String, JsValue> {
    let row: MaterialRow = serde_json::from_str(row_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid row JSON: {}", e)))?;

    let row = shared::models::recalculate(&row);
    serde_json::to_string(&row).map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Stock-due tier (in days) for a total weight; empty when no tier applies
#[wasm_bindgen]
pub fn stock_due_tier(total_weight: f64) -> String {
    let total = Decimal::try_from(total_weight).unwrap_or(Decimal::ZERO);
    shared::models::stock_due_days(total).unwrap_or("").to_string()
}

/// Recompute the total cells of a program sheet
#[wasm_bindgen]
pub fn program_totals(sheet_json: &str) -> Result<String, JsValue> {
    let sheet: ProgramSheet = serde_json::from_str(sheet_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sheet JSON: {}", e)))?;

    let sheet = shared::models::recalculate_totals(&sheet);
    serde_json::to_string(&sheet)
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Validate a mobile number (10 digits, starting 6-9)
#[wasm_bindgen]
pub fn is_valid_phone_number(phone: &str) -> bool {
    validate_phone_number(phone).is_ok()
}

/// Validate a serial or slip number (digits only)
#[wasm_bindgen]
pub fn is_valid_slip_number(value: &str) -> bool {
    validate_digits_only(value).is_ok()
}

/// Validate a process cycle time in minutes (1-600 inclusive)
#[wasm_bindgen]
pub fn is_valid_cycle_time(minutes: &str) -> bool {
    validate_cycle_time(minutes).is_ok()
}

/// Format a program number, e.g. (2025, 11, "AD", 8) -> "2511AD-008"
///
/// Returns an empty string for an invalid year/month.
#[wasm_bindgen]
pub fn format_program_number(year: i32, month: u32, operator_code: &str, sequence: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => shared::sequence::program_number(date, operator_code, sequence),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recalculate_material_row() {
        let row = r#"{
            "material_type": "MS", "grade": "", "thickness": "2", "width": "100",
            "length": "200", "density": "0.000078", "quantity": "10",
            "unit_weight": "", "total_weight": "", "stock_due_days": "", "remarks": ""
        }"#;
        let result = recalculate_material_row(row).unwrap();
        let row: MaterialRow = serde_json::from_str(&result).unwrap();
        assert_eq!(row.unit_weight, "3.12");
        assert_eq!(row.total_weight, "31.2");
        assert_eq!(row.stock_due_days, "1");
    }

    #[test]
    fn test_stock_due_tier() {
        assert_eq!(stock_due_tier(31.2), "1");
        assert_eq!(stock_due_tier(50.0), "3");
        assert_eq!(stock_due_tier(200.0), "5");
        assert_eq!(stock_due_tier(0.0), "");
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone_number("9876543210"));
        assert!(!is_valid_phone_number("1234567890"));
        assert!(!is_valid_phone_number("98765"));
    }

    #[test]
    fn test_cycle_time_validation() {
        assert!(is_valid_cycle_time("45"));
        assert!(!is_valid_cycle_time("601"));
        assert!(!is_valid_cycle_time(""));
    }

    #[test]
    fn test_format_program_number() {
        assert_eq!(format_program_number(2025, 11, "AD", 8), "2511AD-008");
        assert_eq!(format_program_number(2025, 13, "AD", 8), "");
    }
}
