//! Validation utilities for Fabtrack
//!
//! Field-level checks used by the wizard step gates. Every helper reports a
//! single message for the field; aggregation across fields happens in the
//! wizard controller.

use rust_decimal::Decimal;

// ============================================================================
// Numeric Cell Parsing
// ============================================================================

/// Parse a form cell as a decimal strictly greater than zero
///
/// Empty, non-numeric, zero and negative cells all yield `None`; a missing
/// value is "not yet computable", not an error.
pub fn parse_positive_decimal(cell: &str) -> Option<Decimal> {
    let value: Decimal = cell.trim().parse().ok()?;
    (value > Decimal::ZERO).then_some(value)
}

// ============================================================================
// Identity Validations
// ============================================================================

/// Validate a mobile number: exactly 10 digits, starting with 6-9
pub fn validate_phone_number(phone: &str) -> Result<(), &'static str> {
    let phone = phone.trim();
    if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone number must be 10 digits");
    }
    if !matches!(phone.chars().next(), Some('6'..='9')) {
        return Err("Phone number must start with 6-9");
    }
    Ok(())
}

/// Validate a serial or slip number: digits only
pub fn validate_digits_only(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Required");
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Digits only");
    }
    Ok(())
}

/// Validate a required free-text field
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Required")
    } else {
        Ok(())
    }
}

// ============================================================================
// Numeric Field Validations
// ============================================================================

/// Validate a numeric cell that must be present and greater than zero
pub fn validate_positive_number(cell: &str) -> Result<(), &'static str> {
    if cell.trim().is_empty() {
        return Err("Required");
    }
    if parse_positive_decimal(cell).is_none() {
        return Err("Must be a positive number");
    }
    Ok(())
}

/// Validate a quantity cell: a whole number greater than zero
pub fn validate_quantity(cell: &str) -> Result<(), &'static str> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Err("Required");
    }
    match cell.parse::<u32>() {
        Ok(0) => Err("Must be at least 1"),
        Ok(_) => Ok(()),
        Err(_) => Err("Must be a whole number"),
    }
}

/// Validate a process cycle time in minutes, inclusive range 1-600
pub fn validate_cycle_time(cell: &str) -> Result<(), &'static str> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Err("Required");
    }
    match cell.parse::<u32>() {
        Ok(minutes) if (1..=600).contains(&minutes) => Ok(()),
        Ok(_) => Err("Cycle time must be between 1 and 600 minutes"),
        Err(_) => Err("Must be a whole number of minutes"),
    }
}
