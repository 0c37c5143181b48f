//! Accounts view models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Billing status for an intake, shown beside its QA record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsSummary {
    pub intake_id: Uuid,
    pub invoice_number: Option<String>,
    pub invoiced: bool,
    pub amount: Option<Decimal>,
}
