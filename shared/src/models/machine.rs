//! Machine and operator catalog models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A machine on the shop floor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Machine {
    pub id: Uuid,
    pub name: String,
    pub code: String,
}

/// A machine operator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operator {
    pub id: Uuid,
    pub name: String,
    pub code: String,
}
