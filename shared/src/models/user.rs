//! User and role models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Short operator code used in program numbers, e.g. "AD"
    pub code: String,
    pub role: Role,
}

/// Workflow roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Inward,
    Programmer,
    Qa,
    Accounts,
    Admin,
}

/// Route sections gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Inward,
    Programming,
    Qa,
    Accounts,
    Admin,
}

impl Role {
    /// Whether this role may open a section; admins see everything
    pub fn can_access(&self, section: Section) -> bool {
        match self {
            Role::Admin => true,
            Role::Inward => section == Section::Inward,
            Role::Programmer => section == Section::Programming,
            Role::Qa => section == Section::Qa,
            Role::Accounts => section == Section::Accounts,
        }
    }
}
