//! Shared types and models for Fabtrack
//!
//! This crate contains types shared between the client application, the
//! browser frontend (via WASM), and other components of the system.

pub mod models;
pub mod sequence;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
