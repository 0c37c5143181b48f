//! Fabtrack client core
//!
//! The application layer of the manufacturing workflow frontend: typed REST
//! client, the multi-step wizard controller with its inward/programmer/QA
//! forms, session state and role gating. Rendering, routing chrome and
//! notification presentation live in the browser shell on top of this
//! crate.

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod wizard;

pub use api::ApiClient;
pub use config::Config;
pub use error::{AppError, AppResult};
