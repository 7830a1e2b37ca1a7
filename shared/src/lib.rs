//! Jobtrack Shared Library
//!
//! This crate contains shared types, models, and validation helpers used
//! across the backend and any future clients.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{Job, JobStatus, User};
pub use types::*;
