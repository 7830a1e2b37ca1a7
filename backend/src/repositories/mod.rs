//! Data access layer
//!
//! Repositories own the SQL; services own the business rules.

mod job;
mod user;

pub use job::{JobRepository, JobRecord, MonthlyCountRow, UpdateJobFields};
pub use user::{UserRecord, UserRepository};
