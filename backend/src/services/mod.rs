//! Business logic layer

pub mod job;
pub mod user;

pub use job::JobService;
pub use user::UserService;
