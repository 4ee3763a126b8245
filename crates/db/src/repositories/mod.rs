//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod interview_repo;

pub use interview_repo::InterviewRepo;
