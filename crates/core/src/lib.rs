//! Domain logic for the interview data-collection service.
//!
//! Pure form-to-record mapping: no database access, no HTTP types. The
//! `db` crate consumes [`submission::MappedSubmission`] and the flag
//! tables in [`flags`] to build its statements.

pub mod error;
pub mod flags;
pub mod submission;
pub mod types;
