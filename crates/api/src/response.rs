//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Listing envelope: the collection plus an error flag.
///
/// The flag is what distinguishes "the store was unreachable" from "no
/// records exist" -- both arrive with an empty `data`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub error: Option<String>,
}
