//! Search API Types
//!
//! Defines the Data Transfer Objects (DTOs) shared between the API handlers
//! and the front end.

use serde::{Deserialize, Serialize};

/// Query-string parameters accepted by `GET /api/standards`.
///
/// Absent parameters deserialize to empty strings, which the engine treats
/// as "no filter on that dimension".
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub source: String,
}

/// Response body of `GET /api/filters`: the distinct values offered by the
/// two filter dropdowns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub sections: Vec<String>,
    pub sources: Vec<String>,
}
