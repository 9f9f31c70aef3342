//! Dataset Types
//!
//! Defines the record type served over the wire and the in-memory dataset
//! shared with the HTTP handlers.

use serde::{Deserialize, Serialize};

/// One row of the cybersecurity-standards dataset.
///
/// Fields are serialized under the spreadsheet's original column names so the
/// JSON matches what the front end (and any existing consumer of the API)
/// expects. An empty string means the field is absent; absent fields are not
/// rendered by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRecord {
    #[serde(rename = "Section", default)]
    pub section: String,
    #[serde(rename = "Source", default)]
    pub source: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Keywords", default)]
    pub keywords: String,
    #[serde(rename = "ControlID", default)]
    pub control_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Page Number", default)]
    pub page_number: String,
    #[serde(rename = "Requirement Text", default)]
    pub requirement_text: String,
    #[serde(rename = "Simplified Summary", default)]
    pub simplified_summary: String,
    #[serde(rename = "Control Category", default)]
    pub control_category: String,
}

/// The fully loaded dataset, built once at startup and shared read-only with
/// the handlers via `Extension(Arc<Dataset>)`.
///
/// `sections` and `sources` are the precomputed dropdown option lists:
/// sections restricted to numeric outline values (`4.1.1` style) in natural
/// order, sources sorted lexicographically.
#[derive(Debug, Default)]
pub struct Dataset {
    pub records: Vec<StandardRecord>,
    pub sections: Vec<String>,
    pub sources: Vec<String>,
}
