//! Data Client
//!
//! The HTTP layer between the front end and the standards API. Builds GET
//! requests carrying only the non-empty filter parameters, parses the JSON
//! responses, and surfaces failures as typed [`NetworkError`]s.

use cyber_standards::dataset::types::StandardRecord;
use cyber_standards::search::types::FilterOptions;
use thiserror::Error;

/// Server error bodies are surfaced inline to the user; cap them so a stack
/// trace page does not flood the UI.
const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Clone)]
pub struct DataClient {
    base_url: String,
    client: reqwest::Client,
}

impl DataClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the records matching the given filters.
    pub async fn fetch_records(
        &self,
        query: &str,
        section: &str,
        source: &str,
    ) -> Result<Vec<StandardRecord>, NetworkError> {
        let url = records_url(&self.base_url, query, section, source);
        tracing::debug!("Fetching records: {}", url);

        let response = self.client.get(&url).send().await?;
        let records = check_status(response).await?.json().await?;
        Ok(records)
    }

    /// Fetches the dropdown option lists, dropping any empty entries the
    /// server may have let through.
    pub async fn fetch_filter_options(&self) -> Result<FilterOptions, NetworkError> {
        let url = format!("{}/api/filters", self.base_url);
        tracing::debug!("Fetching filter options: {}", url);

        let response = self.client.get(&url).send().await?;
        let options = check_status(response).await?.json().await?;
        Ok(prune_options(options))
    }
}

/// Builds the records URL, including only non-empty parameters.
///
/// Kept as a free function so URL construction is testable without a server.
pub fn records_url(base_url: &str, query: &str, section: &str, source: &str) -> String {
    let mut params: Vec<String> = Vec::new();
    for (name, value) in [("query", query), ("section", section), ("source", source)] {
        if !value.is_empty() {
            params.push(format!("{}={}", name, urlencoding::encode(value)));
        }
    }

    if params.is_empty() {
        format!("{}/api/standards", base_url)
    } else {
        format!("{}/api/standards?{}", base_url, params.join("&"))
    }
}

/// Drops empty dropdown entries before they reach the UI.
pub fn prune_options(options: FilterOptions) -> FilterOptions {
    FilterOptions {
        sections: options
            .sections
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect(),
        sources: options
            .sources
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect(),
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(NetworkError::Status {
        status: status.as_u16(),
        message: truncate_message(&error_text(body)),
    })
}

/// The API wraps failures as `{"error": "..."}`; pull the field out when the
/// body parses, otherwise fall back to the raw text.
pub(crate) fn error_text(body: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => value
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::to_string)
            .unwrap_or(body),
        Err(_) => body,
    }
}

pub(crate) fn truncate_message(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
