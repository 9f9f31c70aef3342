//! Filter Controller
//!
//! Owns the current filter selection and the view state. The state machine is
//! Idle → Loading → Displayed | Error: a trigger captures the selection and
//! enters Loading, the Data Client call resolves it to Displayed or Error.
//! The fetched records live here and nowhere else; an error discards them.
//!
//! Transitions are plain methods so the machine unit-tests without a network;
//! [`FilterController::run_search`] composes them around the client call.

use crate::client::{DataClient, NetworkError};
use cyber_standards::dataset::types::StandardRecord;

/// The three filter inputs as captured at trigger time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub query: String,
    pub section: String,
    pub source: String,
}

#[derive(Debug, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Displayed(Vec<StandardRecord>),
    Error(String),
}

#[derive(Debug, Default)]
pub struct FilterController {
    selection: FilterSelection,
    state: ViewState,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Captures the selection and enters Loading.
    pub fn begin(&mut self, selection: FilterSelection) {
        self.selection = selection;
        self.state = ViewState::Loading;
    }

    /// Resolves Loading with the fetch outcome. A failure replaces any
    /// previously displayed records with the error message.
    pub fn complete(&mut self, outcome: Result<Vec<StandardRecord>, NetworkError>) {
        self.state = match outcome {
            Ok(records) => ViewState::Displayed(records),
            Err(err) => ViewState::Error(err.to_string()),
        };
    }

    /// Clears all three inputs. The caller re-triggers with the now-empty
    /// selection to reproduce the unfiltered result set.
    pub fn reset(&mut self) {
        self.selection = FilterSelection::default();
    }

    /// One full search cycle: capture, fetch, resolve.
    ///
    /// Responses land in whatever order they land; a later search simply
    /// overwrites this state. No cancellation of in-flight requests.
    pub async fn run_search(&mut self, client: &DataClient, selection: FilterSelection) {
        self.begin(selection);
        let outcome = client
            .fetch_records(
                &self.selection.query,
                &self.selection.section,
                &self.selection.source,
            )
            .await;

        if let Err(err) = &outcome {
            tracing::warn!("Search failed: {}", err);
        }
        self.complete(outcome);
    }
}
