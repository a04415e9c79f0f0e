//! Session phases and the state a view binds to

use crate::error::{AppError, FETCH_FAILED_MESSAGE};
use crate::unsplash::{ImageResult, SearchPage};
use serde::Serialize;
use std::fmt;

/// Current step of the search state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Validating,
    Loading,
    Success,
    Empty,
    ValidationError,
    FetchError,
}

impl Phase {
    pub fn is_error(self) -> bool {
        matches!(self, Phase::ValidationError | Phase::FetchError)
    }

    /// Phases a submission settles in
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            Phase::Success | Phase::Empty | Phase::ValidationError | Phase::FetchError
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Validating => "validating",
            Phase::Loading => "loading",
            Phase::Success => "success",
            Phase::Empty => "empty",
            Phase::ValidationError => "validation_error",
            Phase::FetchError => "fetch_error",
        };
        f.write_str(name)
    }
}

/// Snapshot of one search session
///
/// `error_message` and `error_code` are set exactly in the error phases, and
/// `results` is only non-empty in `Success`. The controller only builds states
/// through the constructors below, so both hold for every published snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub term: String,
    pub results: Vec<ImageResult>,
    pub phase: Phase,
    pub error_message: Option<String>,
    /// Machine-readable failure kind, e.g. `too_short` or `http_error`
    pub error_code: Option<&'static str>,
    pub total: Option<u64>,
    pub total_pages: Option<u64>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle()
    }
}

impl SessionState {
    pub fn idle() -> Self {
        Self::bare(String::new(), Phase::Idle)
    }

    pub fn validating(term: &str) -> Self {
        Self::bare(term.to_string(), Phase::Validating)
    }

    pub fn loading(term: &str) -> Self {
        Self::bare(term.to_string(), Phase::Loading)
    }

    /// Settle a fetch that returned; empty results become `Empty`
    pub fn fetched(term: &str, page: SearchPage) -> Self {
        let phase = if page.results.is_empty() {
            Phase::Empty
        } else {
            Phase::Success
        };
        Self {
            term: term.to_string(),
            results: page.results,
            phase,
            error_message: None,
            error_code: None,
            total: page.total,
            total_pages: page.total_pages,
        }
    }

    /// Settle a failed submission
    ///
    /// Validation failures show their constraint; anything else gets the
    /// generic retry message.
    pub fn failed(term: &str, error: &AppError) -> Self {
        let (phase, message) = match error {
            AppError::Validation(e) => (Phase::ValidationError, e.to_string()),
            _ => (Phase::FetchError, FETCH_FAILED_MESSAGE.to_string()),
        };
        let mut state = Self::bare(term.to_string(), phase);
        state.error_message = Some(message);
        state.error_code = Some(error.error_code());
        state
    }

    fn bare(term: String, phase: Phase) -> Self {
        Self {
            term,
            results: Vec::new(),
            phase,
            error_message: None,
            error_code: None,
            total: None,
            total_pages: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Check the phase/field invariants
    pub fn is_consistent(&self) -> bool {
        let error_ok = self.error_message.is_some() == self.phase.is_error()
            && self.error_code.is_some() == self.phase.is_error();
        let results_ok = self.phase == Phase::Success || self.results.is_empty();
        error_ok && results_ok
    }
}
