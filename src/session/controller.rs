//! Search session controller
//!
//! Drives `Idle -> Validating -> Loading -> {Success, Empty, FetchError}` (or
//! `Validating -> ValidationError`) and publishes every transition on a watch
//! channel. Submissions never queue: each one takes a ticket, and an outcome
//! is only published while its ticket is still the latest.

use crate::config::{clamp_page_size, Config};
use crate::error::AppError;
use crate::session::query::SearchQuery;
use crate::session::state::{Phase, SessionState};
use crate::unsplash::{PhotoSearch, UnsplashClient};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Position of one submission; only the latest may publish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

pub struct SearchSession<F: PhotoSearch> {
    fetcher: F,
    page_size: u32,
    state: watch::Sender<SessionState>,
    latest: AtomicU64,
}

impl SearchSession<UnsplashClient> {
    /// Session backed by the Unsplash API
    pub fn connect(config: Config) -> Result<Self, AppError> {
        let page_size = config.page_size;
        let client = UnsplashClient::new(config)?;
        Ok(Self::new(client, page_size))
    }
}

impl<F: PhotoSearch> SearchSession<F> {
    pub fn new(fetcher: F, page_size: u32) -> Self {
        let (state, _) = watch::channel(SessionState::idle());
        Self {
            fetcher,
            page_size: clamp_page_size(page_size),
            state,
            latest: AtomicU64::new(0),
        }
    }

    /// Receiver notified on every published transition
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Submit a search term
    ///
    /// Returns the phase this submission settled in, or `None` when a newer
    /// submission superseded it before its fetch came back.
    pub async fn submit(&self, term: &str) -> Option<Phase> {
        let ticket = self.begin(term);
        self.run(ticket, term).await
    }

    /// Take the next ticket and publish `Validating`
    ///
    /// Tickets are ordered by `begin` calls, so a caller that spawns `run`
    /// onto other tasks must call this first, in submission order.
    pub fn begin(&self, term: &str) -> Ticket {
        let ticket = Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
        debug!("Submission #{} for '{}'", ticket.0, term);
        self.publish(ticket, SessionState::validating(term));
        ticket
    }

    /// Validate and fetch for a ticket taken by `begin`
    pub async fn run(&self, ticket: Ticket, term: &str) -> Option<Phase> {
        let query = match SearchQuery::parse(term) {
            Ok(query) => query,
            Err(e) => {
                debug!("Submission #{} rejected: {}", ticket.0, e);
                return self.settle(ticket, SessionState::failed(term, &e.into()));
            }
        };

        if !self.publish(ticket, SessionState::loading(term)) {
            return None;
        }

        let next = match self.fetcher.search(&query, self.page_size).await {
            Ok(page) => SessionState::fetched(term, page),
            Err(e) => {
                warn!("Failed to fetch images for '{}': {}", term, e);
                SessionState::failed(term, &e.into())
            }
        };
        self.settle(ticket, next)
    }

    /// Submit on a new task in `searches`, taking the ticket before spawning
    pub fn spawn_submit(self: &Arc<Self>, term: String, searches: &mut JoinSet<Option<Phase>>) {
        let ticket = self.begin(&term);
        let session = Arc::clone(self);
        searches.spawn(async move { session.run(ticket, &term).await });
    }

    fn settle(&self, ticket: Ticket, state: SessionState) -> Option<Phase> {
        let phase = state.phase;
        if self.publish(ticket, state) {
            info!("Submission #{} settled in {}", ticket.0, phase);
            Some(phase)
        } else {
            debug!("Submission #{} superseded, outcome discarded", ticket.0);
            None
        }
    }

    /// Replace the state if `ticket` is still the latest submission
    fn publish(&self, ticket: Ticket, next: SessionState) -> bool {
        debug_assert!(next.is_consistent());
        self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != ticket.0 {
                return false;
            }
            *state = next;
            true
        })
    }
}
