//! Fetch-a-list-with-fallback, shared by the gallery, house types and footer
//!
//! Every trigger takes a [`FetchTicket`]. Only the response holding the most
//! recent ticket is allowed to touch the list; anything older is dropped, so
//! a slow response can never overwrite a fresher one. Failures never reach
//! the caller: the list falls back to its configured default and the error is
//! logged and kept in `last_error`.

use crate::error::{Result, StorefrontError};
use crate::models::ApiEnvelope;
use log::{error, info, warn};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// What the list holds after a failed fetch
pub enum Fallback<T> {
    Empty,
    Static(fn() -> Vec<T>),
}

impl<T> Clone for Fallback<T> {
    fn clone(&self) -> Self {
        match self {
            Fallback::Empty => Fallback::Empty,
            Fallback::Static(dataset) => Fallback::Static(*dataset),
        }
    }
}

impl<T> Fallback<T> {
    fn items(&self) -> Vec<T> {
        match self {
            Fallback::Empty => Vec::new(),
            Fallback::Static(dataset) => dataset(),
        }
    }
}

/// Identifies one fetch; compare with [`RemoteList::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Fetcher statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub successful_fetches: u64,
    pub failed_fetches: u64,
    /// Times the fallback dataset replaced the list
    pub fallbacks: u64,
    /// Responses that arrived after a newer fetch had started
    pub stale_discarded: u64,
}

struct ListState<T> {
    items: Vec<T>,
    loading: bool,
    last_error: Option<String>,
    latest: u64,
    stats: FetchStats,
}

/// A remotely sourced list plus its loading state; clones share state
pub struct RemoteList<T> {
    name: &'static str,
    fallback: Fallback<T>,
    missing_data_is_failure: bool,
    state: Arc<RwLock<ListState<T>>>,
}

impl<T> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            fallback: self.fallback.clone(),
            missing_data_is_failure: self.missing_data_is_failure,
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone + Send + Sync> RemoteList<T> {
    /// `name` tags the log lines; the list starts empty and not loading
    pub fn new(name: &'static str, fallback: Fallback<T>) -> Self {
        Self {
            name,
            fallback,
            missing_data_is_failure: false,
            state: Arc::new(RwLock::new(ListState {
                items: Vec::new(),
                loading: false,
                last_error: None,
                latest: 0,
                stats: FetchStats::default(),
            })),
        }
    }

    /// An ok envelope with no `data` counts as a failure instead of `[]`
    pub fn missing_data_is_failure(mut self) -> Self {
        self.missing_data_is_failure = true;
        self
    }

    /// Starts a fetch: marks the list loading and supersedes older tickets
    pub async fn begin(&self) -> FetchTicket {
        let mut state = self.state.write().await;
        state.latest += 1;
        state.loading = true;
        FetchTicket(state.latest)
    }

    /// Applies a fetch outcome. Returns false if the ticket was stale and
    /// the outcome was dropped.
    pub async fn apply(&self, ticket: FetchTicket, outcome: Result<ApiEnvelope<Vec<T>>>) -> bool {
        let mut state = self.state.write().await;
        if ticket.0 != state.latest {
            state.stats.stale_discarded += 1;
            warn!(
                "[{}] Dropping stale response (ticket {}, latest {})",
                self.name, ticket.0, state.latest
            );
            return false;
        }

        state.loading = false;
        match self.resolve(outcome) {
            Ok(items) => {
                info!("[{}] Loaded {} items", self.name, items.len());
                state.items = items;
                state.last_error = None;
                state.stats.successful_fetches += 1;
            }
            Err(e) => {
                error!("[{}] Fetch failed, using fallback: {}", self.name, e);
                state.items = self.fallback.items();
                state.last_error = Some(e.to_string());
                state.stats.failed_fetches += 1;
                state.stats.fallbacks += 1;
            }
        }
        true
    }

    /// Runs one fetch end to end; returns whether its result was applied
    pub async fn load<F>(&self, fetch: F) -> bool
    where
        F: Future<Output = Result<ApiEnvelope<Vec<T>>>>,
    {
        let ticket = self.begin().await;
        let outcome = fetch.await;
        self.apply(ticket, outcome).await
    }

    /// Makes every in-flight fetch stale, e.g. when the page goes away
    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.latest += 1;
        state.loading = false;
    }

    fn resolve(&self, outcome: Result<ApiEnvelope<Vec<T>>>) -> Result<Vec<T>> {
        let envelope = outcome?;
        if !envelope.is_ok() {
            return Err(StorefrontError::Rejected(envelope.message));
        }
        match envelope.data {
            Some(items) => Ok(items),
            None if self.missing_data_is_failure => Err(StorefrontError::Rejected(Some(
                envelope
                    .message
                    .unwrap_or_else(|| "response carried no data".to_string()),
            ))),
            None => Ok(Vec::new()),
        }
    }

    pub async fn items(&self) -> Vec<T> {
        self.state.read().await.items.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.items.is_empty()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    pub async fn stats(&self) -> FetchStats {
        self.state.read().await.stats.clone()
    }
}
