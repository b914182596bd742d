//! Running searches off the caller's thread and discarding stale ones.
//!
//! A search-as-you-type frontend fires a new search on every keystroke. The
//! engine has no cancellation of its own: each search runs to completion and
//! [`SearchSession`] decides, when it resolves, whether anybody still wants it.
//!
//! The tokio half is only built for native targets.

use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(all(feature = "async", not(target_arch = "wasm32")))]
use crate::{
    error::{Result, SearchError},
    property::{SearchProperty, Searchable},
    searcher::SearchResult,
};
#[cfg(all(feature = "async", not(target_arch = "wasm32")))]
use std::{borrow::Borrow, future::Future, sync::Arc};

/// Marks one search issued through a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    /// Sequence number of the search (starts at 1).
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Tracks which search is the newest so older results can be dropped.
#[derive(Debug, Default)]
pub struct SearchSession {
    latest: AtomicU64,
}

impl SearchSession {
    /// Creates a session with no searches issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new search; every earlier ticket becomes stale.
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Returns true if no search was issued after `ticket`.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Hand back `results` only if `ticket` is still the newest search.
    pub fn accept<T>(&self, ticket: SearchTicket, results: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(results)
        } else {
            tracing::debug!(ticket = ticket.0, "Discarding superseded search results");
            None
        }
    }

    /// Run [`search_async`] as a new search of this session.
    ///
    /// The ticket is taken when `run` is called, not when the future is
    /// first polled, so calls order searches even if their futures are
    /// awaited out of order. Resolves to `Ok(None)` when a newer search was
    /// started before this one finished.
    #[cfg(all(feature = "async", not(target_arch = "wasm32")))]
    pub fn run<I, F, P>(
        &self,
        query: impl Into<String>,
        items: Arc<[I]>,
        properties: F,
    ) -> impl Future<Output = Result<Option<Vec<SearchResult>>>> + '_
    where
        I: Send + Sync + 'static,
        F: Fn(&I) -> P + Send + Sync + 'static,
        P: IntoIterator + 'static,
        P::Item: Borrow<SearchProperty>,
    {
        let ticket = self.begin();
        let query = query.into();
        async move {
            let results = search_async(query, items, properties).await?;
            Ok(self.accept(ticket, results))
        }
    }
}

/// Rank `items` on tokio's blocking pool.
///
/// Resolves to the same batch [`crate::search`] would return. Must be
/// called from within a tokio runtime.
#[cfg(all(feature = "async", not(target_arch = "wasm32")))]
pub async fn search_async<I, F, P>(
    query: impl Into<String>,
    items: Arc<[I]>,
    properties: F,
) -> Result<Vec<SearchResult>>
where
    I: Send + Sync + 'static,
    F: Fn(&I) -> P + Send + Sync + 'static,
    P: IntoIterator + 'static,
    P::Item: Borrow<SearchProperty>,
{
    let query = query.into();
    tokio::task::spawn_blocking(move || crate::search(&query, &items, properties))
        .await
        .map_err(|e| SearchError::TaskFailed(e.to_string()))
}

/// [`search_async`] for items that describe their own properties.
#[cfg(all(feature = "async", not(target_arch = "wasm32")))]
pub async fn search_items_async<I>(query: impl Into<String>, items: Arc<[I]>) -> Result<Vec<SearchResult>>
where
    I: Searchable + Send + Sync + 'static,
{
    search_async(query, items, I::search_properties).await
}
