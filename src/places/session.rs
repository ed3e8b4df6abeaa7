//! Suggestion session state
//!
//! Keystroke-driven suggestion fetches can complete out of order. Each
//! fetch is stamped with a ticket from a generation counter; only the
//! response holding the newest ticket may update the suggestion list.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::error::Result;
use crate::places::Suggestion;

/// Monotonic ticket issuer for in-flight lookups
#[derive(Debug, Default)]
pub struct QueryGate {
    current: AtomicU64,
}

/// Claim on the suggestion list held by one in-flight lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl QueryGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, invalidating all previously issued ones
    pub fn issue(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket still holds the claim
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}

/// Result of submitting a lookup through a session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The response was current and now backs the suggestion list
    Applied(Vec<Suggestion>),
    /// A newer lookup started while this one was in flight
    Superseded,
}

/// Serializes suggestion updates for one input field
///
/// An optional debounce delay runs before the fetch; a keystroke during
/// the delay supersedes the pending lookup before it ever issues a
/// request.
#[derive(Debug)]
pub struct SuggestionSession {
    gate: QueryGate,
    debounce: Option<Duration>,
    suggestions: RwLock<Vec<Suggestion>>,
}

impl SuggestionSession {
    pub fn new() -> Self {
        Self {
            gate: QueryGate::new(),
            debounce: None,
            suggestions: RwLock::new(Vec::new()),
        }
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            gate: QueryGate::new(),
            debounce: Some(debounce),
            suggestions: RwLock::new(Vec::new()),
        }
    }

    /// Run a lookup and apply its results only if still current
    ///
    /// The ticket is checked twice: after the fetch completes, and again
    /// under the write lock, so a lookup that loses the race between the
    /// two checks still cannot clobber a newer result.
    pub async fn submit<F, Fut>(&self, fetch: F) -> Result<SessionOutcome>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<Vec<Suggestion>>>,
    {
        let ticket = self.gate.issue();

        if let Some(delay) = self.debounce {
            tokio::time::sleep(delay).await;
            if !self.gate.is_current(ticket) {
                return Ok(SessionOutcome::Superseded);
            }
        }

        let results = fetch().await?;

        if !self.gate.is_current(ticket) {
            return Ok(SessionOutcome::Superseded);
        }

        let mut guard = self.suggestions.write().await;
        if !self.gate.is_current(ticket) {
            return Ok(SessionOutcome::Superseded);
        }
        *guard = results.clone();

        Ok(SessionOutcome::Applied(results))
    }

    /// Current suggestion list
    pub async fn suggestions(&self) -> Vec<Suggestion> {
        self.suggestions.read().await.clone()
    }

    /// Clear the list and invalidate every in-flight lookup
    pub async fn reset(&self) {
        self.gate.issue();
        self.suggestions.write().await.clear();
    }
}

impl Default for SuggestionSession {
    fn default() -> Self {
        Self::new()
    }
}
