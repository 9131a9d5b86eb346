//! Trailing Debounce Utilities
//!
//! Shared by both suggestion fields: a single-slot cancellable delayed
//! task (the debounce timer) and a ticket sequence that lets late
//! responses detect they have been superseded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Single-slot trailing debounce. Scheduling a task cancels any task
/// still pending, so only the last call within the quiescence window
/// runs.
#[derive(Clone, Copy)]
pub struct Debouncer {
    handle: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            handle: StoredValue::new_local(None),
            delay_ms,
        }
    }

    pub fn schedule(&self, task: impl FnOnce() + 'static) {
        let handle = self.handle;
        handle.update_value(|h| {
            if let Some(t) = h.take() {
                t.cancel();
            }
        });
        handle.set_value(Some(Timeout::new(self.delay_ms, move || {
            handle.set_value(None);
            task();
        })));
    }

    pub fn cancel(&self) {
        self.handle.update_value(|h| {
            if let Some(t) = h.take() {
                t.cancel();
            }
        });
    }

    /// Cancel any pending task when the current reactive owner is
    /// disposed, so timers do not outlive their component.
    pub fn cancel_on_cleanup(&self) {
        let this = *self;
        on_cleanup(move || this.cancel());
    }
}

/// Monotonic ticket sequence for in-flight lookups. A response is
/// applied only while its ticket is still the newest issued, which
/// discards out-of-order arrivals for the same field.
#[derive(Clone, Default)]
pub struct RequestSeq(Arc<AtomicU64>);

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier tickets.
    pub fn issue(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// True while no newer ticket has been issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }

    /// Supersede any in-flight request without starting a new one
    /// (used when a suggestion is picked and the field settles).
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_ticket_wins() {
        let seq = RequestSeq::new();
        let first = seq.issue();
        let second = seq.issue();
        // The older request must see it was superseded.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_out_of_order_resolution() {
        // Fast typist: request A issued, then B; A's response arrives
        // after B's. Neither A's late arrival nor a replay of it may
        // be applied, while B's stays valid until superseded.
        let seq = RequestSeq::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(seq.is_current(b));
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn test_invalidate_supersedes_without_new_request() {
        let seq = RequestSeq::new();
        let ticket = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn test_independent_sequences() {
        // The two search fields own separate sequences; issuing on one
        // must not invalidate the other.
        let recipe = RequestSeq::new();
        let ingredient = RequestSeq::new();
        let r = recipe.issue();
        let _ = ingredient.issue();
        assert!(recipe.is_current(r));
    }
}
