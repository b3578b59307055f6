//! Screen view state driven by fetch cycles.
//!
//! A screen is always in exactly one of three phases: loading, ready with
//! data, or error with a retry action. Every fetch cycle carries a
//! monotonically increasing token; a cycle's outcome is applied to the view
//! only if no newer cycle has been applied since. Superseded cycles are never
//! cancelled — their results are simply discarded on arrival, so rapid period
//! changes cannot leave the screen showing an older cycle's data.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::AppError;

/// Issues fetch-cycle tokens in strictly increasing order.
#[derive(Debug, Default)]
pub struct CycleCounter {
    next: AtomicU64,
}

impl CycleCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new cycle and returns its token.
    pub fn begin(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// What a screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPhase<T> {
    /// A fetch cycle is outstanding and nothing has been applied yet.
    Loading,
    /// The newest applied cycle succeeded.
    Ready(T),
    /// The newest applied cycle failed; the message backs the error banner.
    Error(String),
}

/// Per-screen state, updated by at most one fetch-cycle outcome at a time.
#[derive(Debug)]
pub struct ViewState<T> {
    phase: ViewPhase<T>,
    applied_cycle: u64,
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self {
            phase: ViewPhase::Loading,
            applied_cycle: 0,
        }
    }

    pub fn phase(&self) -> &ViewPhase<T> {
        &self.phase
    }

    /// Returns the data of a ready view, if any.
    pub fn data(&self) -> Option<&T> {
        match &self.phase {
            ViewPhase::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Puts the screen back into the loading phase for a new cycle.
    pub fn mark_loading(&mut self) {
        self.phase = ViewPhase::Loading;
    }

    /// Applies one cycle's outcome.
    ///
    /// Returns `false` (and leaves the view untouched) when a newer cycle has
    /// already been applied — the stale result is discarded, not raced.
    pub fn apply(&mut self, cycle: u64, outcome: Result<T, AppError>) -> bool {
        if cycle <= self.applied_cycle {
            tracing::debug!(
                cycle,
                newest = self.applied_cycle,
                "discarding stale fetch cycle result"
            );
            return false;
        }

        self.applied_cycle = cycle;
        self.phase = match outcome {
            Ok(data) => ViewPhase::Ready(data),
            Err(e) => ViewPhase::Error(e.to_string()),
        };

        true
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_is_monotonic() {
        let counter = CycleCounter::new();
        let first = counter.begin();
        let second = counter.begin();
        assert!(second > first);
    }

    #[test]
    fn test_starts_loading() {
        let state: ViewState<u32> = ViewState::new();
        assert_eq!(*state.phase(), ViewPhase::Loading);
        assert!(state.data().is_none());
    }

    #[test]
    fn test_apply_success() {
        let counter = CycleCounter::new();
        let mut state = ViewState::new();

        let cycle = counter.begin();
        assert!(state.apply(cycle, Ok(42)));
        assert_eq!(state.data(), Some(&42));
    }

    #[test]
    fn test_apply_error() {
        let counter = CycleCounter::new();
        let mut state: ViewState<u32> = ViewState::new();

        let cycle = counter.begin();
        assert!(state.apply(cycle, Err(AppError::transport("connection refused"))));

        match state.phase() {
            ViewPhase::Error(message) => assert!(message.contains("connection refused")),
            other => panic!("expected error phase, got {other:?}"),
        }
    }

    #[test]
    fn test_stale_cycle_is_discarded() {
        let counter = CycleCounter::new();
        let mut state = ViewState::new();

        // Two overlapping cycles: the newer one completes first.
        let older = counter.begin();
        let newer = counter.begin();

        assert!(state.apply(newer, Ok("newer")));
        assert!(!state.apply(older, Ok("older")));

        assert_eq!(state.data(), Some(&"newer"));
    }

    #[test]
    fn test_stale_error_cannot_clobber_newer_data() {
        let counter = CycleCounter::new();
        let mut state = ViewState::new();

        let older = counter.begin();
        let newer = counter.begin();

        assert!(state.apply(newer, Ok(7)));
        assert!(!state.apply(older, Err(AppError::transport("timeout"))));

        assert_eq!(state.data(), Some(&7));
    }

    #[test]
    fn test_same_cycle_applies_once() {
        let counter = CycleCounter::new();
        let mut state = ViewState::new();

        let cycle = counter.begin();
        assert!(state.apply(cycle, Ok(1)));
        assert!(!state.apply(cycle, Ok(2)));
        assert_eq!(state.data(), Some(&1));
    }

    #[test]
    fn test_mark_loading_resets_phase() {
        let counter = CycleCounter::new();
        let mut state = ViewState::new();

        state.apply(counter.begin(), Ok(1));
        state.mark_loading();
        assert_eq!(*state.phase(), ViewPhase::Loading);

        // A later cycle still applies after the reset.
        assert!(state.apply(counter.begin(), Ok(2)));
        assert_eq!(state.data(), Some(&2));
    }
}
