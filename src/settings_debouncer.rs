// Chunk: docs/chunks/settings_propagation - Settings change debouncing

//! Debouncing logic for persisted-settings changes.
//!
//! When the user edits a setting, we wait for a brief period (the debounce
//! window) before propagating the new configuration into the running
//! editors. If another settings change arrives within this window, the
//! timer resets. Settings mutate at human speed (sliders, text fields), so
//! the window here is much longer than the recompute controller's and the
//! two debounces stay independent.
//!
//! This is a pure data structure with no I/O. The settings layer calls
//! `register()` on each change and periodically calls `flush_ready()`; a
//! `true` flush means "resolve the settings into a configuration and
//! broadcast it now".

use std::time::{Duration, Instant};

/// Default settings debounce window in milliseconds.
pub const DEFAULT_SETTINGS_DEBOUNCE_MS: u64 = 1000;

/// Debounces settings changes, coalescing rapid successive edits.
///
/// Unlike the recompute controller this is trailing-only: nothing propagates
/// until the window has been quiet, because every intermediate value of a
/// dragged slider is noise.
pub struct SettingsDebouncer {
    /// When the settings last changed, if a propagation is pending.
    pending: Option<Instant>,
    /// Debounce window duration.
    debounce_duration: Duration,
}

impl SettingsDebouncer {
    /// Creates a new debouncer with the given debounce window.
    ///
    /// # Arguments
    ///
    /// * `debounce_ms` - The debounce window in milliseconds
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            pending: None,
            debounce_duration: Duration::from_millis(debounce_ms),
        }
    }

    /// Creates a new debouncer with the default debounce window (1 s).
    pub fn with_default() -> Self {
        Self::new(DEFAULT_SETTINGS_DEBOUNCE_MS)
    }

    /// Registers a settings change.
    ///
    /// If a propagation is already pending, the timestamp is reset
    /// (extending the debounce window).
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp (passed in for testability)
    pub fn register(&mut self, now: Instant) {
        self.pending = Some(now);
    }

    /// Checks whether the debounce window has expired.
    ///
    /// Returns `true` when the last registered change is at least the
    /// window old; the pending state is cleared, so propagation happens
    /// once per quiet period.
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp (passed in for testability)
    pub fn flush_ready(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(changed_at) if now.duration_since(changed_at) >= self.debounce_duration => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Returns true if a propagation is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discards any pending propagation.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
