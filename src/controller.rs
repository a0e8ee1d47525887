// Chunk: docs/chunks/recompute_debounce - Leading+trailing debounce for recomputation

//! Debounce state machine for the recompute controller.
//!
//! Recomputing the marker overlay on every keystroke would cost a full
//! segmentation pass per input event. [`RecomputeController`] bounds that
//! cost: the first trigger in a burst fires immediately (the leading edge,
//! so the very first keystroke is reflected), further triggers within the
//! quiet window only push the deadline out, and when the window finally
//! elapses one trailing recomputation captures the settled state. A burst of
//! any size costs exactly two generator runs.
//!
//! This is a pure data structure with no timers or I/O: the current
//! timestamp is passed into every transition (for testability), and the
//! host schedules its own wakeup for [`deadline`](RecomputeController::deadline).
//! At most one deadline is pending per controller; re-arming replaces it,
//! which is also what cancels the previously scheduled trailing fire.

use std::time::{Duration, Instant};

/// Per-editor-instance debounce state machine.
///
/// Two states, encoded in `deadline`:
/// - `None` — idle; the next trigger fires immediately and arms the window.
/// - `Some(t)` — a trailing fire is pending at `t`; triggers re-arm, and
///   `poll` fires once `t` is reached.
#[derive(Debug, Clone)]
pub struct RecomputeController {
    /// Quiet window between the last trigger and the trailing fire.
    delay: Duration,
    /// Pending trailing-fire deadline, if any.
    deadline: Option<Instant>,
}

impl RecomputeController {
    /// Creates an idle controller with the given quiet window.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// Replaces the quiet window.
    ///
    /// Takes effect from the next arming decision: a window already pending
    /// keeps the deadline it was armed with.
    pub fn set_delay(&mut self, delay_ms: u64) {
        self.delay = Duration::from_millis(delay_ms);
    }

    /// Current quiet window in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay.as_millis() as u64
    }

    /// Registers a trigger (document, viewport, or configuration change).
    ///
    /// Returns `true` when the caller should run the generator immediately
    /// (leading edge: the controller was idle). Always (re)arms the trailing
    /// deadline at `now + delay`; while a fire is pending, triggers only
    /// push the deadline out.
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp (passed in for testability)
    pub fn on_trigger(&mut self, now: Instant) -> bool {
        let leading = self.deadline.is_none();
        self.deadline = Some(now + self.delay);
        leading
    }

    /// Checks whether the pending trailing fire is due.
    ///
    /// Returns `true` exactly once per armed window: when a deadline exists
    /// and `now` has reached it, the controller returns to idle and reports
    /// the fire. Idle controllers always return `false`.
    ///
    /// # Arguments
    ///
    /// * `now` - The current timestamp (passed in for testability)
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// The pending trailing-fire deadline, for host timer scheduling.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true while a trailing fire is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Cancels any pending trailing fire.
    ///
    /// Teardown path: a destroyed editor instance must produce zero further
    /// generator invocations.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
