// Chunk: docs/chunks/overlay_extension - Per-editor overlay extension unit

//! The installable overlay unit: per-editor state tying the configuration
//! slot, the recompute controller, and the marker set together.
//!
//! One [`MarkerOverlay`] exists per editor instance that installed the
//! extension. Construction runs the generator synchronously so markers
//! exist before the instance's first paint. Afterwards the host drives two
//! entry points on its event thread:
//!
//! - [`on_update`](MarkerOverlay::on_update) on every transaction, with the
//!   unified change notice. A relevant change (document, viewport, or a
//!   configuration swap detected by deep comparison) fires the generator on
//!   the leading edge and arms the trailing window.
//! - [`poll`](MarkerOverlay::poll) when the scheduled deadline elapses,
//!   firing the trailing recomputation that captures the settled state.
//!
//! Both return `true` when the marker set was replaced and the host should
//! refresh its render. Replacement is atomic: the previous set and the
//! elements of vanished markers are discarded in the same step.
//!
//! Generation is pure over its inputs, so there is no retry or recovery
//! here; a panic in a host accessor propagates to the host's own fault
//! boundary, and the next trigger simply recomputes from fresh input.

use std::time::Instant;

use linetail_config::Config;
use linetail_marker::{generate, ElementCache, MarkerElement, MarkerSet};

use crate::controller::RecomputeController;
use crate::effect::{reconfigure, ConfigSlot, Reconfigure};
use crate::host::{DocumentView, UpdateNotice};

/// Per-editor overlay state.
pub struct MarkerOverlay {
    /// The swappable configuration slot (reconfigurable iff installed with
    /// an initial configuration).
    slot: ConfigSlot,
    /// Snapshot of the configuration the controller last observed; compared
    /// against the slot to detect reconfiguration.
    seen_config: Config,
    /// Debounce state machine for this instance.
    controller: RecomputeController,
    /// The active marker set, replaced atomically on every recomputation.
    markers: MarkerSet,
    /// Rendered elements in marker-set order.
    elements: Vec<MarkerElement>,
    /// Element memoization across recomputations.
    cache: ElementCache,
}

impl MarkerOverlay {
    /// Installs the overlay into an editor instance.
    ///
    /// Runs the generator synchronously once, so the marker set is available
    /// before first paint. An instance installed with `None` runs on pure
    /// defaults and ignores reconfiguration descriptors.
    pub fn new(doc: &impl DocumentView, initial: Option<Config>) -> Self {
        let slot = ConfigSlot::install(initial);
        let seen_config = slot.current().clone();
        let controller = RecomputeController::new(seen_config.recompute_delay_ms);

        let markers = generate_from(doc, &seen_config);
        let mut cache = ElementCache::new();
        let elements = cache.sync(&markers);

        Self {
            slot,
            seen_config,
            controller,
            markers,
            elements,
            cache,
        }
    }

    /// Submits a reconfiguration descriptor to this instance.
    ///
    /// Returns `true` if the slot accepted it. A defaults-only instance
    /// ignores the descriptor (no-op, not an error); the swap itself does
    /// not recompute - the controller picks the change up on the next
    /// update cycle.
    pub fn dispatch(&mut self, effect: Reconfigure) -> bool {
        self.slot.apply(effect)
    }

    /// Observation cycle, called on every host transaction.
    ///
    /// Detects configuration swaps by deep-value comparison, folds them into
    /// the trigger decision alongside the notice's booleans, and fires the
    /// generator on the leading edge when the controller was idle. The
    /// controller's delay is updated from a new configuration before the
    /// scheduling decision, so a shortened delay takes effect with this very
    /// window.
    ///
    /// Returns `true` when the marker set was replaced.
    pub fn on_update(
        &mut self,
        notice: &UpdateNotice,
        doc: &impl DocumentView,
        now: Instant,
    ) -> bool {
        let config_changed = self.slot.current() != &self.seen_config;
        if config_changed {
            self.seen_config = self.slot.current().clone();
            self.controller.set_delay(self.seen_config.recompute_delay_ms);
        }

        if !notice.doc_changed && !notice.viewport_changed && !config_changed {
            return false;
        }

        if self.controller.on_trigger(now) {
            self.recompute(doc);
            true
        } else {
            false
        }
    }

    /// Trailing-edge poll, called when the scheduled deadline elapses.
    ///
    /// Fires the trailing recomputation capturing the state after a burst.
    /// Safe to call on any tick: an idle instance returns `false` without
    /// touching the document.
    ///
    /// Returns `true` when the marker set was replaced.
    pub fn poll(&mut self, doc: &impl DocumentView, now: Instant) -> bool {
        if self.controller.poll(now) {
            self.recompute(doc);
            true
        } else {
            false
        }
    }

    /// The active marker set.
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    /// The rendered elements, in marker-set order.
    pub fn elements(&self) -> &[MarkerElement] {
        &self.elements
    }

    /// The configuration the controller currently operates under.
    pub fn config(&self) -> &Config {
        &self.seen_config
    }

    /// The pending trailing-fire deadline, for host timer scheduling.
    pub fn deadline(&self) -> Option<Instant> {
        self.controller.deadline()
    }

    /// Returns true while a trailing fire is pending.
    pub fn is_pending(&self) -> bool {
        self.controller.is_pending()
    }

    /// Tears the instance down.
    ///
    /// Cancels the pending trailing fire and drops the overlay state, so a
    /// destroyed editor instance produces zero further generator runs. The
    /// host must not schedule callbacks for this instance afterwards.
    pub fn detach(&mut self) {
        self.controller.cancel();
        self.markers = MarkerSet::new();
        self.elements.clear();
        self.cache.clear();
    }

    fn recompute(&mut self, doc: &impl DocumentView) {
        let next = generate_from(doc, &self.seen_config);
        self.elements = self.cache.sync(&next);
        self.markers = next;
    }
}

fn generate_from(doc: &impl DocumentView, config: &Config) -> MarkerSet {
    let ranges = doc.visible_ranges();
    generate(&ranges, |from, to| doc.slice(from, to), config)
}

/// Broadcasts a new configuration to every open editor instance.
///
/// Builds one descriptor per instance and dispatches it; defaults-only
/// instances ignore theirs. The host supplies the enumeration, however it
/// tracks open editors.
pub fn broadcast_reconfigure<'a, I>(editors: I, config: &Config)
where
    I: IntoIterator<Item = &'a mut MarkerOverlay>,
{
    for editor in editors {
        editor.dispatch(reconfigure(config.clone()));
    }
}
