// Chunk: docs/chunks/overlay_extension - Overlay engine crate root

//! linetail: line-length placeholder overlays for text editors.
//!
//! This crate is the decoration engine behind an ephemeral end-of-line
//! placeholder overlay: every non-empty visible line gets a zero-width
//! marker after its last character, carrying one of two placeholder texts
//! depending on whether the line exceeds a configurable length threshold.
//!
//! # Overview
//!
//! The host editor owns the document, the viewport, and the event loop; the
//! engine owns the derived overlay. Per editor instance, a [`MarkerOverlay`]
//! holds the swappable configuration slot, the debounce state machine, and
//! the active marker set:
//!
//! - Document, viewport, and configuration changes all funnel into one
//!   [`UpdateNotice`] observation cycle.
//! - The [`RecomputeController`] fires the generator immediately on the
//!   first trigger of a burst and once more after the quiet period, so a
//!   burst of any size costs exactly two segmentation passes.
//! - [`generate`](linetail_marker::generate) turns visible ranges into an
//!   ordered, deduplicated [`MarkerSet`](linetail_marker::MarkerSet), and
//!   the element cache rematerializes only the markers that changed.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use linetail::{Config, DocumentView, MarkerOverlay, UpdateNotice, VisibleRange};
//!
//! struct Doc(String);
//!
//! impl DocumentView for Doc {
//!     fn visible_ranges(&self) -> Vec<VisibleRange> {
//!         vec![VisibleRange::new(0, self.0.chars().count())]
//!     }
//!     fn slice(&self, from: usize, to: usize) -> String {
//!         self.0.chars().skip(from).take(to - from).collect()
//!     }
//! }
//!
//! let doc = Doc("hello\n".to_string());
//! let mut overlay = MarkerOverlay::new(&doc, Some(Config::default()));
//! assert_eq!(overlay.markers().len(), 1);
//!
//! // A content edit fires the leading-edge recomputation immediately.
//! overlay.on_update(&UpdateNotice::doc(), &doc, Instant::now());
//! ```
//!
//! # Concurrency
//!
//! Everything runs on the host's single event-processing thread. The only
//! asynchrony is time-based: the controller exposes a deadline and the host
//! schedules its own wakeup for it. Within one instance, recomputations are
//! totally ordered; across instances there is no ordering and none is
//! needed, since each owns an independent marker set.

mod controller;
mod effect;
mod extension;
mod host;
mod settings;
mod settings_debouncer;

pub use controller::RecomputeController;
pub use effect::{reconfigure, ConfigSlot, Reconfigure};
pub use extension::{broadcast_reconfigure, MarkerOverlay};
pub use host::{DocumentView, UpdateNotice};
pub use settings::{load_settings, save_settings, settings_file_path, Settings};
pub use settings_debouncer::{SettingsDebouncer, DEFAULT_SETTINGS_DEBOUNCE_MS};

// Re-export the member crates' public surface so hosts depend on one crate.
pub use linetail_config::{
    resolve, Config, ConfigPatch, DEFAULT_LENGTH_THRESHOLD, DEFAULT_LONG_MARKER_TEXT,
    DEFAULT_RECOMPUTE_DELAY_MS, DEFAULT_SHORT_MARKER_TEXT,
};
pub use linetail_marker::{
    generate, render, ElementCache, Marker, MarkerElement, MarkerSet, StyleClass, VisibleRange,
};

#[cfg(feature = "perf-instrumentation")]
pub use linetail_marker::CacheStats;
