// Chunk: docs/chunks/overlay_extension - End-to-end overlay lifecycle tests

//! Integration tests for the overlay engine.
//!
//! These tests drive a scripted in-memory host through the full lifecycle:
//! install, edit bursts, viewport changes, reconfiguration broadcast, and
//! teardown, and verify:
//! - Markers exist before first paint and match the documented scenario
//! - Debouncing bounds a burst to one leading and one trailing generation
//! - Reconfiguration reaches opted-in instances and only those
//! - Settings changes propagate through the 1-second settings debounce
//! - A destroyed instance produces zero further generator runs

use std::cell::Cell;
use std::time::{Duration, Instant};

use linetail::{
    broadcast_reconfigure, Config, DocumentView, MarkerOverlay, SettingsDebouncer, Settings,
    StyleClass, UpdateNotice, VisibleRange,
};

// =============================================================================
// Scripted host
// =============================================================================

/// An in-memory document with scriptable visible ranges.
///
/// Counts how many times the engine queries the viewport, which is exactly
/// once per generator run - the tests use that as the invocation counter.
struct ScriptedDoc {
    text: String,
    /// Explicit ranges, or `None` for "the whole document".
    ranges: Option<Vec<VisibleRange>>,
    generations: Cell<usize>,
}

impl ScriptedDoc {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ranges: None,
            generations: Cell::new(0),
        }
    }

    fn generations(&self) -> usize {
        self.generations.get()
    }
}

impl DocumentView for ScriptedDoc {
    fn visible_ranges(&self) -> Vec<VisibleRange> {
        self.generations.set(self.generations.get() + 1);
        match &self.ranges {
            Some(ranges) => ranges.clone(),
            None => vec![VisibleRange::new(0, self.text.chars().count())],
        }
    }

    fn slice(&self, from: usize, to: usize) -> String {
        self.text.chars().skip(from).take(to - from).collect()
    }
}

fn threshold_ten() -> Config {
    Config {
        length_threshold: 10,
        recompute_delay_ms: 100,
        ..Config::default()
    }
}

// =============================================================================
// Whole-document scenario
// =============================================================================

/// The canonical scenario: one short line, one empty line, one long line.
#[test]
fn test_whole_document_scenario() {
    let doc = ScriptedDoc::new("short\n\nthis line is definitely longer than ten\n");
    let overlay = MarkerOverlay::new(&doc, Some(threshold_ten()));

    let markers = overlay.markers().as_slice();
    assert_eq!(markers.len(), 2);

    // "short" ends at offset 5; the empty line produces nothing.
    assert_eq!(markers[0].position, 5);
    assert_eq!(markers[0].style, StyleClass::Short);

    // The third line starts at offset 7 and runs 39 chars to offset 46.
    assert_eq!(markers[1].position, 46);
    assert_eq!(markers[1].style, StyleClass::Long);

    // Order invariant over the produced set.
    for pair in markers.windows(2) {
        assert!(pair[0].position <= pair[1].position);
    }

    // Elements are materialized in the same order, carrying the configured
    // placeholder texts.
    let elements = overlay.elements();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].text(), overlay.config().short_marker_text);
    assert_eq!(elements[1].text(), overlay.config().long_marker_text);
}

/// Virtualized scrolling reports two disjoint windows; markers come out
/// sorted across them and nothing spans the seam.
#[test]
fn test_disjoint_visible_ranges() {
    let mut doc = ScriptedDoc::new("aaaa\nbb\ncccc\ndd\nee\n");
    doc.ranges = Some(vec![VisibleRange::new(8, 15), VisibleRange::new(0, 5)]);
    let overlay = MarkerOverlay::new(&doc, Some(threshold_ten()));

    let positions: Vec<usize> = overlay.markers().iter().map(|m| m.position).collect();
    // "aaaa" ends at 4; "cccc" at 12; "dd" at 15. "bb" and "ee" are outside
    // the reported windows.
    assert_eq!(positions, vec![4, 12, 15]);
}

// =============================================================================
// Debounced lifecycle
// =============================================================================

/// A typing burst costs exactly two generator runs: the leading edge on the
/// first keystroke and the trailing correction after the quiet period.
#[test]
fn test_edit_burst_costs_two_generations() {
    let mut doc = ScriptedDoc::new("a\n");
    let mut overlay = MarkerOverlay::new(&doc, Some(threshold_ten()));
    let t0 = Instant::now();
    assert_eq!(doc.generations(), 1);

    // Eight keystrokes, 10ms apart.
    for i in 1..=8u64 {
        doc.text = format!("{}\n", "a".repeat(1 + i as usize));
        let refreshed = overlay.on_update(
            &UpdateNotice::doc(),
            &doc,
            t0 + Duration::from_millis(i * 10),
        );
        // Only the first keystroke recomputes immediately.
        assert_eq!(refreshed, i == 1);
    }
    assert_eq!(doc.generations(), 2);

    // Markers still reflect the leading fire (two chars typed by then).
    assert_eq!(overlay.markers().as_slice()[0].position, 2);

    // The quiet period ends 100ms after the last keystroke (t=80ms).
    assert!(!overlay.poll(&doc, t0 + Duration::from_millis(179)));
    assert!(overlay.poll(&doc, t0 + Duration::from_millis(180)));
    assert_eq!(doc.generations(), 3);

    // The trailing fire captured the settled document: nine chars.
    assert_eq!(overlay.markers().as_slice()[0].position, 9);
}

/// Scrolling is a trigger like any other: the viewport boolean alone fires
/// the generator against the newly visible ranges.
#[test]
fn test_viewport_change_recomputes_for_new_ranges() {
    let mut doc = ScriptedDoc::new("aaaa\nbbbb\ncccc\n");
    doc.ranges = Some(vec![VisibleRange::new(0, 5)]);
    let mut overlay = MarkerOverlay::new(&doc, Some(threshold_ten()));
    assert_eq!(overlay.markers().len(), 1);

    doc.ranges = Some(vec![VisibleRange::new(5, 15)]);
    overlay.on_update(&UpdateNotice::viewport(), &doc, Instant::now());

    let positions: Vec<usize> = overlay.markers().iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![9, 14]);
}

/// Destroying an editor instance while a trailing fire is pending produces
/// zero further generator runs.
#[test]
fn test_teardown_with_pending_fire() {
    let doc = ScriptedDoc::new("hello\n");
    let mut overlay = MarkerOverlay::new(&doc, Some(threshold_ten()));
    let t0 = Instant::now();

    overlay.on_update(&UpdateNotice::doc(), &doc, t0);
    assert!(overlay.is_pending());
    let generations_at_detach = doc.generations();

    overlay.detach();
    assert!(!overlay.poll(&doc, t0 + Duration::from_millis(1000)));
    assert!(!overlay.is_pending());
    assert_eq!(doc.generations(), generations_at_detach);
}

// =============================================================================
// Reconfiguration broadcast
// =============================================================================

/// A broadcast reaches every opted-in editor; each one re-renders with the
/// new configuration on its next observation cycle.
#[test]
fn test_broadcast_reconfigure_across_editors() {
    let doc_a = ScriptedDoc::new("aaaa\n");
    let doc_b = ScriptedDoc::new("bbbb bbbb bbbb\n");
    let doc_c = ScriptedDoc::new("cccc\n");

    let mut editor_a = MarkerOverlay::new(&doc_a, Some(threshold_ten()));
    let mut editor_b = MarkerOverlay::new(&doc_b, Some(threshold_ten()));
    // Installed without a configuration: defaults, ignores reconfiguration.
    let mut editor_c = MarkerOverlay::new(&doc_c, None);

    let new_config = Config {
        length_threshold: 3,
        ..threshold_ten()
    };
    broadcast_reconfigure(
        vec![&mut editor_a, &mut editor_b, &mut editor_c],
        &new_config,
    );

    let now = Instant::now();
    assert!(editor_a.on_update(&UpdateNotice::none(), &doc_a, now));
    assert!(editor_b.on_update(&UpdateNotice::none(), &doc_b, now));
    assert!(!editor_c.on_update(&UpdateNotice::none(), &doc_c, now));

    // Threshold 3 reclassifies the 4-char lines as long.
    assert_eq!(editor_a.markers().as_slice()[0].style, StyleClass::Long);
    assert_eq!(editor_b.markers().as_slice()[0].style, StyleClass::Long);
    assert_eq!(editor_c.config(), &Config::default());
}

// =============================================================================
// Settings propagation
// =============================================================================

/// Settings edits ride their own 1-second debounce before the resolved
/// configuration is broadcast; the editors' own debounce then handles the
/// recomputation as usual.
#[test]
fn test_settings_propagate_after_settings_debounce() {
    let doc = ScriptedDoc::new("aaaa\n");
    let mut overlay = MarkerOverlay::new(&doc, Some(threshold_ten()));

    let mut settings = Settings::default();
    let mut debouncer = SettingsDebouncer::with_default();
    let t0 = Instant::now();

    // The user drags the threshold slider: two edits half a second apart.
    settings.length_threshold = 20;
    debouncer.register(t0);
    settings.length_threshold = 3;
    debouncer.register(t0 + Duration::from_millis(500));

    // Nothing propagates during the drag.
    assert!(!debouncer.flush_ready(t0 + Duration::from_millis(1000)));
    assert_eq!(overlay.config().length_threshold, 10);

    // One second after the last edit, the final value propagates - the
    // intermediate 20 was never broadcast.
    let flush_at = t0 + Duration::from_millis(1500);
    assert!(debouncer.flush_ready(flush_at));
    broadcast_reconfigure(vec![&mut overlay], &settings.resolve());

    assert!(overlay.on_update(&UpdateNotice::none(), &doc, flush_at));
    assert_eq!(overlay.config().length_threshold, 3);
    assert_eq!(overlay.markers().as_slice()[0].style, StyleClass::Long);
}

/// Falsy settings values fall back to defaults on their way through
/// resolution instead of reaching the editors.
#[test]
fn test_falsy_settings_resolve_to_defaults() {
    let settings = Settings {
        length_threshold: 0,
        short_marker_text: String::new(),
        ..Settings::default()
    };
    let config = settings.resolve();
    assert_eq!(config.length_threshold, Config::default().length_threshold);
    assert_eq!(
        config.short_marker_text,
        Config::default().short_marker_text
    );
}

// =============================================================================
// Idempotence
// =============================================================================

/// Re-running the full cycle over unchanged input replaces the marker set
/// with a structurally equal one.
#[test]
fn test_recompute_over_unchanged_input_is_stable() {
    let doc = ScriptedDoc::new("one\ntwo two two two\n");
    let mut overlay = MarkerOverlay::new(&doc, Some(threshold_ten()));
    let before = overlay.markers().clone();
    let t0 = Instant::now();

    overlay.on_update(&UpdateNotice::viewport(), &doc, t0);
    assert_eq!(overlay.markers(), &before);

    overlay.poll(&doc, t0 + Duration::from_millis(100));
    assert_eq!(overlay.markers(), &before);
}
