// Chunk: docs/chunks/marker_generation - Line segmentation over visible ranges

//! Line segmentation and marker generation.
//!
//! [`generate`] is the algorithmic heart of the engine: given the host's
//! visible ranges, a text accessor, and a resolved configuration, it produces
//! the full marker set for the viewport. It is a pure function of its inputs;
//! calling it twice with the same ranges, text, and configuration yields
//! structurally equal sets, which is what lets recomputation be fired freely
//! (idempotent, no retry logic needed).
//!
//! # Segmentation
//!
//! Each visible range is processed independently: its text is sliced and
//! split on `'\n'` only (no other newline conventions). A running char
//! offset starts at the range's `from`; empty lines advance past their
//! separator without producing a marker, and every non-empty line gets one
//! marker at its end offset, classified against the length threshold.
//!
//! A line that straddles the boundary between two separately-reported
//! ranges is segmented as two independent fragments; the fragments are not
//! reassembled. Hosts that want whole-line classification across a seam
//! should merge adjacent ranges before reporting them.

use linetail_config::Config;

use crate::marker::{Marker, MarkerSet, StyleClass, VisibleRange};

/// Generates the marker set for the given visible ranges.
///
/// `slice` is the host's text accessor: it returns the document text in the
/// half-open char-offset interval `[from, to)`.
///
/// # Arguments
///
/// * `ranges` - The visible ranges, as most recently reported by the host
/// * `slice` - Char-offset text accessor for the document
/// * `config` - The resolved configuration (threshold, placeholder texts)
pub fn generate<F>(ranges: &[VisibleRange], slice: F, config: &Config) -> MarkerSet
where
    F: Fn(usize, usize) -> String,
{
    let threshold = config.length_threshold as usize;
    let mut markers = Vec::new();

    for range in ranges {
        let text = slice(range.from, range.to);
        let mut offset = range.from;

        for line in text.split('\n') {
            let len = line.chars().count();
            if len == 0 {
                // Empty line: no marker, advance past the separator.
                offset += 1;
                continue;
            }

            let line_end = offset + len;
            let marker = if len > threshold {
                Marker::new(line_end, config.long_marker_text.clone(), StyleClass::Long)
            } else {
                Marker::new(line_end, config.short_marker_text.clone(), StyleClass::Short)
            };
            markers.push(marker);

            offset = line_end + 1;
        }
    }

    MarkerSet::from_markers(markers)
}
