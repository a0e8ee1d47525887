// Chunk: docs/chunks/element_rendering - Marker to inert visual element conversion
// Chunk: docs/chunks/element_cache - Element memoization by marker equality

//! Rendering adapter: markers to inert visual elements.
//!
//! [`render`] converts an abstract [`Marker`] into a [`MarkerElement`], the
//! concrete value a host materializes in its overlay layer. The element is
//! plain data: it carries no callbacks or input hooks, so it cannot capture
//! or forward user events, and it lives outside document content, so it can
//! never be selected into a copy of the underlying text.
//!
//! # Memoization
//!
//! Marker equality is structural, and `render` is a pure function of the
//! marker's fields, so an element only needs materializing once per distinct
//! marker. [`ElementCache`] carries elements across recomputations: after an
//! edit, the markers for untouched lines compare equal to their predecessors
//! and reuse the previous element instead of building a new one.

use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::marker::{Marker, MarkerSet, StyleClass};

/// The materialized form of one marker.
///
/// Deterministic pure function of the marker's fields (see [`render`]).
/// `columns` is the display width of the placeholder text on a monospace
/// grid, which is what hosts need to reserve room after the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerElement {
    text: String,
    style: StyleClass,
    columns: usize,
}

impl MarkerElement {
    /// The placeholder text to draw.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The style classification of the annotated line.
    pub fn style(&self) -> StyleClass {
        self.style
    }

    /// The style-sheet class name for this element.
    pub fn class_name(&self) -> &'static str {
        self.style.class_name()
    }

    /// Display width of the placeholder text in terminal columns.
    pub fn columns(&self) -> usize {
        self.columns
    }
}

/// Materializes a marker as an inert visual element.
///
/// Pure and deterministic: equal markers always produce equal elements,
/// which is what makes [`ElementCache`] correct.
pub fn render(marker: &Marker) -> MarkerElement {
    MarkerElement {
        text: marker.text.clone(),
        style: marker.style,
        columns: UnicodeWidthStr::width(marker.text.as_str()),
    }
}

/// Carries rendered elements across marker-set replacements.
///
/// `sync` walks a freshly generated set in order, reusing the element of any
/// marker that already existed in the previous set and rendering the rest.
/// Elements whose markers disappeared are dropped.
#[derive(Debug, Default)]
pub struct ElementCache {
    elements: HashMap<Marker, MarkerElement>,
    #[cfg(feature = "perf-instrumentation")]
    stats: CacheStats,
}

impl ElementCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of markers currently cached.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Synchronizes the cache with a freshly generated marker set and
    /// returns the elements in set order.
    ///
    /// Markers present in the previous set keep their element; new markers
    /// are rendered. After the call the cache holds exactly the elements of
    /// `set`.
    pub fn sync(&mut self, set: &MarkerSet) -> Vec<MarkerElement> {
        let mut next = HashMap::with_capacity(set.len());
        let mut ordered = Vec::with_capacity(set.len());

        for marker in set {
            let element = match self.elements.remove(marker) {
                Some(existing) => {
                    #[cfg(feature = "perf-instrumentation")]
                    self.stats.record_hit();
                    existing
                }
                None => {
                    #[cfg(feature = "perf-instrumentation")]
                    self.stats.record_miss();
                    render(marker)
                }
            };
            next.insert(marker.clone(), element.clone());
            ordered.push(element);
        }

        self.elements = next;
        ordered
    }

    /// Drops every cached element.
    ///
    /// Call on editor-instance teardown so no element outlives its overlay.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns the cache statistics collected so far.
    #[cfg(feature = "perf-instrumentation")]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

// =============================================================================
// Performance Instrumentation
// =============================================================================

/// Statistics about element reuse for debugging and tuning.
#[cfg(feature = "perf-instrumentation")]
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Elements served from the previous set without re-rendering.
    pub hits: usize,
    /// Elements that required rendering.
    pub misses: usize,
}

#[cfg(feature = "perf-instrumentation")]
impl CacheStats {
    /// Records a reuse.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Records a render.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Returns the reuse rate as a percentage (0.0 to 100.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
