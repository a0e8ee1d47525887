// Chunk: docs/chunks/marker_set - Marker value types and ordered marker set

/// Classification of the line a marker annotates.
///
/// A line strictly longer than the configured threshold is `Long`; everything
/// else (including a line of exactly threshold length) is `Short`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Long,
    Short,
}

impl StyleClass {
    /// Returns the style-sheet class name hosts attach to the rendered
    /// element for this classification.
    pub fn class_name(&self) -> &'static str {
        match self {
            StyleClass::Long => "linetail-long",
            StyleClass::Short => "linetail-short",
        }
    }
}

/// One placeholder instance: a zero-width anchor at a char offset, carrying
/// display text and a style classification.
///
/// Markers are immutable once created and owned exclusively by the
/// [`MarkerSet`] containing them. Equality is structural across all three
/// fields; the rendering adapter memoizes on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    /// Insertion point in the document, counted in chars.
    pub position: usize,
    /// Display text of the placeholder.
    pub text: String,
    /// Style classification of the annotated line.
    pub style: StyleClass,
}

impl Marker {
    pub fn new(position: usize, text: impl Into<String>, style: StyleClass) -> Self {
        Self {
            position,
            text: text.into(),
            style,
        }
    }
}

/// A contiguous half-open `[from, to)` char-offset interval the host
/// currently renders.
///
/// The host may report several disjoint ranges during virtualized scrolling.
/// Ranges are transient: the engine queries them fresh on every
/// recomputation and never caches them across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub from: usize,
    pub to: usize,
}

impl VisibleRange {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Length of the interval in chars.
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }
}

/// The ordered, deduplicated collection of all markers overlaying one
/// editor instance.
///
/// Invariant: markers are in non-decreasing position order. The set is
/// constructed whole (stable sort + adjacent structural dedup) and replaced
/// atomically on every recomputation; it is never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from markers in arbitrary order.
    ///
    /// Sorts stably by position and removes structural duplicates. The
    /// stable sort keeps emission order among distinct markers that share a
    /// position (possible only if the host reports overlapping ranges).
    pub fn from_markers(mut markers: Vec<Marker>) -> Self {
        markers.sort_by_key(|m| m.position);
        markers.dedup();
        Self { markers }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }
}

impl<'a> IntoIterator for &'a MarkerSet {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
