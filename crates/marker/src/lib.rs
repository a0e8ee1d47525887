// Chunk: docs/chunks/marker_generation - Marker model, generator, and rendering adapter

//! linetail-marker: markers, line segmentation, and the rendering adapter.
//!
//! This crate owns the visual side of the overlay engine:
//!
//! - [`Marker`], [`StyleClass`], and [`MarkerSet`]: the position-anchored
//!   placeholder model. Markers are immutable values with structural
//!   equality; a marker set is ordered by position and deduplicated.
//! - [`VisibleRange`]: a half-open char-offset interval the host currently
//!   renders. A document may report several during virtualized scrolling.
//! - [`generate`]: the segmentation pass that turns visible text into a
//!   marker set under a given configuration.
//! - [`MarkerElement`], [`render`], and [`ElementCache`]: the adapter that
//!   materializes a marker as an inert visual element, memoized by marker
//!   equality so unchanged markers keep their element across recomputations.
//!
//! # Offsets
//!
//! All offsets in this crate count Unicode scalar values, matching the
//! host's slice accessor. Marker positions are zero-width anchors: a marker
//! at position `p` sits between the characters at offsets `p - 1` and `p`.
//!
//! # Example
//!
//! ```
//! use linetail_config::Config;
//! use linetail_marker::{generate, StyleClass, VisibleRange};
//!
//! let text = "short\nthis one is much longer\n";
//! let config = Config {
//!     length_threshold: 10,
//!     ..Config::default()
//! };
//! let ranges = [VisibleRange::new(0, text.chars().count())];
//! let markers = generate(
//!     &ranges,
//!     |from, to| text.chars().skip(from).take(to - from).collect(),
//!     &config,
//! );
//!
//! assert_eq!(markers.len(), 2);
//! assert_eq!(markers.as_slice()[0].position, 5);
//! assert_eq!(markers.as_slice()[0].style, StyleClass::Short);
//! assert_eq!(markers.as_slice()[1].style, StyleClass::Long);
//! ```

mod element;
mod generate;
mod marker;

pub use element::{render, ElementCache, MarkerElement};
pub use generate::generate;
pub use marker::{Marker, MarkerSet, StyleClass, VisibleRange};

#[cfg(feature = "perf-instrumentation")]
pub use element::CacheStats;
