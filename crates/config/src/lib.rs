// Chunk: docs/chunks/config_resolution - Configuration contract and layered resolution

//! linetail-config: the configuration contract for the overlay engine.
//!
//! This crate provides [`Config`], the fully-populated configuration every
//! engine component reads, and [`ConfigPatch`], the partial configuration
//! contributed by one source (extension construction argument, persisted
//! settings, host defaults layer). [`resolve`] merges an ordered list of
//! patches against the built-in defaults.
//!
//! # Update discipline
//!
//! A `Config` is never mutated in place. Reconfiguration replaces the whole
//! value, so readers holding a snapshot keep a consistent view and change
//! detection is a plain deep-value comparison (`PartialEq`).
//!
//! # Merge policy
//!
//! Resolution is total: absent fields always fall back to defaults, and
//! there is no error path. Per field:
//!
//! - `recompute_delay_ms`: the **minimum** across all supplied values.
//!   Stacked sources must not compound into unbounded latency, so the most
//!   responsive setting wins. The default participates only when no source
//!   supplies the field; otherwise a source could never configure a delay
//!   longer than the default.
//! - `length_threshold`: last supplied **positive** value wins; zero does
//!   not override.
//! - `long_marker_text` / `short_marker_text`: last supplied **non-empty**
//!   value wins; empty strings do not override.

/// Default trailing-fire delay for the recompute controller, in milliseconds.
pub const DEFAULT_RECOMPUTE_DELAY_MS: u64 = 200;

/// Default line-length threshold separating short from long lines.
pub const DEFAULT_LENGTH_THRESHOLD: u32 = 80;

/// Default placeholder text appended after long lines.
pub const DEFAULT_LONG_MARKER_TEXT: &str = "●";

/// Default placeholder text appended after short lines.
pub const DEFAULT_SHORT_MARKER_TEXT: &str = "○";

/// Fully-resolved overlay configuration.
///
/// Always fully populated: every field has a value once resolution has run.
/// Equality is deep by value, which the recompute controller relies on to
/// detect configuration changes between observation cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Quiet period before the trailing recomputation fires, in milliseconds.
    pub recompute_delay_ms: u64,
    /// Lines longer than this many characters classify as long.
    pub length_threshold: u32,
    /// Placeholder text for lines over the threshold.
    pub long_marker_text: String,
    /// Placeholder text for lines at or under the threshold.
    pub short_marker_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recompute_delay_ms: DEFAULT_RECOMPUTE_DELAY_MS,
            length_threshold: DEFAULT_LENGTH_THRESHOLD,
            long_marker_text: DEFAULT_LONG_MARKER_TEXT.to_string(),
            short_marker_text: DEFAULT_SHORT_MARKER_TEXT.to_string(),
        }
    }
}

/// One partial configuration source.
///
/// Every field is optional; a `None` field contributes nothing to
/// resolution. Sources are ordered, and later sources override earlier ones
/// for the last-wins fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    pub recompute_delay_ms: Option<u64>,
    pub length_threshold: Option<u32>,
    pub long_marker_text: Option<String>,
    pub short_marker_text: Option<String>,
}

impl ConfigPatch {
    /// Creates an empty patch that contributes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.recompute_delay_ms.is_none()
            && self.length_threshold.is_none()
            && self.long_marker_text.is_none()
            && self.short_marker_text.is_none()
    }
}

/// Resolves an ordered list of partial sources into one full [`Config`].
///
/// Applies the per-field merge policy described in the module docs, left to
/// right, then falls back to defaults for fields no source supplied. The
/// function is total: any input, including an empty slice, produces a
/// fully-populated configuration.
pub fn resolve(patches: &[ConfigPatch]) -> Config {
    let mut delay: Option<u64> = None;
    let mut threshold: Option<u32> = None;
    let mut long_text: Option<&str> = None;
    let mut short_text: Option<&str> = None;

    for patch in patches {
        if let Some(supplied) = patch.recompute_delay_ms {
            delay = Some(match delay {
                Some(current) => current.min(supplied),
                None => supplied,
            });
        }
        // Zero is the falsy value for the threshold and does not override.
        if let Some(supplied) = patch.length_threshold {
            if supplied > 0 {
                threshold = Some(supplied);
            }
        }
        // Empty strings do not override.
        if let Some(supplied) = patch.long_marker_text.as_deref() {
            if !supplied.is_empty() {
                long_text = Some(supplied);
            }
        }
        if let Some(supplied) = patch.short_marker_text.as_deref() {
            if !supplied.is_empty() {
                short_text = Some(supplied);
            }
        }
    }

    Config {
        recompute_delay_ms: delay.unwrap_or(DEFAULT_RECOMPUTE_DELAY_MS),
        length_threshold: threshold.unwrap_or(DEFAULT_LENGTH_THRESHOLD),
        long_marker_text: long_text.unwrap_or(DEFAULT_LONG_MARKER_TEXT).to_string(),
        short_marker_text: short_text.unwrap_or(DEFAULT_SHORT_MARKER_TEXT).to_string(),
    }
}
