// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live sort range and the key→delta table.

use grapnel_grab::{Key, KeyInput};

/// The externally supplied numeric range a sort operates over.
///
/// Live: the owning screen replaces it as levels or datasets change, and the
/// controller re-validates its selection against the new range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SortRange {
    min: f64,
    max: f64,
}

impl SortRange {
    /// Creates a range. `min` must not exceed `max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(min <= max, "SortRange requires min <= max");
        Self { min, max }
    }

    /// The inclusive lower bound.
    #[must_use]
    #[inline]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// The inclusive upper bound.
    #[must_use]
    #[inline]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// The length of the range (`max - min`).
    #[must_use]
    #[inline]
    pub fn len(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the range is a single point.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0.0
    }

    /// Clamps `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether `value` lies inside the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Step sizes for the key→delta table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeltaConfig {
    /// The plain arrow-key step.
    pub step: f64,
    /// The shifted arrow-key step.
    pub shift_step: f64,
    /// The page-up/page-down step; `None` derives `ceil(range length / 5)`.
    pub page_step: Option<f64>,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            shift_step: 2.0,
            page_step: None,
        }
    }
}

impl DeltaConfig {
    /// The effective page step for `range`.
    #[must_use]
    pub fn page_step(&self, range: &SortRange) -> f64 {
        self.page_step.unwrap_or_else(|| ceil(range.len() / 5.0))
    }
}

// f64::ceil is not available in a bare `no_std` build; range lengths are
// small non-negative values, so a truncating cast is exact here.
fn ceil(value: f64) -> f64 {
    #[expect(clippy::cast_possible_truncation, reason = "range lengths are small")]
    let truncated = value as i64 as f64;
    if value > truncated {
        truncated + 1.0
    } else {
        truncated
    }
}

/// Maps a key press to the signed delta it applies, or `None` when the key
/// does not participate in sorting.
///
/// The table (with `−`/`+` relative to the range direction):
///
/// | key(s)                              | delta          |
/// |-------------------------------------|----------------|
/// | home                                | −(range length)|
/// | end                                 | +(range length)|
/// | page up                             | +page step     |
/// | page down                           | −page step     |
/// | left / down / `a` / `s`             | −step          |
/// | right / up / `d` / `w`              | +step          |
/// | shift + any of the above arrows/letters | ∓shift step |
/// | anything else                       | `None`         |
#[must_use]
pub fn delta_for_key(input: KeyInput, config: &DeltaConfig, range: &SortRange) -> Option<f64> {
    let step = if input.shift {
        config.shift_step
    } else {
        config.step
    };
    match input.key {
        Key::Home => Some(-range.len()),
        Key::End => Some(range.len()),
        Key::PageUp => Some(config.page_step(range)),
        Key::PageDown => Some(-config.page_step(range)),
        Key::ArrowLeft | Key::ArrowDown | Key::Char('a' | 'A' | 's' | 'S') => Some(-step),
        Key::ArrowRight | Key::ArrowUp | Key::Char('d' | 'D' | 'w' | 'W') => Some(step),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(input: KeyInput) -> Option<f64> {
        // Range [0, 10] with the documented defaults: step 1, shift step 2,
        // page step ceil(10/5) = 2.
        delta_for_key(input, &DeltaConfig::default(), &SortRange::new(0.0, 10.0))
    }

    #[test]
    fn plain_arrows_step_by_one() {
        assert_eq!(table(KeyInput::plain(Key::ArrowRight)), Some(1.0));
        assert_eq!(table(KeyInput::plain(Key::ArrowUp)), Some(1.0));
        assert_eq!(table(KeyInput::plain(Key::ArrowLeft)), Some(-1.0));
        assert_eq!(table(KeyInput::plain(Key::ArrowDown)), Some(-1.0));
    }

    #[test]
    fn wasd_mirrors_the_arrows() {
        assert_eq!(table(KeyInput::plain(Key::Char('d'))), Some(1.0));
        assert_eq!(table(KeyInput::plain(Key::Char('w'))), Some(1.0));
        assert_eq!(table(KeyInput::plain(Key::Char('a'))), Some(-1.0));
        assert_eq!(table(KeyInput::plain(Key::Char('s'))), Some(-1.0));
    }

    #[test]
    fn shift_selects_the_larger_step() {
        assert_eq!(table(KeyInput::shifted(Key::ArrowLeft)), Some(-2.0));
        assert_eq!(table(KeyInput::shifted(Key::ArrowRight)), Some(2.0));
        assert_eq!(table(KeyInput::shifted(Key::Char('s'))), Some(-2.0));
    }

    #[test]
    fn paging_uses_a_fifth_of_the_range() {
        assert_eq!(table(KeyInput::plain(Key::PageUp)), Some(2.0));
        assert_eq!(table(KeyInput::plain(Key::PageDown)), Some(-2.0));
        // Derived page step rounds up.
        let config = DeltaConfig::default();
        let range = SortRange::new(0.0, 11.0);
        assert_eq!(
            delta_for_key(KeyInput::plain(Key::PageUp), &config, &range),
            Some(3.0)
        );
    }

    #[test]
    fn home_and_end_span_the_whole_range() {
        assert_eq!(table(KeyInput::plain(Key::Home)), Some(-10.0));
        assert_eq!(table(KeyInput::plain(Key::End)), Some(10.0));
    }

    #[test]
    fn unrecognized_keys_yield_nothing() {
        assert_eq!(table(KeyInput::plain(Key::Other)), None);
        assert_eq!(table(KeyInput::plain(Key::Space)), None);
        assert_eq!(table(KeyInput::plain(Key::Char('q'))), None);
    }

    #[test]
    fn explicit_page_step_overrides_the_derivation() {
        let config = DeltaConfig {
            page_step: Some(5.0),
            ..DeltaConfig::default()
        };
        let range = SortRange::new(0.0, 10.0);
        assert_eq!(
            delta_for_key(KeyInput::plain(Key::PageDown), &config, &range),
            Some(-5.0)
        );
    }

    #[test]
    fn range_clamp_and_contains() {
        let range = SortRange::new(0.0, 10.0);
        assert_eq!(range.clamp(11.0), 10.0);
        assert_eq!(range.clamp(-1.0), 0.0);
        assert!(range.contains(0.0));
        assert!(range.contains(10.0));
        assert!(!range.contains(10.5));
        assert_eq!(range.len(), 10.0);
    }
}
