// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared usage counters for one-shot hint suppression.

use alloc::rc::Rc;
use core::cell::RefCell;

/// A shared, cloneable handle to a [`UsageTracker`].
///
/// Controllers that should present coherent "first-time hint" semantics (for
/// example one controller per scene of the same screen) are all constructed
/// with clones of the same handle. Sharing is by explicit injection, never
/// through a global.
///
/// Mutation is atomic with respect to observers because Grapnel's execution
/// model is single-threaded and synchronous; no lock is taken.
pub type SharedUsage = Rc<RefCell<UsageTracker>>;

/// Counters and flags recording how an interaction has been used.
///
/// Three pieces of state drive cue visibility:
///
/// - `grab_count`: total successful grabs, any modality.
/// - `keyboard_grab_count`: grabs initiated from the keyboard. The grab cue
///   is a teaching aid, so it stops showing after the first one.
/// - a "still show the sort cue" flag, cleared once the user has actually
///   sorted something.
///
/// The tracker has no behavior of its own; controllers read the predicates
/// and record usage at the corresponding transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsageTracker {
    grab_count: u32,
    keyboard_grab_count: u32,
    sort_cue_suppressed: bool,
}

impl UsageTracker {
    /// Creates a tracker with all counters at their initial values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grab_count: 0,
            keyboard_grab_count: 0,
            sort_cue_suppressed: false,
        }
    }

    /// Creates a tracker wrapped in a [`SharedUsage`] handle.
    #[must_use]
    pub fn shared() -> SharedUsage {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Total number of successful grabs, any input modality.
    #[must_use]
    #[inline]
    pub const fn grab_count(&self) -> u32 {
        self.grab_count
    }

    /// Number of successful keyboard-initiated grabs.
    #[must_use]
    #[inline]
    pub const fn keyboard_grab_count(&self) -> u32 {
        self.keyboard_grab_count
    }

    /// Records one successful grab.
    pub fn record_grab(&mut self) {
        self.grab_count = self.grab_count.saturating_add(1);
    }

    /// Records that a grab was initiated from the keyboard.
    ///
    /// Called in addition to [`record_grab`](Self::record_grab) for keyboard
    /// grabs.
    pub fn record_keyboard_grab(&mut self) {
        self.keyboard_grab_count = self.keyboard_grab_count.saturating_add(1);
    }

    /// Stops the sort cue from showing again.
    ///
    /// Controllers call this on the first sort that actually changes a
    /// value.
    pub fn suppress_sort_cue(&mut self) {
        self.sort_cue_suppressed = true;
    }

    /// Whether the grab cue should still be shown.
    ///
    /// `true` until the first successful keyboard grab.
    #[must_use]
    #[inline]
    pub const fn should_show_grab_cue(&self) -> bool {
        self.keyboard_grab_count < 1
    }

    /// Whether the sort cue should still be shown.
    #[must_use]
    #[inline]
    pub const fn should_show_sort_cue(&self) -> bool {
        !self.sort_cue_suppressed
    }

    /// Returns all counters and flags to their initial values.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tracker_shows_both_cues() {
        let usage = UsageTracker::new();
        assert!(usage.should_show_grab_cue());
        assert!(usage.should_show_sort_cue());
        assert_eq!(usage.grab_count(), 0);
    }

    #[test]
    fn grab_cue_suppressed_after_first_keyboard_grab() {
        let mut usage = UsageTracker::new();
        usage.record_grab();
        // Pointer grabs alone do not suppress the keyboard teaching cue.
        assert!(usage.should_show_grab_cue());
        usage.record_grab();
        usage.record_keyboard_grab();
        assert!(!usage.should_show_grab_cue());
        assert_eq!(usage.grab_count(), 2);
        assert_eq!(usage.keyboard_grab_count(), 1);
    }

    #[test]
    fn sort_cue_suppression_is_sticky_until_reset() {
        let mut usage = UsageTracker::new();
        usage.suppress_sort_cue();
        assert!(!usage.should_show_sort_cue());
        usage.reset();
        assert!(usage.should_show_sort_cue());
        assert_eq!(usage.keyboard_grab_count(), 0);
    }

    #[test]
    fn shared_handle_mutations_are_visible_to_clones() {
        let shared = UsageTracker::shared();
        let other = shared.clone();
        shared.borrow_mut().record_keyboard_grab();
        assert!(!other.borrow().should_show_grab_cue());
    }
}
