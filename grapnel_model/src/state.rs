// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grab/release state machine.

use alloc::vec::Vec;

use crate::usage::UsageTracker;

/// The interaction state of a grabbable element.
///
/// Exactly one state is active at any time. The only legal transitions are
/// `Idle → Grabbed` (an explicit grab) and `Grabbed → Idle` (release, blur,
/// disable, or interrupt).
///
/// The select-and-sort variant in `grapnel_sort` reads `Idle` as "selecting"
/// and `Grabbed` as "sorting"; it is a view of the same two-state model, not
/// a third state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GrabState {
    /// Selectable but not yet active; analogous to an un-pressed button.
    #[default]
    Idle,
    /// Actively being manipulated; analogous to a pressed-and-held control.
    Grabbed,
}

/// A lifecycle event emitted by [`GrabModel`] transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GrabEvent {
    /// The model transitioned `Idle → Grabbed`.
    Grabbed,
    /// The model transitioned `Grabbed → Idle`.
    Released,
    /// The model was forced back to its initial configuration.
    Reset,
}

/// The authoritative state container for one grab interaction.
///
/// Mutating methods return the events they emitted (or `None`/an empty vec
/// when nothing changed), so a controller can react synchronously, in call
/// order, before any other observer sees the new state.
///
/// Attempting to [`grab`](Self::grab) a disabled or already-grabbed model is
/// a programmer error: it trips a debug assertion in development builds and
/// is a silent no-op in release builds. It is never a user-recoverable
/// runtime error.
#[derive(Clone, Debug)]
pub struct GrabModel {
    state: GrabState,
    enabled: bool,
}

impl Default for GrabModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GrabModel {
    /// Creates a model in the `Idle` state, enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: GrabState::Idle,
            enabled: true,
        }
    }

    /// Returns the current interaction state.
    #[must_use]
    #[inline]
    pub const fn state(&self) -> GrabState {
        self.state
    }

    /// Returns `true` while the model is grabbed.
    #[must_use]
    #[inline]
    pub const fn is_grabbed(&self) -> bool {
        matches!(self.state, GrabState::Grabbed)
    }

    /// Returns whether the interaction is enabled.
    ///
    /// The model is never `Grabbed` while disabled; see
    /// [`set_enabled`](Self::set_enabled).
    #[must_use]
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Transitions `Idle → Grabbed` and records the grab on `usage`.
    ///
    /// Grabbing while disabled or already grabbed is a contract violation:
    /// debug builds assert, release builds return `None` without mutating
    /// anything.
    pub fn grab(&mut self, usage: &mut UsageTracker) -> Option<GrabEvent> {
        debug_assert!(
            self.enabled,
            "grab() requires an enabled interaction"
        );
        debug_assert!(
            self.state == GrabState::Idle,
            "grab() requires the Idle state"
        );
        if !self.enabled || self.state != GrabState::Idle {
            return None;
        }
        self.state = GrabState::Grabbed;
        usage.record_grab();
        Some(GrabEvent::Grabbed)
    }

    /// As [`grab`](Self::grab), but records a keyboard-initiated grab and
    /// invokes `on_complete` after the transition.
    ///
    /// The completion hook exists so a controller can defer re-focusing the
    /// target element until its accessibility surface has been swapped for
    /// the grabbed representation.
    pub fn keyboard_grab(
        &mut self,
        usage: &mut UsageTracker,
        on_complete: impl FnOnce(),
    ) -> Option<GrabEvent> {
        let event = self.grab(usage)?;
        usage.record_keyboard_grab();
        on_complete();
        Some(event)
    }

    /// Transitions `Grabbed → Idle` if currently grabbed.
    ///
    /// Idempotent: releasing an idle model leaves state unchanged and emits
    /// nothing.
    pub fn release(&mut self) -> Option<GrabEvent> {
        if self.state != GrabState::Grabbed {
            return None;
        }
        self.state = GrabState::Idle;
        Some(GrabEvent::Released)
    }

    /// Forces any in-progress grab to end.
    ///
    /// This is the sole cancellation primitive; it is always safe to call
    /// even if nothing is in progress.
    #[inline]
    pub fn interrupt(&mut self) -> Option<GrabEvent> {
        self.release()
    }

    /// Sets the enabled flag.
    ///
    /// Disabling while grabbed forces a release first, so the model never
    /// reports `Grabbed` with `enabled == false`. The returned event is that
    /// forced release, if one happened.
    ///
    /// The model never re-enables itself after an interrupt-driven disable;
    /// flipping this back to `true` is the owning screen's contract.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<GrabEvent> {
        let released = if !enabled { self.release() } else { None };
        self.enabled = enabled;
        released
    }

    /// Forces `Idle` and, when this model solely owns `usage`, resets it.
    ///
    /// `owns_usage` should be `false` when the tracker is shared with another
    /// still-active controller, so scene switches keep coherent "first-time
    /// hint" semantics.
    pub fn reset(&mut self, usage: &mut UsageTracker, owns_usage: bool) -> Vec<GrabEvent> {
        let mut events = Vec::new();
        if let Some(released) = self.release() {
            events.push(released);
        }
        if owns_usage {
            usage.reset();
        }
        events.push(GrabEvent::Reset);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn initial_state_is_idle_and_enabled() {
        let model = GrabModel::new();
        assert_eq!(model.state(), GrabState::Idle);
        assert!(model.is_enabled());
        assert!(!model.is_grabbed());
    }

    #[test]
    fn grab_transitions_and_counts() {
        let mut usage = UsageTracker::new();
        let mut model = GrabModel::new();
        assert_eq!(model.grab(&mut usage), Some(GrabEvent::Grabbed));
        assert_eq!(model.state(), GrabState::Grabbed);
        assert_eq!(usage.grab_count(), 1);
        assert_eq!(usage.keyboard_grab_count(), 0);
    }

    #[test]
    fn keyboard_grab_counts_and_completes_after_transition() {
        let mut usage = UsageTracker::new();
        let mut model = GrabModel::new();
        let mut observed = None;
        // The completion hook must observe the already-grabbed state.
        let state_probe = &mut observed;
        let event = model.keyboard_grab(&mut usage, || {
            *state_probe = Some(GrabState::Grabbed);
        });
        assert_eq!(event, Some(GrabEvent::Grabbed));
        assert_eq!(observed, Some(GrabState::Grabbed));
        assert_eq!(usage.grab_count(), 1);
        assert_eq!(usage.keyboard_grab_count(), 1);
    }

    #[test]
    fn release_is_idempotent() {
        let mut usage = UsageTracker::new();
        let mut model = GrabModel::new();
        let _ = model.grab(&mut usage);
        assert_eq!(model.release(), Some(GrabEvent::Released));
        assert_eq!(model.release(), None);
        assert_eq!(model.state(), GrabState::Idle);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "Idle state"))]
    fn double_grab_is_a_contract_violation() {
        let mut usage = UsageTracker::new();
        let mut model = GrabModel::new();
        let _ = model.grab(&mut usage);
        let second = model.grab(&mut usage);
        // Release builds tolerate the violation as a no-op.
        assert_eq!(second, None);
        assert_eq!(usage.grab_count(), 1);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "enabled interaction"))]
    fn grab_while_disabled_is_a_contract_violation() {
        let mut usage = UsageTracker::new();
        let mut model = GrabModel::new();
        let _ = model.set_enabled(false);
        let event = model.grab(&mut usage);
        assert_eq!(event, None);
        assert_eq!(model.state(), GrabState::Idle);
    }

    #[test]
    fn disable_while_grabbed_forces_release() {
        let mut usage = UsageTracker::new();
        let mut model = GrabModel::new();
        let _ = model.grab(&mut usage);
        assert_eq!(model.set_enabled(false), Some(GrabEvent::Released));
        assert_eq!(model.state(), GrabState::Idle);
        assert!(!model.is_enabled());
    }

    #[test]
    fn disable_while_idle_emits_nothing() {
        let mut model = GrabModel::new();
        assert_eq!(model.set_enabled(false), None);
        assert_eq!(model.set_enabled(true), None);
    }

    #[test]
    fn interrupt_is_safe_when_idle() {
        let mut model = GrabModel::new();
        assert_eq!(model.interrupt(), None);
        assert_eq!(model.state(), GrabState::Idle);
    }

    // State exclusivity: arbitrary call sequences never leave the model both
    // grabbed and disabled, and always in exactly one of the two states.
    #[test]
    fn never_grabbed_while_disabled() {
        let mut usage = UsageTracker::new();
        let mut model = GrabModel::new();
        let _ = model.grab(&mut usage);
        let _ = model.set_enabled(false);
        assert!(!(model.is_grabbed() && !model.is_enabled()));
        let _ = model.set_enabled(true);
        let _ = model.grab(&mut usage);
        let _ = model.interrupt();
        assert!(!model.is_grabbed());
    }

    #[test]
    fn reset_releases_and_resets_owned_usage() {
        let mut usage = UsageTracker::new();
        let mut model = GrabModel::new();
        let _ = model.keyboard_grab(&mut usage, || {});
        let events = model.reset(&mut usage, true);
        assert_eq!(events, vec![GrabEvent::Released, GrabEvent::Reset]);
        assert_eq!(model.state(), GrabState::Idle);
        assert_eq!(usage.keyboard_grab_count(), 0);
    }

    #[test]
    fn reset_leaves_shared_usage_alone() {
        let mut usage = UsageTracker::new();
        let mut model = GrabModel::new();
        let _ = model.keyboard_grab(&mut usage, || {});
        let _ = model.release();
        let events = model.reset(&mut usage, false);
        assert_eq!(events, vec![GrabEvent::Reset]);
        assert_eq!(usage.keyboard_grab_count(), 1);
    }
}
