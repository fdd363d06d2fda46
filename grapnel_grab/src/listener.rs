// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state input listener sets.

use grapnel_model::GrabState;

bitflags::bitflags! {
    /// The input listeners installed on the target element.
    ///
    /// The controller represents listeners as flags and tells the embedding
    /// toolkit which to attach and detach through the effect stream; the
    /// concrete handlers (a pre-built pointer drag listener, a keyboard
    /// listener) are supplied and owned by the caller.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerSet: u8 {
        /// Pointer press/release driving the same model as the keyboard
        /// path. Present in both states.
        const POINTER_PRESS = 0b0000_0001;
        /// Keyboard listener that grabs. Idle only.
        const KEY_GRAB      = 0b0000_0010;
        /// Focus-gained listener. Idle only.
        const FOCUS         = 0b0000_0100;
        /// Keyboard listener that releases. Grabbed only.
        const KEY_RELEASE   = 0b0000_1000;
        /// Keyboard listener applying sort deltas. Grabbed only.
        const KEY_DELTA     = 0b0001_0000;
        /// Blur listener that force-releases. Grabbed only.
        const BLUR          = 0b0010_0000;
    }
}

impl ListenerSet {
    /// The set installed while idle.
    pub const IDLE: Self = Self::POINTER_PRESS
        .union(Self::KEY_GRAB)
        .union(Self::FOCUS);

    /// The set installed while grabbed.
    pub const GRABBED: Self = Self::POINTER_PRESS
        .union(Self::KEY_RELEASE)
        .union(Self::KEY_DELTA)
        .union(Self::BLUR);

    /// Returns the set for the given state.
    #[must_use]
    pub const fn for_state(state: GrabState) -> Self {
        match state {
            GrabState::Idle => Self::IDLE,
            GrabState::Grabbed => Self::GRABBED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The per-state sets never overlap except for the always-present
    // pointer press/release listener.
    #[test]
    fn sets_are_disjoint_except_pointer_press() {
        let overlap = ListenerSet::IDLE & ListenerSet::GRABBED;
        assert_eq!(overlap, ListenerSet::POINTER_PRESS);
    }

    #[test]
    fn both_sets_carry_the_pointer_listener() {
        assert!(ListenerSet::for_state(GrabState::Idle).contains(ListenerSet::POINTER_PRESS));
        assert!(ListenerSet::for_state(GrabState::Grabbed).contains(ListenerSet::POINTER_PRESS));
    }
}
