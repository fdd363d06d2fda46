// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key identification for the grab and sort interactions.
//!
//! Grapnel does not read input devices; the embedding toolkit translates its
//! own key events into [`KeyInput`] values and feeds them to a controller.
//! The enum covers exactly the keys the interactions react to; anything else
//! maps to [`Key::Other`] and is ignored.

/// A key the grab/sort interactions may react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The space bar. Grabs while idle, releases while grabbed.
    Space,
    /// The enter/return key. Grabs while idle, releases while grabbed.
    Enter,
    /// The escape key. Releases while grabbed.
    Escape,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// The home key.
    Home,
    /// The end key.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// A printable character (the `w`/`a`/`s`/`d` alternates and digits).
    Char(char),
    /// Any key the interactions never react to.
    Other,
}

impl Key {
    /// Whether this key grabs from the idle state.
    #[must_use]
    pub const fn is_grab_key(self) -> bool {
        matches!(self, Self::Space | Self::Enter)
    }

    /// Whether this key releases from the grabbed state.
    #[must_use]
    pub const fn is_release_key(self) -> bool {
        matches!(self, Self::Space | Self::Enter | Self::Escape)
    }
}

/// A key press with its shift-modifier state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyInput {
    /// The pressed key.
    pub key: Key,
    /// Whether shift was held.
    pub shift: bool,
}

impl KeyInput {
    /// A plain, unshifted key press.
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    /// A shifted key press.
    #[must_use]
    pub const fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grab_and_release_keys() {
        assert!(Key::Space.is_grab_key());
        assert!(Key::Enter.is_grab_key());
        assert!(!Key::Escape.is_grab_key());
        assert!(Key::Escape.is_release_key());
        assert!(!Key::ArrowLeft.is_grab_key());
        assert!(!Key::Other.is_release_key());
    }
}
