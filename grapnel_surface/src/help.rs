// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Help-text selection by input capability.

use alloc::string::String;

/// The input capability mode of the running process.
///
/// Fixed for the process lifetime: a platform either describes touch
/// gestures to assistive technology or it describes keyboard operation, and
/// that choice does not change while the application runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputCapability {
    /// Help text describes the keyboard operation ("press space to grab").
    #[default]
    Keyboard,
    /// Help text describes the touch gesture ("double-tap and hold").
    Gesture,
}

/// Per-capability help text for the idle representation.
///
/// Exactly one variant is attached to the live accessibility surface at a
/// time — the one matching the process capability. The inactive variant is
/// stored but never attached. Either may be unset, in which case nothing is
/// attached for that capability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HelpText {
    keyboard: Option<String>,
    gesture: Option<String>,
}

impl HelpText {
    /// Creates help text with neither variant set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keyboard: None,
            gesture: None,
        }
    }

    /// Sets the keyboard help text.
    pub fn set_keyboard(&mut self, text: impl Into<String>) {
        self.keyboard = Some(text.into());
    }

    /// Sets the touch-gesture help text.
    pub fn set_gesture(&mut self, text: impl Into<String>) {
        self.gesture = Some(text.into());
    }

    /// Returns the variant that should be attached for `capability`.
    #[must_use]
    pub fn active(&self, capability: InputCapability) -> Option<&str> {
        match capability {
            InputCapability::Keyboard => self.keyboard.as_deref(),
            InputCapability::Gesture => self.gesture.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_variant_follows_capability() {
        let mut help = HelpText::new();
        help.set_keyboard("press space to grab");
        help.set_gesture("double-tap and hold");
        assert_eq!(
            help.active(InputCapability::Keyboard),
            Some("press space to grab")
        );
        assert_eq!(
            help.active(InputCapability::Gesture),
            Some("double-tap and hold")
        );
    }

    #[test]
    fn unset_variant_attaches_nothing() {
        let mut help = HelpText::new();
        help.set_keyboard("press space to grab");
        assert_eq!(help.active(InputCapability::Gesture), None);
    }
}
