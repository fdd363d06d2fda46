// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller-side mirror of the live accessibility surface.

use alloc::string::String;

use crate::options::{SurfaceOptions, SurfaceRole};

/// What is currently attached to the target element.
///
/// The controller emits an ordered effect stream for the embedding toolkit
/// to execute against its real accessibility tree, and keeps this mirror in
/// lockstep so callers (and tests) can query the live role, name, and
/// description association without replaying effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedSurface {
    role: SurfaceRole,
    focusable: bool,
    name: String,
    role_description: String,
    description_linked: bool,
}

impl AppliedSurface {
    /// Creates a mirror from the initially applied bundle and role
    /// description.
    #[must_use]
    pub fn new(options: &SurfaceOptions, role_description: impl Into<String>) -> Self {
        let mut applied = Self {
            role: options.role,
            focusable: options.focusable,
            name: options.name.clone(),
            role_description: role_description.into(),
            description_linked: false,
        };
        applied.apply(options);
        applied
    }

    /// The currently attached role.
    #[must_use]
    #[inline]
    pub const fn role(&self) -> SurfaceRole {
        self.role
    }

    /// The currently attached accessible name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currently attached role description.
    #[must_use]
    #[inline]
    pub fn role_description(&self) -> &str {
        &self.role_description
    }

    /// Whether the help-text description association is present.
    ///
    /// Present while idle (so the help text is read automatically when the
    /// element is discovered), absent while grabbed.
    #[must_use]
    #[inline]
    pub const fn description_linked(&self) -> bool {
        self.description_linked
    }

    /// Whether the element is focusable. Always `true` after an apply.
    #[must_use]
    #[inline]
    pub const fn focusable(&self) -> bool {
        self.focusable
    }

    /// Applies a full option bundle.
    ///
    /// The element must remain focusable through every swap; losing
    /// focusability mid-interaction would drop the user's focus on the
    /// floor.
    pub fn apply(&mut self, options: &SurfaceOptions) {
        self.role = options.role;
        self.focusable = options.focusable;
        self.name.clear();
        self.name.push_str(&options.name);
        debug_assert!(
            self.focusable,
            "the target element must stay focusable across surface swaps"
        );
    }

    /// Replaces the role description.
    pub fn set_role_description(&mut self, description: &str) {
        self.role_description.clear();
        self.role_description.push_str(description);
    }

    /// Records that the description association is attached.
    pub fn link_description(&mut self) {
        self.description_linked = true;
    }

    /// Records that the description association is removed.
    pub fn unlink_description(&mut self) {
        self.description_linked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_tracks_applied_bundle() {
        let mut applied =
            AppliedSurface::new(&SurfaceOptions::idle("idle name"), "movable");
        assert_eq!(applied.role(), SurfaceRole::Button);
        assert_eq!(applied.name(), "idle name");
        assert!(!applied.description_linked());

        applied.apply(&SurfaceOptions::grabbed("grabbed name"));
        assert_eq!(applied.role(), SurfaceRole::Application);
        assert_eq!(applied.name(), "grabbed name");
        assert!(applied.focusable());
    }

    #[test]
    fn description_link_toggles() {
        let mut applied =
            AppliedSurface::new(&SurfaceOptions::idle("n"), "movable");
        applied.link_description();
        assert!(applied.description_linked());
        applied.unlink_description();
        assert!(!applied.description_linked());
    }

    #[test]
    fn role_description_replaced_in_place() {
        let mut applied =
            AppliedSurface::new(&SurfaceOptions::idle("n"), "movable");
        applied.set_role_description("sortable");
        assert_eq!(applied.role_description(), "sortable");
    }
}
