// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state accessibility option bundles.

use alloc::string::String;

use grapnel_model::GrabState;

/// The accessibility role attached to the target element.
///
/// Exactly one of the two roles is attached at all times, matching the
/// interaction state: the idle representation reads as a pressable button,
/// the grabbed representation as an application-style widget that consumes
/// arrow keys itself (screen readers pass key events through instead of
/// intercepting them for virtual-cursor navigation).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    /// Focusable button-like role; the idle, selectable representation.
    Button,
    /// Focusable application-like role; the grabbed, operable representation.
    Application,
}

/// One immutable, fully specified accessibility option bundle.
///
/// A bundle is computed once and applied wholesale; no field is ever patched
/// on a live surface. Both per-state bundles keep `focusable` true — the
/// element must remain reachable by assistive technology through every
/// transition, and [`AppliedSurface::apply`](crate::AppliedSurface::apply)
/// asserts that post-condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceOptions {
    /// The role to expose.
    pub role: SurfaceRole,
    /// Whether the element is keyboard-focusable. Always `true` for the
    /// bundles Grapnel computes.
    pub focusable: bool,
    /// The accessible name announced when the element is discovered.
    pub name: String,
    /// Whether the element is wrapped in a container node in the
    /// accessibility tree. The idle representation uses a wrapper so the
    /// help-text description has somewhere to attach; the grabbed one does
    /// not.
    pub container: bool,
}

impl SurfaceOptions {
    /// The idle (selectable) bundle: button role, container wrapper.
    #[must_use]
    pub fn idle(name: impl Into<String>) -> Self {
        Self {
            role: SurfaceRole::Button,
            focusable: true,
            name: name.into(),
            container: true,
        }
    }

    /// The grabbed (operable) bundle: application role, no wrapper.
    #[must_use]
    pub fn grabbed(name: impl Into<String>) -> Self {
        Self {
            role: SurfaceRole::Application,
            focusable: true,
            name: name.into(),
            container: false,
        }
    }
}

/// Both per-state option bundles plus role-description strings.
///
/// The name setters stage their value: the owning controller checks the
/// current state and re-applies the live bundle immediately when the edited
/// state is the active one, so assistive technology announces the change
/// without a blur/refocus cycle. When it is not, the new name simply rides
/// along on the next transition into that state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DualSurface {
    idle: SurfaceOptions,
    grabbed: SurfaceOptions,
    idle_role_description: String,
    grabbed_role_description: String,
}

impl DualSurface {
    /// Default role description for the idle state.
    pub const IDLE_ROLE_DESCRIPTION: &'static str = "movable";
    /// Default role description for the grabbed state.
    pub const GRABBED_ROLE_DESCRIPTION: &'static str = "grabbed";

    /// Creates both bundles from the per-state accessible names, with the
    /// default role descriptions.
    #[must_use]
    pub fn new(idle_name: impl Into<String>, grabbed_name: impl Into<String>) -> Self {
        Self {
            idle: SurfaceOptions::idle(idle_name),
            grabbed: SurfaceOptions::grabbed(grabbed_name),
            idle_role_description: String::from(Self::IDLE_ROLE_DESCRIPTION),
            grabbed_role_description: String::from(Self::GRABBED_ROLE_DESCRIPTION),
        }
    }

    /// Replaces both role descriptions (e.g. "navigable" / "sortable" for
    /// the select-and-sort variant).
    #[must_use]
    pub fn with_role_descriptions(
        mut self,
        idle: impl Into<String>,
        grabbed: impl Into<String>,
    ) -> Self {
        self.idle_role_description = idle.into();
        self.grabbed_role_description = grabbed.into();
        self
    }

    /// Returns the bundle for the given state.
    #[must_use]
    pub fn options_for(&self, state: GrabState) -> &SurfaceOptions {
        match state {
            GrabState::Idle => &self.idle,
            GrabState::Grabbed => &self.grabbed,
        }
    }

    /// Returns the role description for the given state.
    #[must_use]
    pub fn role_description_for(&self, state: GrabState) -> &str {
        match state {
            GrabState::Idle => &self.idle_role_description,
            GrabState::Grabbed => &self.grabbed_role_description,
        }
    }

    /// Returns the accessible name cached for the given state.
    #[must_use]
    pub fn name_for(&self, state: GrabState) -> &str {
        &self.options_for(state).name
    }

    /// Stages a new idle-state accessible name.
    pub fn set_idle_name(&mut self, name: impl Into<String>) {
        self.idle.name = name.into();
    }

    /// Stages a new grabbed-state accessible name.
    pub fn set_grabbed_name(&mut self, name: impl Into<String>) {
        self.grabbed.name = name.into();
    }
}
