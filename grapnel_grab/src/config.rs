// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use grapnel_cue::CueAnchor;
use grapnel_model::{SharedUsage, UsageTracker};
use grapnel_surface::{HelpText, InputCapability};
use kurbo::Vec2;

use crate::effect::RingOwnership;

/// A side-effect hook invoked at a transition (audio/visual feedback is the
/// owning screen's concern).
pub type TransitionHook = Box<dyn FnMut()>;

/// An overriding cue-visibility predicate over the shared usage tracker.
///
/// Replaces only the usage-derived part of the built-in predicate; state,
/// focus, and enabledness conditions always apply.
pub type CuePredicate = Box<dyn Fn(&UsageTracker) -> bool>;

/// Configuration for a [`GrabController`](crate::GrabController).
///
/// Constructed once with the per-state accessible names; everything else has
/// a documented default and is set through the chainable methods. There is
/// no runtime reconfiguration beyond the name and help-text setters on the
/// controller itself.
///
/// # Example
///
/// ```
/// use grapnel_cue::CueAnchor;
/// use grapnel_grab::{GrabConfig, RingOwnership};
/// use kurbo::Vec2;
///
/// let config = GrabConfig::new("Apple, 3", "Apple, grabbed")
///     .with_keyboard_help("Press space to grab the apple.")
///     .with_grab_cue(CueAnchor::CenterTop, Vec2::new(0.0, -12.0))
///     .with_ring(RingOwnership::Borrowed);
/// # let _ = config;
/// ```
pub struct GrabConfig {
    pub(crate) idle_name: String,
    pub(crate) grabbed_name: String,
    pub(crate) idle_role_description: Option<String>,
    pub(crate) grabbed_role_description: Option<String>,
    pub(crate) help: HelpText,
    pub(crate) capability: InputCapability,
    pub(crate) grab_cue_anchor: CueAnchor,
    pub(crate) grab_cue_offset: Vec2,
    pub(crate) sort_cue_anchor: CueAnchor,
    pub(crate) sort_cue_offset: Vec2,
    pub(crate) on_grab: Option<TransitionHook>,
    pub(crate) on_release: Option<TransitionHook>,
    pub(crate) show_grab_cue: Option<CuePredicate>,
    pub(crate) show_sort_cue: Option<CuePredicate>,
    pub(crate) ring: RingOwnership,
    pub(crate) usage: Option<SharedUsage>,
    pub(crate) input_enabled: bool,
}

impl GrabConfig {
    /// Creates a configuration with the given per-state accessible names
    /// and defaults for everything else:
    ///
    /// - role descriptions: `"movable"` / `"grabbed"`
    /// - capability: [`InputCapability::Keyboard`]
    /// - grab cue anchored at [`CueAnchor::CenterTop`], sort cue at
    ///   [`CueAnchor::CenterBottom`], both with zero offset
    /// - hooks: none (no-op)
    /// - cue predicates: the usage tracker's built-ins
    /// - focus ring: [`RingOwnership::Owned`]
    /// - usage tracker: a fresh, exclusively owned one
    #[must_use]
    pub fn new(idle_name: impl Into<String>, grabbed_name: impl Into<String>) -> Self {
        Self {
            idle_name: idle_name.into(),
            grabbed_name: grabbed_name.into(),
            idle_role_description: None,
            grabbed_role_description: None,
            help: HelpText::new(),
            capability: InputCapability::Keyboard,
            grab_cue_anchor: CueAnchor::CenterTop,
            grab_cue_offset: Vec2::ZERO,
            sort_cue_anchor: CueAnchor::CenterBottom,
            sort_cue_offset: Vec2::ZERO,
            on_grab: None,
            on_release: None,
            show_grab_cue: None,
            show_sort_cue: None,
            ring: RingOwnership::Owned,
            usage: None,
            input_enabled: true,
        }
    }

    /// Replaces both role descriptions.
    #[must_use]
    pub fn with_role_descriptions(
        mut self,
        idle: impl Into<String>,
        grabbed: impl Into<String>,
    ) -> Self {
        self.idle_role_description = Some(idle.into());
        self.grabbed_role_description = Some(grabbed.into());
        self
    }

    /// Returns the configured role descriptions, when overridden.
    #[must_use]
    pub fn role_descriptions(&self) -> Option<(&str, &str)> {
        match (&self.idle_role_description, &self.grabbed_role_description) {
            (Some(idle), Some(grabbed)) => Some((idle.as_str(), grabbed.as_str())),
            _ => None,
        }
    }

    /// Sets the input capability mode (fixed for the process lifetime).
    #[must_use]
    pub fn with_capability(mut self, capability: InputCapability) -> Self {
        self.capability = capability;
        self
    }

    /// Sets the keyboard help text attached to the idle description.
    #[must_use]
    pub fn with_keyboard_help(mut self, text: impl Into<String>) -> Self {
        self.help.set_keyboard(text);
        self
    }

    /// Sets the touch-gesture help text attached to the idle description.
    #[must_use]
    pub fn with_gesture_help(mut self, text: impl Into<String>) -> Self {
        self.help.set_gesture(text);
        self
    }

    /// Places the grab cue.
    #[must_use]
    pub fn with_grab_cue(mut self, anchor: CueAnchor, offset: Vec2) -> Self {
        self.grab_cue_anchor = anchor;
        self.grab_cue_offset = offset;
        self
    }

    /// Places the sort cue.
    #[must_use]
    pub fn with_sort_cue(mut self, anchor: CueAnchor, offset: Vec2) -> Self {
        self.sort_cue_anchor = anchor;
        self.sort_cue_offset = offset;
        self
    }

    /// Invokes `hook` after every successful grab.
    #[must_use]
    pub fn on_grab(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_grab = Some(Box::new(hook));
        self
    }

    /// Invokes `hook` after every release.
    #[must_use]
    pub fn on_release(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }

    /// Overrides the usage-derived part of the grab-cue predicate (for
    /// example, to keep the cue until a level is actually completed).
    #[must_use]
    pub fn show_grab_cue_when(mut self, predicate: impl Fn(&UsageTracker) -> bool + 'static) -> Self {
        self.show_grab_cue = Some(Box::new(predicate));
        self
    }

    /// Overrides the usage-derived part of the sort-cue predicate.
    #[must_use]
    pub fn show_sort_cue_when(mut self, predicate: impl Fn(&UsageTracker) -> bool + 'static) -> Self {
        self.show_sort_cue = Some(Box::new(predicate));
        self
    }

    /// Sets the focus-ring ownership.
    #[must_use]
    pub fn with_ring(mut self, ring: RingOwnership) -> Self {
        self.ring = ring;
        self
    }

    /// Shares an existing usage tracker instead of creating an owned one.
    ///
    /// Controllers sharing a tracker present coherent "first-time hint"
    /// semantics across scene switches, and none of them resets it on
    /// [`reset`](crate::GrabController::reset).
    #[must_use]
    pub fn with_shared_usage(mut self, usage: SharedUsage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Sets whether the target element initially accepts input.
    #[must_use]
    pub fn with_input_enabled(mut self, input_enabled: bool) -> Self {
        self.input_enabled = input_enabled;
        self
    }
}

// Manual Debug impl since hooks and predicates aren't Debug.
impl fmt::Debug for GrabConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrabConfig")
            .field("idle_name", &self.idle_name)
            .field("grabbed_name", &self.grabbed_name)
            .field("idle_role_description", &self.idle_role_description)
            .field("grabbed_role_description", &self.grabbed_role_description)
            .field("help", &self.help)
            .field("capability", &self.capability)
            .field("grab_cue_anchor", &self.grab_cue_anchor)
            .field("grab_cue_offset", &self.grab_cue_offset)
            .field("sort_cue_anchor", &self.sort_cue_anchor)
            .field("sort_cue_offset", &self.sort_cue_offset)
            .field("has_on_grab", &self.on_grab.is_some())
            .field("has_on_release", &self.on_release.is_some())
            .field("has_show_grab_cue", &self.show_grab_cue.is_some())
            .field("has_show_sort_cue", &self.show_sort_cue.is_some())
            .field("ring", &self.ring)
            .field("shares_usage", &self.usage.is_some())
            .field("input_enabled", &self.input_enabled)
            .finish()
    }
}
