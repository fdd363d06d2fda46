// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered effect stream a controller emits.

use alloc::string::String;

use grapnel_cue::CueKind;
use grapnel_surface::SurfaceOptions;

use crate::listener::ListenerSet;

/// Focus-indicator stroke styling.
///
/// Solid while idle; dashed signals "currently grabbed, sorting in progress"
/// by convention.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RingStyle {
    /// Solid outline: the idle, selectable representation.
    #[default]
    Solid,
    /// Dashed outline: grab in progress.
    Dashed,
}

/// Who owns the focus-indicator path around the target.
///
/// Computed once at construction; every later code path (restyling versus
/// destruction on dispose) branches on this flag instead of re-deriving
/// ownership.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RingOwnership {
    /// The controller created the indicator and destroys it on dispose.
    #[default]
    Owned,
    /// A pre-existing indicator was supplied by the caller; the controller
    /// only restyles it, never destroys it. The caller is responsible for
    /// supplying one whose layering is compatible with the cue overlay.
    Borrowed,
}

/// One externally observable operation produced by the controller.
///
/// Effects are emitted in a deterministic order and must be applied in that
/// order by the embedding toolkit; a full state transition always emits its
/// complete sequence before the controller returns, so no observer can see
/// a half-migrated accessibility surface.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEffect {
    /// Interrupt any in-progress interaction owned by these listeners (for
    /// example a held pointer press) before they are removed.
    InterruptListeners(ListenerSet),
    /// Detach these listeners from the target element.
    RemoveListeners(ListenerSet),
    /// Update the role-description attribute so assistive technology
    /// announces the new interaction affordance.
    SetRoleDescription(String),
    /// Attach the described-by association pointing at this help text, so it
    /// is read automatically when the element is discovered.
    LinkDescription(String),
    /// Remove the described-by association.
    UnlinkDescription,
    /// Swap the full accessibility option bundle onto the target element.
    ApplySurface(SurfaceOptions),
    /// Attach these listeners to the target element.
    InstallListeners(ListenerSet),
    /// Restyle the shared focus-indicator path.
    RestyleFocusRing(RingStyle),
    /// Show this cue node (it has already been repositioned).
    ShowCue(CueKind),
    /// Hide this cue node.
    HideCue(CueKind),
    /// Re-focus the target element now that its accessibility surface has
    /// been swapped.
    Refocus,
    /// Detach both cue nodes from the shared overlay parent (dispose only).
    DetachCues,
    /// Destroy the focus-indicator path (dispose only, and only when the
    /// controller owns it).
    DestroyFocusRing,
}
