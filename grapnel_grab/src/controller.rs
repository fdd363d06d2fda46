// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grab interaction controller.

use alloc::string::String;

use grapnel_cue::{CueKind, CueNode};
use grapnel_model::{GrabEvent, GrabModel, GrabState, SharedUsage, UsageTracker};
use grapnel_surface::{AppliedSurface, DualSurface, HelpText, InputCapability};
use kurbo::{Affine, Rect};
use smallvec::SmallVec;

use crate::config::{CuePredicate, GrabConfig, TransitionHook};
use crate::effect::{RingOwnership, RingStyle, SurfaceEffect};
use crate::input::{Key, KeyInput};
use crate::listener::ListenerSet;

/// The ordered effects emitted by one controller operation.
///
/// Apply them in order; a transition's full sequence is always complete
/// before the controller returns.
pub type Effects = SmallVec<[SurfaceEffect; 8]>;

/// Binds one [`GrabModel`] to one concrete visual element.
///
/// The controller keeps four things consistent with the interaction state:
/// the element's accessibility surface (role, name, role description,
/// described-by association), the per-state input listener set, the focus
/// indicator's styling, and the visibility and position of the teaching
/// cues.
///
/// It does not own an event loop or an accessibility tree. The embedding
/// toolkit routes raw input to the entry points ([`key_down`](Self::key_down),
/// [`pointer_press`](Self::pointer_press), [`focus_in`](Self::focus_in), …)
/// and executes the returned [`SurfaceEffect`] stream against its own tree.
/// The controller mirrors the applied surface so the live role and name are
/// queryable at any time via [`applied`](Self::applied).
///
/// # Example
///
/// ```
/// use grapnel_grab::{GrabConfig, GrabController, Key, KeyInput, SurfaceEffect};
/// use grapnel_model::GrabState;
/// use grapnel_surface::SurfaceRole;
///
/// let mut controller = GrabController::new(GrabConfig::new("Apple, 3", "Apple, grabbed"));
/// let _ = controller.mount();
/// let _ = controller.focus_in();
///
/// let effects = controller.key_down(KeyInput::plain(Key::Space));
/// assert_eq!(controller.state(), GrabState::Grabbed);
/// assert_eq!(controller.applied().role(), SurfaceRole::Application);
/// assert!(effects.contains(&SurfaceEffect::Refocus));
/// ```
pub struct GrabController {
    model: GrabModel,
    usage: SharedUsage,
    owns_usage: bool,
    surface: DualSurface,
    applied: AppliedSurface,
    help: HelpText,
    capability: InputCapability,
    grab_cue: CueNode,
    sort_cue: CueNode,
    bounds: Rect,
    to_overlay: Affine,
    installed: ListenerSet,
    focused: bool,
    keyboard_focused: bool,
    input_enabled: bool,
    grab_key_guard: Option<Key>,
    pointer_pressed: bool,
    ring_style: RingStyle,
    ring: RingOwnership,
    on_grab: Option<TransitionHook>,
    on_release: Option<TransitionHook>,
    show_grab_cue: Option<CuePredicate>,
    show_sort_cue: Option<CuePredicate>,
    mounted: bool,
    disposed: bool,
}

impl GrabController {
    /// Creates a controller from `config`. Call [`mount`](Self::mount) once
    /// to obtain the effects that attach the idle representation.
    #[must_use]
    pub fn new(config: GrabConfig) -> Self {
        let owns_usage = config.usage.is_none();
        let usage = config.usage.unwrap_or_else(UsageTracker::shared);
        let mut surface = DualSurface::new(config.idle_name, config.grabbed_name);
        if let (Some(idle), Some(grabbed)) =
            (config.idle_role_description, config.grabbed_role_description)
        {
            surface = surface.with_role_descriptions(idle, grabbed);
        }
        let applied = AppliedSurface::new(
            surface.options_for(GrabState::Idle),
            surface.role_description_for(GrabState::Idle),
        );
        Self {
            model: GrabModel::new(),
            usage,
            owns_usage,
            applied,
            surface,
            help: config.help,
            capability: config.capability,
            grab_cue: CueNode::grab(config.grab_cue_anchor, config.grab_cue_offset),
            sort_cue: CueNode::sort(config.sort_cue_anchor, config.sort_cue_offset),
            // All-NaN until the embedding toolkit supplies real layout;
            // cue positioning defers itself until then.
            bounds: Rect::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN),
            to_overlay: Affine::IDENTITY,
            installed: ListenerSet::empty(),
            focused: false,
            keyboard_focused: false,
            input_enabled: config.input_enabled,
            grab_key_guard: None,
            pointer_pressed: false,
            ring_style: RingStyle::Solid,
            ring: config.ring,
            on_grab: config.on_grab,
            on_release: config.on_release,
            show_grab_cue: config.show_grab_cue,
            show_sort_cue: config.show_sort_cue,
            mounted: false,
            disposed: false,
        }
    }

    /// Emits the effects that attach the idle representation: role
    /// description, help-text association, surface bundle, idle listener
    /// set, and solid focus ring.
    ///
    /// Mounting twice is a contract violation (no-op in release builds).
    pub fn mount(&mut self) -> Effects {
        debug_assert!(!self.mounted, "mount() must be called exactly once");
        let mut out = Effects::new();
        if self.mounted {
            return out;
        }
        self.mounted = true;
        let description = String::from(self.surface.role_description_for(GrabState::Idle));
        self.applied.set_role_description(&description);
        out.push(SurfaceEffect::SetRoleDescription(description));
        if let Some(text) = self.help.active(self.capability) {
            self.applied.link_description();
            out.push(SurfaceEffect::LinkDescription(String::from(text)));
        }
        let options = self.surface.options_for(GrabState::Idle).clone();
        self.applied.apply(&options);
        out.push(SurfaceEffect::ApplySurface(options));
        self.installed = ListenerSet::IDLE;
        out.push(SurfaceEffect::InstallListeners(ListenerSet::IDLE));
        out.push(SurfaceEffect::RestyleFocusRing(RingStyle::Solid));
        out
    }

    /// Current interaction state.
    #[must_use]
    #[inline]
    pub fn state(&self) -> GrabState {
        self.model.state()
    }

    /// Whether the interaction is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.model.is_enabled()
    }

    /// Whether the target element currently accepts input.
    #[must_use]
    #[inline]
    pub const fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Whether the target element currently has focus.
    #[must_use]
    #[inline]
    pub const fn has_focus(&self) -> bool {
        self.focused
    }

    /// The mirror of the currently attached accessibility surface.
    #[must_use]
    #[inline]
    pub const fn applied(&self) -> &AppliedSurface {
        &self.applied
    }

    /// The listener set currently installed on the target.
    #[must_use]
    #[inline]
    pub const fn installed_listeners(&self) -> ListenerSet {
        self.installed
    }

    /// The grab-hint cue node.
    #[must_use]
    #[inline]
    pub const fn grab_cue(&self) -> &CueNode {
        &self.grab_cue
    }

    /// The sort-hint cue node.
    #[must_use]
    #[inline]
    pub const fn sort_cue(&self) -> &CueNode {
        &self.sort_cue
    }

    /// A handle to the (possibly shared) usage tracker.
    #[must_use]
    pub fn usage(&self) -> SharedUsage {
        self.usage.clone()
    }

    /// The current focus-ring styling.
    #[must_use]
    #[inline]
    pub const fn ring_style(&self) -> RingStyle {
        self.ring_style
    }

    // ---------------------------------------------------------------------
    // Runtime setters
    // ---------------------------------------------------------------------

    /// Updates the idle-state accessible name. Applied to the live surface
    /// immediately when currently idle, so assistive technology announces
    /// the change without a blur/refocus cycle.
    pub fn set_idle_name(&mut self, name: impl Into<String>) -> Effects {
        self.surface.set_idle_name(name);
        self.reapply_if_current(GrabState::Idle)
    }

    /// Updates the grabbed-state accessible name; applied immediately when
    /// currently grabbed.
    pub fn set_grabbed_name(&mut self, name: impl Into<String>) -> Effects {
        self.surface.set_grabbed_name(name);
        self.reapply_if_current(GrabState::Grabbed)
    }

    /// Updates the keyboard help text; re-links the live description when it
    /// is the attached variant.
    pub fn set_keyboard_help(&mut self, text: impl Into<String>) -> Effects {
        self.help.set_keyboard(text);
        self.relink_if_active(InputCapability::Keyboard)
    }

    /// Updates the touch-gesture help text; re-links the live description
    /// when it is the attached variant.
    pub fn set_gesture_help(&mut self, text: impl Into<String>) -> Effects {
        self.help.set_gesture(text);
        self.relink_if_active(InputCapability::Gesture)
    }

    /// Enables or disables the interaction.
    ///
    /// Disabling while grabbed routes through [`interrupt`](Self::interrupt)
    /// first, so the returned stream carries the complete release transition
    /// ahead of any cue changes and the model is back to `Idle` before this
    /// method returns. The controller never re-enables itself; that is the
    /// owning screen's contract.
    pub fn set_enabled(&mut self, enabled: bool) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        if !enabled {
            self.interrupt_into(&mut out);
        }
        let _ = self.model.set_enabled(enabled);
        self.cue_effects(&mut out);
        out
    }

    /// Sets whether the target element accepts input (affects only cue
    /// visibility; enabling/disabling the interaction is
    /// [`set_enabled`](Self::set_enabled)).
    pub fn set_input_enabled(&mut self, input_enabled: bool) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        self.input_enabled = input_enabled;
        self.cue_effects(&mut out);
        out
    }

    // ---------------------------------------------------------------------
    // Input entry points
    // ---------------------------------------------------------------------

    /// The target element gained focus.
    pub fn focus_in(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        self.focused = true;
        self.keyboard_focused = true;
        self.cue_effects(&mut out);
        out
    }

    /// The target element lost focus. A blur while grabbed force-releases.
    pub fn focus_out(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        self.focused = false;
        self.keyboard_focused = false;
        if self.model.release().is_some() {
            self.grab_key_guard = None;
            self.transition(GrabState::Idle, &mut out);
            self.fire_on_release();
        } else {
            self.cue_effects(&mut out);
        }
        out
    }

    /// A key was pressed while the target has focus.
    pub fn key_down(&mut self, input: KeyInput) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        match self.model.state() {
            GrabState::Idle => self.key_down_idle(input, &mut out),
            GrabState::Grabbed => self.key_down_grabbed(input, &mut out),
        }
        out
    }

    /// A key was released. Consumes the one-shot grab-key guard.
    pub fn key_up(&mut self, input: KeyInput) {
        if self.grab_key_guard == Some(input.key) {
            self.grab_key_guard = None;
        }
    }

    /// The pointer pressed the target element.
    ///
    /// Drives the same model as the keyboard path, and clears the
    /// keyboard-focused flag so the teaching cues follow the new modality.
    pub fn pointer_press(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.disposed || !self.model.is_enabled() || !self.input_enabled {
            return out;
        }
        self.keyboard_focused = false;
        if self.model.state() == GrabState::Idle {
            let grabbed = {
                let mut usage = self.usage.borrow_mut();
                self.model.grab(&mut usage)
            };
            if grabbed.is_some() {
                self.pointer_pressed = true;
                self.transition(GrabState::Grabbed, &mut out);
                self.fire_on_grab();
            }
        }
        out
    }

    /// The pointer released after a press.
    pub fn pointer_release(&mut self) -> Effects {
        let mut out = Effects::new();
        if !self.pointer_pressed {
            return out;
        }
        self.pointer_pressed = false;
        if self.model.release().is_some() {
            self.transition(GrabState::Idle, &mut out);
            self.fire_on_release();
        }
        out
    }

    /// The pointer is hovering the target.
    ///
    /// Clears only the keyboard-focused flag used to choose which cue to
    /// show; hover never causes a state transition.
    pub fn pointer_hover(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        self.keyboard_focused = false;
        self.cue_effects(&mut out);
        out
    }

    /// The pointer-highlighting subsystem reports it is becoming active.
    ///
    /// The user started interacting via pointer while a keyboard interaction
    /// existed: release any grabbed state so the two modalities cannot fight
    /// over highlight state.
    pub fn highlight_becoming_active(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        self.keyboard_focused = false;
        self.interrupt_into(&mut out);
        self.cue_effects(&mut out);
        out
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Forces any in-progress interaction to end and the model back to
    /// `Idle`. Always safe to call; a no-op when nothing is in progress.
    pub fn interrupt(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        self.interrupt_into(&mut out);
        out
    }

    /// Resets the model (and the usage tracker, when exclusively owned) and
    /// forces a cue-visibility recomputation.
    pub fn reset(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        self.pointer_pressed = false;
        self.grab_key_guard = None;
        let events = {
            let mut usage = self.usage.borrow_mut();
            self.model.reset(&mut usage, self.owns_usage)
        };
        if events.contains(&GrabEvent::Released) {
            self.transition(GrabState::Idle, &mut out);
            self.fire_on_release();
        } else {
            self.cue_effects(&mut out);
        }
        out
    }

    /// Removes everything this controller attached: the listeners actually
    /// installed, the cue nodes, and — only when owned — the focus ring.
    ///
    /// A still-grabbed model is released first, so the detached element is
    /// left idle and no later call can transition it. Idempotent; a second
    /// call returns no effects.
    pub fn dispose(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        self.disposed = true;
        self.pointer_pressed = false;
        self.grab_key_guard = None;
        if self.model.interrupt().is_some() {
            self.fire_on_release();
        }
        if !self.installed.is_empty() {
            out.push(SurfaceEffect::RemoveListeners(self.installed));
            self.installed = ListenerSet::empty();
        }
        out.push(SurfaceEffect::DetachCues);
        if self.ring == RingOwnership::Owned {
            out.push(SurfaceEffect::DestroyFocusRing);
        }
        out
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    /// Supplies the target's local bounds. Visible cues reposition lazily;
    /// returns `true` when any did.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        self.bounds = bounds;
        self.reposition_cues()
    }

    /// Supplies the tracked local→overlay transform (recompute it whenever
    /// either element's ancestor chain changes scale or position; track a
    /// different node than the target for composite widgets by feeding its
    /// transform here instead).
    pub fn set_transform(&mut self, to_overlay: Affine) -> bool {
        self.to_overlay = to_overlay;
        self.reposition_cues()
    }

    /// Recomputes cue visibility, emitting show/hide effects on flips.
    ///
    /// Transitions do this internally; callers need it only after changing
    /// external inputs to an overridden cue predicate.
    pub fn recompute_cues(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.disposed {
            return out;
        }
        self.cue_effects(&mut out);
        out
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn key_down_idle(&mut self, input: KeyInput, out: &mut Effects) {
        if !input.key.is_grab_key() || !self.model.is_enabled() || !self.input_enabled {
            return;
        }
        self.keyboard_focused = true;
        let mut needs_refocus = false;
        let grabbed = {
            let mut usage = self.usage.borrow_mut();
            self.model
                .keyboard_grab(&mut usage, || needs_refocus = true)
        };
        if grabbed.is_some() {
            // One-shot guard: the keystroke that grabbed must not also fire
            // the release listener installed by the transition below.
            self.grab_key_guard = Some(input.key);
            self.transition(GrabState::Grabbed, out);
            if needs_refocus {
                out.push(SurfaceEffect::Refocus);
            }
            self.fire_on_grab();
        }
    }

    fn key_down_grabbed(&mut self, input: KeyInput, out: &mut Effects) {
        if self.grab_key_guard == Some(input.key) {
            return;
        }
        if input.key.is_release_key() && self.model.release().is_some() {
            self.transition(GrabState::Idle, out);
            self.fire_on_release();
        }
    }

    /// Releases a grabbed model, emitting the full release transition.
    fn interrupt_into(&mut self, out: &mut Effects) {
        self.pointer_pressed = false;
        self.grab_key_guard = None;
        if self.model.interrupt().is_some() {
            self.transition(GrabState::Idle, out);
            self.fire_on_release();
        }
    }

    /// The full transition sequence. The model has already moved to `to`;
    /// this emits, in order: interrupt and remove the leaving state's
    /// listeners, update the role description, toggle the described-by
    /// association, swap the option bundle, install the new listener set,
    /// restyle the focus ring, and recompute cue visibility.
    fn transition(&mut self, to: GrabState, out: &mut Effects) {
        debug_assert!(self.mounted, "transitions require a mounted controller");
        let leaving = self.installed;
        out.push(SurfaceEffect::InterruptListeners(leaving));
        out.push(SurfaceEffect::RemoveListeners(leaving));

        let description = String::from(self.surface.role_description_for(to));
        self.applied.set_role_description(&description);
        out.push(SurfaceEffect::SetRoleDescription(description));

        match to {
            GrabState::Idle => {
                if let Some(text) = self.help.active(self.capability) {
                    self.applied.link_description();
                    out.push(SurfaceEffect::LinkDescription(String::from(text)));
                }
            }
            GrabState::Grabbed => {
                self.applied.unlink_description();
                out.push(SurfaceEffect::UnlinkDescription);
            }
        }

        let options = self.surface.options_for(to).clone();
        self.applied.apply(&options);
        out.push(SurfaceEffect::ApplySurface(options));

        let entering = ListenerSet::for_state(to);
        self.installed = entering;
        out.push(SurfaceEffect::InstallListeners(entering));

        let style = match to {
            GrabState::Idle => RingStyle::Solid,
            GrabState::Grabbed => RingStyle::Dashed,
        };
        self.ring_style = style;
        out.push(SurfaceEffect::RestyleFocusRing(style));

        self.cue_effects(out);
    }

    fn grab_cue_desired(&self) -> bool {
        let usage_ok = match &self.show_grab_cue {
            Some(predicate) => predicate(&self.usage.borrow()),
            None => self.usage.borrow().should_show_grab_cue(),
        };
        self.model.is_enabled()
            && self.model.state() == GrabState::Idle
            && self.focused
            && self.keyboard_focused
            && self.input_enabled
            && usage_ok
    }

    fn sort_cue_desired(&self) -> bool {
        let usage_ok = match &self.show_sort_cue {
            Some(predicate) => predicate(&self.usage.borrow()),
            None => self.usage.borrow().should_show_sort_cue(),
        };
        self.model.is_enabled()
            && self.model.state() == GrabState::Grabbed
            && self.focused
            && usage_ok
    }

    /// Recomputes visibility for both cues; repositions only on a flip to
    /// visible.
    fn cue_effects(&mut self, out: &mut Effects) {
        let show_grab = self.grab_cue_desired();
        let show_sort = self.sort_cue_desired();
        debug_assert!(
            !(show_grab && show_sort),
            "the grab and sort cues are mutually exclusive"
        );
        if self.grab_cue.set_visible(show_grab) {
            if show_grab {
                let _ = self.grab_cue.reposition(self.bounds, self.to_overlay);
                out.push(SurfaceEffect::ShowCue(CueKind::Grab));
            } else {
                out.push(SurfaceEffect::HideCue(CueKind::Grab));
            }
        }
        if self.sort_cue.set_visible(show_sort) {
            if show_sort {
                let _ = self.sort_cue.reposition(self.bounds, self.to_overlay);
                out.push(SurfaceEffect::ShowCue(CueKind::Sort));
            } else {
                out.push(SurfaceEffect::HideCue(CueKind::Sort));
            }
        }
    }

    fn reposition_cues(&mut self) -> bool {
        let grab_moved = self.grab_cue.reposition(self.bounds, self.to_overlay);
        let sort_moved = self.sort_cue.reposition(self.bounds, self.to_overlay);
        grab_moved || sort_moved
    }

    fn reapply_if_current(&mut self, state: GrabState) -> Effects {
        let mut out = Effects::new();
        if self.mounted && !self.disposed && self.model.state() == state {
            let options = self.surface.options_for(state).clone();
            self.applied.apply(&options);
            out.push(SurfaceEffect::ApplySurface(options));
        }
        out
    }

    fn relink_if_active(&mut self, capability: InputCapability) -> Effects {
        let mut out = Effects::new();
        if self.mounted
            && !self.disposed
            && self.capability == capability
            && self.model.state() == GrabState::Idle
        {
            if let Some(text) = self.help.active(self.capability) {
                self.applied.link_description();
                out.push(SurfaceEffect::LinkDescription(String::from(text)));
            }
        }
        out
    }

    fn fire_on_grab(&mut self) {
        if let Some(hook) = &mut self.on_grab {
            hook();
        }
    }

    fn fire_on_release(&mut self) {
        if let Some(hook) = &mut self.on_release {
            hook();
        }
    }
}

impl core::fmt::Debug for GrabController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GrabController")
            .field("state", &self.model.state())
            .field("enabled", &self.model.is_enabled())
            .field("applied", &self.applied)
            .field("installed", &self.installed)
            .field("focused", &self.focused)
            .field("keyboard_focused", &self.keyboard_focused)
            .field("input_enabled", &self.input_enabled)
            .field("ring_style", &self.ring_style)
            .field("ring", &self.ring)
            .field("mounted", &self.mounted)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use core::cell::Cell;
    use grapnel_surface::SurfaceRole;
    use kurbo::Point;

    fn mounted(config: GrabConfig) -> GrabController {
        let mut controller = GrabController::new(config);
        let _ = controller.mount();
        controller
    }

    fn simple() -> GrabController {
        mounted(GrabConfig::new("Apple, 3", "Apple, grabbed").with_keyboard_help("Press space."))
    }

    #[test]
    fn mount_attaches_the_idle_representation_in_order() {
        let mut controller =
            GrabController::new(GrabConfig::new("idle", "grabbed").with_keyboard_help("help"));
        let effects = controller.mount();
        assert_eq!(
            effects.as_slice(),
            &[
                SurfaceEffect::SetRoleDescription("movable".to_string()),
                SurfaceEffect::LinkDescription("help".to_string()),
                SurfaceEffect::ApplySurface(grapnel_surface::SurfaceOptions::idle("idle")),
                SurfaceEffect::InstallListeners(ListenerSet::IDLE),
                SurfaceEffect::RestyleFocusRing(RingStyle::Solid),
            ]
        );
        assert_eq!(controller.applied().role(), SurfaceRole::Button);
        assert!(controller.applied().description_linked());
        assert_eq!(controller.installed_listeners(), ListenerSet::IDLE);
    }

    // Scenario: basic grab/release over a 10x10 target. The role swaps to
    // the application-like role and back, and the idle accessible name is
    // restored verbatim.
    #[test]
    fn basic_grab_and_release() {
        let mut controller = simple();
        let _ = controller.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
        let _ = controller.focus_in();

        let _ = controller.key_down(KeyInput::plain(Key::Space));
        assert_eq!(controller.state(), GrabState::Grabbed);
        assert_eq!(controller.applied().role(), SurfaceRole::Application);
        assert_eq!(controller.applied().name(), "Apple, grabbed");
        assert_eq!(controller.ring_style(), RingStyle::Dashed);

        controller.key_up(KeyInput::plain(Key::Space));
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        assert_eq!(controller.state(), GrabState::Idle);
        assert_eq!(controller.applied().role(), SurfaceRole::Button);
        assert_eq!(controller.applied().name(), "Apple, 3");
        assert_eq!(controller.ring_style(), RingStyle::Solid);
    }

    #[test]
    fn grab_transition_effect_order() {
        let mut controller = simple();
        let _ = controller.focus_in();
        let effects = controller.key_down(KeyInput::plain(Key::Enter));

        // Steps 1-7 in order, then cue changes, then the deferred refocus.
        let expected_prefix = [
            SurfaceEffect::InterruptListeners(ListenerSet::IDLE),
            SurfaceEffect::RemoveListeners(ListenerSet::IDLE),
            SurfaceEffect::SetRoleDescription("grabbed".to_string()),
            SurfaceEffect::UnlinkDescription,
            SurfaceEffect::ApplySurface(grapnel_surface::SurfaceOptions::grabbed(
                "Apple, grabbed",
            )),
            SurfaceEffect::InstallListeners(ListenerSet::GRABBED),
            SurfaceEffect::RestyleFocusRing(RingStyle::Dashed),
        ];
        assert_eq!(&effects[..expected_prefix.len()], &expected_prefix);
        assert_eq!(effects.last(), Some(&SurfaceEffect::Refocus));
    }

    #[test]
    fn release_relinks_the_help_description() {
        let mut controller = simple();
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Enter));
        assert!(!controller.applied().description_linked());

        controller.key_up(KeyInput::plain(Key::Enter));
        let effects = controller.key_down(KeyInput::plain(Key::Escape));
        assert!(controller.applied().description_linked());
        assert!(effects.contains(&SurfaceEffect::LinkDescription("Press space.".to_string())));
    }

    // Scenario: disabling while grabbed transitions exactly once, with the
    // release transition emitted (and the model idle) before any
    // enabled-change cue effects.
    #[test]
    fn disable_while_grabbed_interrupts_once() {
        let release_count = Rc::new(Cell::new(0_u32));
        let counter = release_count.clone();
        let mut controller = mounted(
            GrabConfig::new("idle", "grabbed").on_release(move || counter.set(counter.get() + 1)),
        );
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        assert_eq!(controller.state(), GrabState::Grabbed);

        let effects = controller.set_enabled(false);
        assert_eq!(controller.state(), GrabState::Idle);
        assert!(!controller.is_enabled());
        assert_eq!(release_count.get(), 1);
        // The release transition leads the stream.
        assert_eq!(
            effects.first(),
            Some(&SurfaceEffect::InterruptListeners(ListenerSet::GRABBED))
        );
    }

    #[test]
    fn disable_while_idle_emits_no_transition() {
        let mut controller = simple();
        let effects = controller.set_enabled(false);
        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, SurfaceEffect::ApplySurface(_))),
            "no surface swap on an idle disable"
        );
    }

    // The keystroke that grabs must not also fire the release listener the
    // transition just installed.
    #[test]
    fn grab_key_guard_suppresses_same_keystroke_release() {
        let mut controller = simple();
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Enter));
        assert_eq!(controller.state(), GrabState::Grabbed);

        // A duplicate key-down for the held key is swallowed.
        let effects = controller.key_down(KeyInput::plain(Key::Enter));
        assert!(effects.is_empty());
        assert_eq!(controller.state(), GrabState::Grabbed);

        // A different release key is not guarded.
        let _ = controller.key_down(KeyInput::plain(Key::Escape));
        assert_eq!(controller.state(), GrabState::Idle);
    }

    #[test]
    fn guard_clears_on_key_up() {
        let mut controller = simple();
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        controller.key_up(KeyInput::plain(Key::Space));
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        assert_eq!(controller.state(), GrabState::Idle);
    }

    #[test]
    fn blur_releases_a_grab() {
        let mut controller = simple();
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        let effects = controller.focus_out();
        assert_eq!(controller.state(), GrabState::Idle);
        assert!(effects.contains(&SurfaceEffect::RestyleFocusRing(RingStyle::Solid)));
    }

    #[test]
    fn pointer_press_and_release_drive_the_same_model() {
        let mut controller = simple();
        let _ = controller.pointer_press();
        assert_eq!(controller.state(), GrabState::Grabbed);
        let _ = controller.pointer_release();
        assert_eq!(controller.state(), GrabState::Idle);
        // A stray release with no press in progress is a no-op.
        assert!(controller.pointer_release().is_empty());
    }

    #[test]
    fn pointer_press_respects_enabled_and_input_enabled() {
        let mut controller = simple();
        let _ = controller.set_input_enabled(false);
        assert!(controller.pointer_press().is_empty());
        let _ = controller.set_input_enabled(true);
        let _ = controller.set_enabled(false);
        assert!(controller.pointer_press().is_empty());
        assert_eq!(controller.state(), GrabState::Idle);
    }

    #[test]
    fn grab_cue_shows_on_keyboard_focus_and_suppresses_after_first_grab() {
        let mut controller = simple();
        let effects = controller.focus_in();
        assert!(effects.contains(&SurfaceEffect::ShowCue(CueKind::Grab)));

        // Keyboard grab: the grab cue hides, the sort cue shows.
        let effects = controller.key_down(KeyInput::plain(Key::Space));
        assert!(effects.contains(&SurfaceEffect::HideCue(CueKind::Grab)));
        assert!(effects.contains(&SurfaceEffect::ShowCue(CueKind::Sort)));

        // After release, blur, and refocus the grab cue stays suppressed.
        controller.key_up(KeyInput::plain(Key::Space));
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        let _ = controller.focus_out();
        let effects = controller.focus_in();
        assert!(!effects.contains(&SurfaceEffect::ShowCue(CueKind::Grab)));
    }

    #[test]
    fn cues_are_never_simultaneously_visible() {
        let mut controller = simple();
        let _ = controller.focus_in();
        let check = |c: &GrabController| {
            assert!(!(c.grab_cue().is_visible() && c.sort_cue().is_visible()));
        };
        check(&controller);
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        check(&controller);
        controller.key_up(KeyInput::plain(Key::Space));
        let _ = controller.key_down(KeyInput::plain(Key::Escape));
        check(&controller);
    }

    #[test]
    fn hover_hides_the_grab_cue_without_a_transition() {
        let mut controller = simple();
        let _ = controller.focus_in();
        assert!(controller.grab_cue().is_visible());
        let effects = controller.pointer_hover();
        assert_eq!(controller.state(), GrabState::Idle);
        assert!(effects.contains(&SurfaceEffect::HideCue(CueKind::Grab)));
        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, SurfaceEffect::ApplySurface(_))),
            "hover never swaps the surface"
        );
    }

    #[test]
    fn highlight_becoming_active_releases_a_keyboard_grab() {
        let mut controller = simple();
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        let _ = controller.highlight_becoming_active();
        assert_eq!(controller.state(), GrabState::Idle);
    }

    #[test]
    fn overridden_grab_cue_predicate_persists_past_first_use() {
        let mut controller = mounted(
            GrabConfig::new("idle", "grabbed").show_grab_cue_when(|_| true),
        );
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        controller.key_up(KeyInput::plain(Key::Space));
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        // Built-in would suppress after the first keyboard grab.
        assert!(controller.grab_cue().is_visible());
    }

    #[test]
    fn name_setter_applies_immediately_in_matching_state() {
        let mut controller = simple();
        let effects = controller.set_idle_name("Pear, 5");
        assert!(!effects.is_empty());
        assert_eq!(controller.applied().name(), "Pear, 5");

        // Grabbed-state edit while idle is staged, not applied.
        let effects = controller.set_grabbed_name("Pear, grabbed");
        assert!(effects.is_empty());
        assert_eq!(controller.applied().name(), "Pear, 5");

        // It rides along on the next transition.
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        assert_eq!(controller.applied().name(), "Pear, grabbed");
    }

    #[test]
    fn help_text_setter_relinks_live_description() {
        let mut controller = simple();
        let effects = controller.set_keyboard_help("Press enter.");
        assert_eq!(
            effects.as_slice(),
            &[SurfaceEffect::LinkDescription("Press enter.".to_string())]
        );
        // The gesture variant is stored but not attached in keyboard mode.
        let effects = controller.set_gesture_help("Double-tap and hold.");
        assert!(effects.is_empty());
    }

    #[test]
    fn shared_usage_suppresses_cues_across_controllers() {
        let usage = UsageTracker::shared();
        let mut scene_a = mounted(
            GrabConfig::new("a", "a!").with_shared_usage(usage.clone()),
        );
        let mut scene_b = mounted(
            GrabConfig::new("b", "b!").with_shared_usage(usage),
        );

        let _ = scene_a.focus_in();
        let _ = scene_a.key_down(KeyInput::plain(Key::Space));

        let effects = scene_b.focus_in();
        assert!(!effects.contains(&SurfaceEffect::ShowCue(CueKind::Grab)));
    }

    #[test]
    fn reset_does_not_clear_a_shared_tracker() {
        let usage = UsageTracker::shared();
        let mut controller = mounted(
            GrabConfig::new("a", "a!").with_shared_usage(usage.clone()),
        );
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        let _ = controller.reset();
        assert_eq!(controller.state(), GrabState::Idle);
        assert_eq!(usage.borrow().keyboard_grab_count(), 1);
    }

    #[test]
    fn reset_clears_an_owned_tracker() {
        let mut controller = simple();
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        let _ = controller.reset();
        assert_eq!(controller.usage().borrow().keyboard_grab_count(), 0);
        // The grab cue teaches again after a reset.
        let _ = controller.focus_out();
        let effects = controller.focus_in();
        assert!(effects.contains(&SurfaceEffect::ShowCue(CueKind::Grab)));
    }

    #[test]
    fn interrupt_is_a_safe_no_op_while_idle() {
        let mut controller = simple();
        assert!(controller.interrupt().is_empty());
        assert_eq!(controller.state(), GrabState::Idle);
    }

    #[test]
    fn dispose_removes_only_what_was_attached() {
        let mut controller = simple();
        let effects = controller.dispose();
        assert_eq!(
            effects.as_slice(),
            &[
                SurfaceEffect::RemoveListeners(ListenerSet::IDLE),
                SurfaceEffect::DetachCues,
                SurfaceEffect::DestroyFocusRing,
            ]
        );
        // Idempotent.
        assert!(controller.dispose().is_empty());
        // Input entry points are inert after dispose.
        assert!(controller.focus_in().is_empty());
        assert!(controller.key_down(KeyInput::plain(Key::Space)).is_empty());
    }

    // Disposing while grabbed must release the model; no later entry point
    // may reinstall listeners on the detached element.
    #[test]
    fn dispose_while_grabbed_releases_and_stays_inert() {
        let mut controller = simple();
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        assert_eq!(controller.state(), GrabState::Grabbed);

        let effects = controller.dispose();
        assert_eq!(controller.state(), GrabState::Idle);
        assert_eq!(
            effects.as_slice(),
            &[
                SurfaceEffect::RemoveListeners(ListenerSet::GRABBED),
                SurfaceEffect::DetachCues,
                SurfaceEffect::DestroyFocusRing,
            ]
        );

        assert!(controller.interrupt().is_empty());
        assert!(controller.set_input_enabled(false).is_empty());
        assert!(controller.recompute_cues().is_empty());
        assert_eq!(controller.installed_listeners(), ListenerSet::empty());
    }

    #[test]
    fn dispose_while_grabbed_fires_the_release_hook() {
        let releases = Rc::new(Cell::new(0_u32));
        let counter = releases.clone();
        let mut controller = mounted(
            GrabConfig::new("a", "a!").on_release(move || counter.set(counter.get() + 1)),
        );
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        let _ = controller.dispose();
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn dispose_spares_a_borrowed_focus_ring() {
        let mut controller = mounted(
            GrabConfig::new("a", "a!").with_ring(RingOwnership::Borrowed),
        );
        let effects = controller.dispose();
        assert!(!effects.contains(&SurfaceEffect::DestroyFocusRing));
        assert!(effects.contains(&SurfaceEffect::DetachCues));
    }

    #[test]
    fn bounds_updates_reposition_visible_cues_lazily() {
        let mut controller = simple();
        // No visible cue yet: nothing to move.
        assert!(!controller.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let _ = controller.focus_in();
        assert!(controller.set_bounds(Rect::new(0.0, 0.0, 20.0, 20.0)));
        // Default grab-cue anchor is center-top.
        assert_eq!(controller.grab_cue().position(), Some(Point::new(10.0, 0.0)));
        assert!(controller.set_transform(Affine::translate((5.0, 5.0))));
        assert_eq!(controller.grab_cue().position(), Some(Point::new(15.0, 5.0)));
    }

    #[test]
    fn non_finite_bounds_defer_cue_positioning() {
        let mut controller = simple();
        let _ = controller.focus_in();
        assert!(controller.grab_cue().is_visible());
        assert_eq!(controller.grab_cue().position(), None);
        assert!(controller.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(controller.grab_cue().position().is_some());
    }

    #[test]
    fn on_grab_and_on_release_hooks_fire_per_transition() {
        let grabs = Rc::new(Cell::new(0_u32));
        let releases = Rc::new(Cell::new(0_u32));
        let (g, r) = (grabs.clone(), releases.clone());
        let mut controller = mounted(
            GrabConfig::new("a", "a!")
                .on_grab(move || g.set(g.get() + 1))
                .on_release(move || r.set(r.get() + 1)),
        );
        let _ = controller.focus_in();
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        controller.key_up(KeyInput::plain(Key::Space));
        let _ = controller.key_down(KeyInput::plain(Key::Space));
        let _ = controller.pointer_press();
        let _ = controller.pointer_release();
        assert_eq!(grabs.get(), 2);
        assert_eq!(releases.get(), 2);
    }
}
