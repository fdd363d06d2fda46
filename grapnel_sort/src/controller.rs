// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The select-and-sort controller.

use alloc::boxed::Box;
use core::fmt;

use grapnel_grab::{Effects, GrabConfig, GrabController, Key, KeyInput};
use grapnel_model::GrabState;

use crate::delta::{DeltaConfig, SortRange, delta_for_key};

/// Reads the numeric value of a group item.
pub type ValueAccessor<G> = Box<dyn Fn(&G) -> f64>;
/// Applies a new numeric value to a group item.
pub type SortAction<G> = Box<dyn FnMut(&G, f64)>;
/// Moves the selection by a signed delta from the current item.
pub type NextItem<G> = Box<dyn FnMut(f64, &G) -> Option<G>>;
/// Picks the item to select when nothing is selected yet.
pub type DefaultItem<G> = Box<dyn FnMut() -> Option<G>>;
/// Whether a group item may currently be sorted.
pub type ItemEnabled<G> = Box<dyn Fn(&G) -> bool>;
/// Maps a pressed digit to an absolute value for direct entry.
pub type NumberKeyMapper = Box<dyn Fn(char) -> Option<f64>>;
/// Invoked after a sort with the item and its previous value.
pub type SortHook<G> = Box<dyn FnMut(&G, f64)>;

/// Domain collaborators for a [`SortController`].
///
/// All domain knowledge — what a group item is, how its value is read and
/// written, how the selection moves among candidates — is injected here as
/// pure functions supplied by the owning screen. The controller itself never
/// learns what is being sorted.
pub struct SortConfig<G> {
    pub(crate) delta: DeltaConfig,
    pub(crate) value_of: ValueAccessor<G>,
    pub(crate) sort_item: SortAction<G>,
    pub(crate) next_item: NextItem<G>,
    pub(crate) default_item: DefaultItem<G>,
    pub(crate) is_item_enabled: ItemEnabled<G>,
    pub(crate) number_key_mapper: Option<NumberKeyMapper>,
    pub(crate) on_sort: Option<SortHook<G>>,
}

impl<G> SortConfig<G> {
    /// Creates a configuration from the four mandatory collaborators.
    ///
    /// Defaults: the documented [`DeltaConfig`] steps, every item enabled,
    /// no direct numeric entry, no sort hook.
    #[must_use]
    pub fn new(
        value_of: impl Fn(&G) -> f64 + 'static,
        sort_item: impl FnMut(&G, f64) + 'static,
        next_item: impl FnMut(f64, &G) -> Option<G> + 'static,
        default_item: impl FnMut() -> Option<G> + 'static,
    ) -> Self {
        Self {
            delta: DeltaConfig::default(),
            value_of: Box::new(value_of),
            sort_item: Box::new(sort_item),
            next_item: Box::new(next_item),
            default_item: Box::new(default_item),
            is_item_enabled: Box::new(|_| true),
            number_key_mapper: None,
            on_sort: None,
        }
    }

    /// Replaces the step sizes.
    #[must_use]
    pub fn with_delta(mut self, delta: DeltaConfig) -> Self {
        self.delta = delta;
        self
    }

    /// Restricts which items may be sorted.
    #[must_use]
    pub fn item_enabled_when(mut self, predicate: impl Fn(&G) -> bool + 'static) -> Self {
        self.is_item_enabled = Box::new(predicate);
        self
    }

    /// Enables the direct numeric-entry path: pressed digits map through
    /// `mapper` to an absolute value, clamped into the live range.
    #[must_use]
    pub fn with_number_keys(mut self, mapper: impl Fn(char) -> Option<f64> + 'static) -> Self {
        self.number_key_mapper = Some(Box::new(mapper));
        self
    }

    /// Invokes `hook` after every sort, with the item and its old value.
    #[must_use]
    pub fn on_sort(mut self, hook: impl FnMut(&G, f64) + 'static) -> Self {
        self.on_sort = Some(Box::new(hook));
        self
    }
}

// Manual Debug impl since the collaborators aren't Debug.
impl<G> fmt::Debug for SortConfig<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortConfig")
            .field("delta", &self.delta)
            .field("has_number_key_mapper", &self.number_key_mapper.is_some())
            .field("has_on_sort", &self.on_sort.is_some())
            .finish_non_exhaustive()
    }
}

/// Keyboard-driven select-and-sort over a bounded numeric range.
///
/// Wraps a [`GrabController`] and reinterprets its two states: while idle
/// the interaction is *selecting* (directional keys move the selection among
/// candidate items, never touching a value), while grabbed it is *sorting*
/// (the same keys apply a signed delta to the selected item's value, clamped
/// by the live [`SortRange`]). The role description reflects the
/// affordance — "navigable" while selecting, "sortable" while sorting —
/// unless the grab configuration overrides it.
///
/// # Example
///
/// ```
/// use grapnel_grab::{GrabConfig, Key, KeyInput};
/// use grapnel_sort::{SortConfig, SortController, SortRange};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let values = Rc::new(RefCell::new(vec![9.0_f64, 4.0]));
/// let read = values.clone();
/// let write = values.clone();
/// let config = SortConfig::<usize>::new(
///     move |&i| read.borrow()[i],
///     move |&i, v| write.borrow_mut()[i] = v,
///     |delta, &i| Some(if delta < 0.0 { i.saturating_sub(1) } else { (i + 1).min(1) }),
///     || Some(0),
/// );
///
/// let mut sorter = SortController::new(
///     GrabConfig::new("Group", "Group, grabbed"),
///     config,
///     SortRange::new(0.0, 10.0),
/// );
/// let _ = sorter.mount();
/// let _ = sorter.focus_in();
/// let _ = sorter.key_down(KeyInput::plain(Key::Space)); // start sorting
/// let _ = sorter.key_down(KeyInput::plain(Key::ArrowRight));
/// // 9 + 1, clamped inside [0, 10].
/// assert_eq!(values.borrow()[0], 10.0);
/// ```
pub struct SortController<G> {
    inner: GrabController,
    range: SortRange,
    delta: DeltaConfig,
    selected: Option<G>,
    value_of: ValueAccessor<G>,
    sort_item: SortAction<G>,
    next_item: NextItem<G>,
    default_item: DefaultItem<G>,
    is_item_enabled: ItemEnabled<G>,
    number_key_mapper: Option<NumberKeyMapper>,
    on_sort: Option<SortHook<G>>,
}

impl<G: Clone> SortController<G> {
    /// Role description while selecting.
    pub const SELECTING_ROLE_DESCRIPTION: &'static str = "navigable";
    /// Role description while sorting.
    pub const SORTING_ROLE_DESCRIPTION: &'static str = "sortable";

    /// Creates a controller over `grab`'s target with the injected domain
    /// collaborators and the initial live range.
    #[must_use]
    pub fn new(grab: GrabConfig, sort: SortConfig<G>, range: SortRange) -> Self {
        let grab = if grab.role_descriptions().is_none() {
            grab.with_role_descriptions(
                Self::SELECTING_ROLE_DESCRIPTION,
                Self::SORTING_ROLE_DESCRIPTION,
            )
        } else {
            grab
        };
        Self {
            inner: GrabController::new(grab),
            range,
            delta: sort.delta,
            selected: None,
            value_of: sort.value_of,
            sort_item: sort.sort_item,
            next_item: sort.next_item,
            default_item: sort.default_item,
            is_item_enabled: sort.is_item_enabled,
            number_key_mapper: sort.number_key_mapper,
            on_sort: sort.on_sort,
        }
    }

    /// Attaches the selecting representation. Call once.
    pub fn mount(&mut self) -> Effects {
        self.inner.mount()
    }

    /// The wrapped grab controller, for queries and geometry updates.
    #[must_use]
    pub const fn grab(&self) -> &GrabController {
        &self.inner
    }

    /// Mutable access to the wrapped controller.
    ///
    /// Use the `SortController` entry points for focus, keys, enabling, and
    /// highlight changes; they keep the selection consistent before
    /// forwarding.
    pub const fn grab_mut(&mut self) -> &mut GrabController {
        &mut self.inner
    }

    /// Current interaction state (`Idle` = selecting, `Grabbed` = sorting).
    #[must_use]
    pub fn state(&self) -> GrabState {
        self.inner.state()
    }

    /// The currently selected group item, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&G> {
        self.selected.as_ref()
    }

    /// The live range.
    #[must_use]
    #[inline]
    pub const fn range(&self) -> SortRange {
        self.range
    }

    /// Replaces the live range. A selection whose value no longer fits is
    /// reset through the default-item collaborator.
    pub fn set_range(&mut self, range: SortRange) {
        self.range = range;
        if let Some(item) = &self.selected {
            if !range.contains((self.value_of)(item)) {
                self.selected = (self.default_item)();
            }
        }
    }

    /// The target gained focus: pick a default selection if none exists.
    pub fn focus_in(&mut self) -> Effects {
        if self.selected.is_none() {
            self.selected = (self.default_item)();
        }
        self.inner.focus_in()
    }

    /// The target lost focus. The selection survives a blur.
    pub fn focus_out(&mut self) -> Effects {
        self.inner.focus_out()
    }

    /// A key was pressed while the target has focus.
    pub fn key_down(&mut self, input: KeyInput) -> Effects {
        match self.inner.state() {
            GrabState::Idle => self.key_down_selecting(input),
            GrabState::Grabbed => self.key_down_sorting(input),
        }
    }

    /// A key was released.
    pub fn key_up(&mut self, input: KeyInput) {
        self.inner.key_up(input);
    }

    /// Enables or disables the interaction. Disabling clears the selection.
    pub fn set_enabled(&mut self, enabled: bool) -> Effects {
        if !enabled {
            self.selected = None;
        }
        self.inner.set_enabled(enabled)
    }

    /// Pointer highlighting is becoming active: clear the keyboard
    /// selection so the two modalities cannot produce highlight flicker.
    pub fn highlight_becoming_active(&mut self) -> Effects {
        self.selected = None;
        self.inner.highlight_becoming_active()
    }

    /// Forces any in-progress interaction to end.
    pub fn interrupt(&mut self) -> Effects {
        self.inner.interrupt()
    }

    /// Resets the interaction and clears the selection.
    pub fn reset(&mut self) -> Effects {
        self.selected = None;
        self.inner.reset()
    }

    /// Detaches everything the controller attached.
    pub fn dispose(&mut self) -> Effects {
        self.inner.dispose()
    }

    fn key_down_selecting(&mut self, input: KeyInput) -> Effects {
        if input.key.is_grab_key() {
            return self.inner.key_down(input);
        }
        if let Some(delta) = delta_for_key(input, &self.delta, &self.range) {
            self.move_selection(delta);
        }
        Effects::new()
    }

    fn key_down_sorting(&mut self, input: KeyInput) -> Effects {
        // Release keys (and the one-shot grab-key guard) belong to the
        // wrapped controller.
        if input.key.is_release_key() {
            return self.inner.key_down(input);
        }
        if let Key::Char(c) = input.key {
            if let Some(mapper) = &self.number_key_mapper {
                if let Some(value) = mapper(c) {
                    return self.apply_value(value);
                }
            }
        }
        match delta_for_key(input, &self.delta, &self.range) {
            Some(delta) => self.apply_delta(delta),
            None => Effects::new(),
        }
    }

    /// Moves the selection; never mutates a domain value.
    fn move_selection(&mut self, delta: f64) {
        let current = match self.selected.take() {
            Some(item) => Some(item),
            None => (self.default_item)(),
        };
        if let Some(current) = current {
            self.selected = (self.next_item)(delta, &current).or(Some(current));
        }
    }

    fn apply_delta(&mut self, delta: f64) -> Effects {
        let Some(item) = self.current_or_default() else {
            return Effects::new();
        };
        let old = (self.value_of)(&item);
        self.apply_to(&item, old, self.range.clamp(old + delta))
    }

    fn apply_value(&mut self, value: f64) -> Effects {
        let Some(item) = self.current_or_default() else {
            return Effects::new();
        };
        let old = (self.value_of)(&item);
        self.apply_to(&item, old, self.range.clamp(value))
    }

    fn apply_to(&mut self, item: &G, old: f64, new: f64) -> Effects {
        if !(self.is_item_enabled)(item) || new == old {
            return Effects::new();
        }
        (self.sort_item)(item, new);
        if let Some(hook) = &mut self.on_sort {
            hook(item, old);
        }
        // First actual sort: stop teaching the sort cue.
        self.inner.usage().borrow_mut().suppress_sort_cue();
        self.inner.recompute_cues()
    }

    fn current_or_default(&mut self) -> Option<G> {
        if self.selected.is_none() {
            self.selected = (self.default_item)();
        }
        self.selected.clone()
    }
}

impl<G: fmt::Debug> fmt::Debug for SortController<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortController")
            .field("inner", &self.inner)
            .field("range", &self.range)
            .field("delta", &self.delta)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
