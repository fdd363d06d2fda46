// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grapnel Grab: an accessible grab-and-drag interaction controller.
//!
//! A drag-and-drop-style manipulation that is fully operable through the
//! keyboard and assistive technology needs one focusable element with two
//! accessibility-tree representations: an idle, selectable one (a button
//! you can press to grab) and a grabbed, operable one (an application-style
//! widget that consumes arrow keys). [`GrabController`] owns that swap and
//! everything that must stay synchronized with it:
//!
//! - the per-state accessibility option bundles (role, name, description
//!   association), applied wholesale on each transition;
//! - the per-state input listener sets, disjoint apart from the
//!   always-present pointer press/release listener;
//! - the focus indicator's solid/dashed styling;
//! - the teaching cues, shown while focused and suppressed after first use
//!   via a shared [`UsageTracker`](grapnel_model::UsageTracker).
//!
//! The controller is toolkit-agnostic in the same way as the rest of
//! Grapnel: it consumes routed input through plain entry points and emits a
//! deterministic, ordered [`SurfaceEffect`] stream for the embedding toolkit
//! to execute against its real accessibility tree and scene graph. A full
//! transition's sequence is always complete before a call returns, so no
//! observer can see a half-migrated surface.
//!
//! ## Minimal example
//!
//! ```
//! use grapnel_grab::{GrabConfig, GrabController, Key, KeyInput};
//! use grapnel_model::GrabState;
//!
//! let mut controller = GrabController::new(
//!     GrabConfig::new("Apple, 3", "Apple, grabbed")
//!         .with_keyboard_help("Press space to grab the apple."),
//! );
//!
//! // Attach the idle representation.
//! let mount_effects = controller.mount();
//! assert!(!mount_effects.is_empty());
//!
//! // Keyboard grab, then escape to release.
//! let _ = controller.focus_in();
//! let _ = controller.key_down(KeyInput::plain(Key::Enter));
//! assert_eq!(controller.state(), GrabState::Grabbed);
//! controller.key_up(KeyInput::plain(Key::Enter));
//! let _ = controller.key_down(KeyInput::plain(Key::Escape));
//! assert_eq!(controller.state(), GrabState::Idle);
//! ```
//!
//! The select-and-sort variant (keyboard-driven numeric deltas over a
//! bounded range) lives in `grapnel_sort`, layered on this controller.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod effect;
mod input;
mod listener;

pub use config::{CuePredicate, GrabConfig, TransitionHook};
pub use controller::{Effects, GrabController};
pub use effect::{RingOwnership, RingStyle, SurfaceEffect};
pub use input::{Key, KeyInput};
pub use listener::ListenerSet;

// Re-exported so effect consumers can match cue effects without a direct
// dependency on the cue crate.
pub use grapnel_cue::CueKind;
