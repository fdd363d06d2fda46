// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grapnel Model: the authoritative state container for grab-and-drag
//! interactions.
//!
//! This crate holds the two pieces of interaction state that everything else
//! in Grapnel is keyed off:
//!
//! - [`GrabModel`]: a two-state machine (`Idle` ⇄ `Grabbed`) with explicit
//!   grab/release/interrupt transitions. Mutating methods return the
//!   lifecycle events they emitted, so a controller can react synchronously
//!   and in a deterministic order.
//! - [`UsageTracker`]: small shared counters driving one-shot hint
//!   suppression ("show the grab cue until the user has grabbed once via the
//!   keyboard").
//!
//! The model knows nothing about accessibility surfaces, focus indicators,
//! or input devices; those live in `grapnel_grab`. It is deliberately shaped
//! like the other Grapnel state managers: stateful but simple, returning
//! transition events instead of holding observer lists.
//!
//! ## Minimal example
//!
//! ```
//! use grapnel_model::{GrabEvent, GrabModel, GrabState, UsageTracker};
//!
//! let mut usage = UsageTracker::new();
//! let mut model = GrabModel::new();
//! assert_eq!(model.state(), GrabState::Idle);
//!
//! // Grab, then release.
//! assert_eq!(model.grab(&mut usage), Some(GrabEvent::Grabbed));
//! assert_eq!(model.state(), GrabState::Grabbed);
//! assert_eq!(model.release(), Some(GrabEvent::Released));
//!
//! // Releasing while idle is a no-op.
//! assert_eq!(model.release(), None);
//! ```
//!
//! ## Sharing usage across controllers
//!
//! A screen with several scenes typically wants "first-time hint" semantics
//! to be coherent across scene switches. Share one tracker by injecting a
//! [`SharedUsage`] handle into every controller:
//!
//! ```
//! use grapnel_model::UsageTracker;
//!
//! let usage = UsageTracker::shared();
//! let for_scene_a = usage.clone();
//! let for_scene_b = usage.clone();
//!
//! for_scene_a.borrow_mut().record_keyboard_grab();
//! // Scene B sees the suppression immediately.
//! assert!(!for_scene_b.borrow().should_show_grab_cue());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod state;
mod usage;

pub use state::{GrabEvent, GrabModel, GrabState};
pub use usage::{SharedUsage, UsageTracker};
