// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grapnel Surface: the accessibility-tree representation of a grabbable
//! element.
//!
//! A grab interaction exposes one focusable element whose accessibility
//! surface — role, name, description association, focusability — changes
//! shape depending on whether it is idle (selectable) or grabbed (operable).
//! This crate models that surface as data:
//!
//! - [`SurfaceOptions`]: one immutable, fully specified option bundle. A
//!   controller computes one bundle per state at construction and applies it
//!   wholesale on every transition; surfaces are never patched
//!   incrementally, which rules out order-dependent partial-state bugs.
//! - [`DualSurface`]: both bundles plus per-state role-description strings,
//!   with staging setters for the accessible names.
//! - [`HelpText`] + [`InputCapability`]: exactly one help-text variant
//!   (keyboard or touch gesture) is attached to the live surface, selected
//!   by a capability that is fixed for the process lifetime.
//! - [`AppliedSurface`]: the controller-side mirror of whatever is currently
//!   attached to the target element, for querying without replaying the
//!   effect stream.
//!
//! ## Minimal example
//!
//! ```
//! use grapnel_model::GrabState;
//! use grapnel_surface::{DualSurface, SurfaceRole};
//!
//! let surface = DualSurface::new("Apple, 3", "Apple, grabbed");
//! assert_eq!(surface.options_for(GrabState::Idle).role, SurfaceRole::Button);
//! assert_eq!(
//!     surface.options_for(GrabState::Grabbed).role,
//!     SurfaceRole::Application,
//! );
//! // Both representations stay focusable.
//! assert!(surface.options_for(GrabState::Grabbed).focusable);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod applied;
mod help;
mod options;

pub use applied::AppliedSurface;
pub use help::{HelpText, InputCapability};
pub use options::{DualSurface, SurfaceOptions, SurfaceRole};
