// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-driven select-and-sort over a bounded numeric range.
//!
//! This crate layers a two-phase sorting interaction on top of
//! [`grapnel_grab`]: the wrapped grab controller's idle state becomes
//! *selecting* (directional keys move a selection among candidate group
//! items) and its grabbed state becomes *sorting* (the same keys apply
//! clamped deltas to the selected item's numeric value).
//!
//! The domain is fully injected: a [`SortController`] is generic over a
//! group-item type `G` and receives closures for reading a value, writing a
//! sorted value, moving the selection, and picking a default selection. The
//! live [`SortRange`] can be replaced at any time as the hosting screen's
//! data changes.
//!
//! ```
//! use grapnel_sort::{DeltaConfig, SortRange, delta_for_key};
//! use grapnel_grab::{Key, KeyInput};
//!
//! let range = SortRange::new(0.0, 10.0);
//! let config = DeltaConfig::default();
//! assert_eq!(
//!     delta_for_key(KeyInput::plain(Key::ArrowRight), &config, &range),
//!     Some(1.0),
//! );
//! assert_eq!(
//!     delta_for_key(KeyInput::plain(Key::Home), &config, &range),
//!     Some(-10.0),
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod delta;

pub use controller::{
    DefaultItem, ItemEnabled, NextItem, NumberKeyMapper, SortAction, SortConfig, SortController,
    SortHook, ValueAccessor,
};
pub use delta::{DeltaConfig, SortRange, delta_for_key};
