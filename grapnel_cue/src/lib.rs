// Copyright 2026 the Grapnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grapnel Cue: transient visual hints that teach keyboard interaction.
//!
//! A cue is a small directional glyph shown near a focused element to
//! advertise an available keyboard action ("press to grab", "arrow keys to
//! sort"), suppressed after first successful use. This crate provides:
//!
//! - [`CueNode`]: the hint's presentation state — kind, anchor, pixel
//!   offset, visibility, and last computed overlay position. Cue nodes are
//!   created once at construction and never reparented; only `visible` and
//!   the position mutate.
//! - [`anchor_point`]: pure anchor geometry on a target's local bounds.
//! - [`CueNode::glyph`]: a [`kurbo::BezPath`] chevron pair for rendering.
//!
//! Positioning is transform-aware and lazy. The owning controller feeds the
//! target's local bounds and the local→overlay [`Affine`] (recomputed by the
//! embedding toolkit whenever either element's ancestor chain changes scale
//! or position), and [`CueNode::reposition`] maps the anchor through it.
//! Repositioning is skipped entirely while the cue is hidden or the bounds
//! are not finite; a hidden cue has no reason to track its target.
//!
//! ## Minimal example
//!
//! ```
//! use grapnel_cue::{CueAnchor, CueKind, CueNode};
//! use kurbo::{Affine, Point, Rect, Vec2};
//!
//! let mut cue = CueNode::grab(CueAnchor::CenterTop, Vec2::new(0.0, -12.0));
//! cue.set_visible(true);
//!
//! let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
//! assert!(cue.reposition(bounds, Affine::scale(2.0)));
//! // (5, 0) scaled by 2, minus 12 pixels of vertical offset.
//! assert_eq!(cue.position(), Some(Point::new(10.0, -12.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Which hint a cue node represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CueKind {
    /// "Press to grab": shown while idle and focused, until the first
    /// successful keyboard grab.
    Grab,
    /// "Use the arrow keys": shown while grabbed, until the first sort.
    Sort,
}

/// The anchor point on the target's bounds that a cue is attached to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CueAnchor {
    /// The center of the bounds.
    Center,
    /// The midpoint of the top edge.
    #[default]
    CenterTop,
    /// The midpoint of the bottom edge.
    CenterBottom,
    /// The midpoint of the left edge.
    LeftCenter,
    /// The midpoint of the right edge.
    RightCenter,
}

/// Returns the anchor point on `bounds` in the target's local frame.
#[must_use]
pub fn anchor_point(bounds: Rect, anchor: CueAnchor) -> Point {
    let center = bounds.center();
    match anchor {
        CueAnchor::Center => center,
        CueAnchor::CenterTop => Point::new(center.x, bounds.y0),
        CueAnchor::CenterBottom => Point::new(center.x, bounds.y1),
        CueAnchor::LeftCenter => Point::new(bounds.x0, center.y),
        CueAnchor::RightCenter => Point::new(bounds.x1, center.y),
    }
}

/// A transient directional hint near a focused element.
///
/// The node is pure presentation state; visibility decisions live in the
/// owning controller (they depend on interaction state, focus, and usage
/// tracking).
#[derive(Clone, Debug, PartialEq)]
pub struct CueNode {
    kind: CueKind,
    anchor: CueAnchor,
    offset: Vec2,
    visible: bool,
    position: Option<Point>,
}

impl CueNode {
    /// Creates a cue with the given kind, anchor, and pixel offset.
    #[must_use]
    pub const fn new(kind: CueKind, anchor: CueAnchor, offset: Vec2) -> Self {
        Self {
            kind,
            anchor,
            offset,
            visible: false,
            position: None,
        }
    }

    /// Creates a grab-hint cue.
    #[must_use]
    pub const fn grab(anchor: CueAnchor, offset: Vec2) -> Self {
        Self::new(CueKind::Grab, anchor, offset)
    }

    /// Creates a sort-hint cue.
    #[must_use]
    pub const fn sort(anchor: CueAnchor, offset: Vec2) -> Self {
        Self::new(CueKind::Sort, anchor, offset)
    }

    /// This cue's kind.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> CueKind {
        self.kind
    }

    /// This cue's anchor.
    #[must_use]
    #[inline]
    pub const fn anchor(&self) -> CueAnchor {
        self.anchor
    }

    /// Whether the cue is currently shown.
    #[must_use]
    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the cue. Returns `true` when visibility flipped.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let flipped = self.visible != visible;
        self.visible = visible;
        flipped
    }

    /// The last computed position in the overlay frame, if any.
    #[must_use]
    #[inline]
    pub const fn position(&self) -> Option<Point> {
        self.position
    }

    /// Maps the anchor on `bounds` through `to_overlay`, adds the pixel
    /// offset, and stores the result.
    ///
    /// Returns `false` without touching the position while the cue is hidden
    /// or `bounds` is not finite (e.g. the target has not been laid out
    /// yet); positioning simply retries on the next relevant event.
    pub fn reposition(&mut self, bounds: Rect, to_overlay: Affine) -> bool {
        if !self.visible || !bounds.is_finite() {
            return false;
        }
        let mapped = to_overlay * anchor_point(bounds, self.anchor);
        self.position = Some(mapped + self.offset);
        true
    }

    /// Builds the directional glyph for this cue, centered on the origin.
    ///
    /// Grab cues point up and down (press/lift), sort cues left and right
    /// (the sorting axis). `size` is the tip-to-tip extent of one chevron.
    #[must_use]
    pub fn glyph(&self, size: f64) -> BezPath {
        let gap = size * 0.75;
        match self.kind {
            CueKind::Grab => {
                let mut path = chevron(Vec2::new(0.0, -1.0), size, Point::new(0.0, -gap));
                append(&mut path, &chevron(Vec2::new(0.0, 1.0), size, Point::new(0.0, gap)));
                path
            }
            CueKind::Sort => {
                let mut path = chevron(Vec2::new(-1.0, 0.0), size, Point::new(-gap, 0.0));
                append(&mut path, &chevron(Vec2::new(1.0, 0.0), size, Point::new(gap, 0.0)));
                path
            }
        }
    }
}

fn append(path: &mut BezPath, other: &BezPath) {
    for el in other.elements() {
        path.push(*el);
    }
}

/// A closed triangular chevron pointing along the (unit) `direction`,
/// with its tip `size / 2` from `at`.
fn chevron(direction: Vec2, size: f64, at: Point) -> BezPath {
    let half = size / 2.0;
    // Perpendicular to the pointing direction, for the base corners.
    let across = Vec2::new(-direction.y, direction.x);
    let tip = at + direction * half;
    let base = at - direction * half;
    let mut path = BezPath::new();
    path.move_to(tip);
    path.line_to(base + across * half);
    path.line_to(base - across * half);
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_points_on_unit_box() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(anchor_point(bounds, CueAnchor::Center), Point::new(5.0, 5.0));
        assert_eq!(
            anchor_point(bounds, CueAnchor::CenterTop),
            Point::new(5.0, 0.0)
        );
        assert_eq!(
            anchor_point(bounds, CueAnchor::CenterBottom),
            Point::new(5.0, 10.0)
        );
        assert_eq!(
            anchor_point(bounds, CueAnchor::LeftCenter),
            Point::new(0.0, 5.0)
        );
        assert_eq!(
            anchor_point(bounds, CueAnchor::RightCenter),
            Point::new(10.0, 5.0)
        );
    }

    #[test]
    fn hidden_cue_does_not_reposition() {
        let mut cue = CueNode::grab(CueAnchor::Center, Vec2::ZERO);
        let moved = cue.reposition(Rect::new(0.0, 0.0, 10.0, 10.0), Affine::IDENTITY);
        assert!(!moved);
        assert_eq!(cue.position(), None);
    }

    #[test]
    fn non_finite_bounds_defer_positioning() {
        let mut cue = CueNode::sort(CueAnchor::Center, Vec2::ZERO);
        let _ = cue.set_visible(true);
        let degenerate = Rect::new(f64::NAN, 0.0, 10.0, 10.0);
        assert!(!cue.reposition(degenerate, Affine::IDENTITY));
        assert_eq!(cue.position(), None);
        // Becomes positionable once bounds are finite.
        assert!(cue.reposition(Rect::new(0.0, 0.0, 10.0, 10.0), Affine::IDENTITY));
        assert_eq!(cue.position(), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn reposition_maps_through_transform_and_offset() {
        let mut cue = CueNode::grab(CueAnchor::CenterTop, Vec2::new(0.0, -12.0));
        let _ = cue.set_visible(true);
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let to_overlay = Affine::translate((100.0, 50.0)) * Affine::scale(2.0);
        assert!(cue.reposition(bounds, to_overlay));
        // Anchor (5, 0) scaled to (10, 0), translated to (110, 50), offset
        // by (0, -12).
        assert_eq!(cue.position(), Some(Point::new(110.0, 38.0)));
    }

    #[test]
    fn set_visible_reports_flips_only() {
        let mut cue = CueNode::grab(CueAnchor::Center, Vec2::ZERO);
        assert!(cue.set_visible(true));
        assert!(!cue.set_visible(true));
        assert!(cue.set_visible(false));
    }

    #[test]
    fn glyphs_are_non_empty_and_kind_specific() {
        let grab = CueNode::grab(CueAnchor::Center, Vec2::ZERO).glyph(8.0);
        let sort = CueNode::sort(CueAnchor::Center, Vec2::ZERO).glyph(8.0);
        assert!(!grab.elements().is_empty(), "grab glyph has geometry");
        assert!(!sort.elements().is_empty(), "sort glyph has geometry");
        // The two kinds point along different axes.
        assert_ne!(grab, sort);
    }
}
