// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! Connector routing between note bounding boxes.
//!
//! A connector is drawn boundary-to-boundary, never centre-to-centre, so the
//! line does not cross the card content it attaches to. Each endpoint is the
//! point where the segment from the box centre towards the *other* box's
//! centre leaves the box, which keeps attachment points stable and intuitive
//! as notes move relative to each other.
//!
//! Routing is a total function: overlapping boxes, identical boxes and
//! zero-size boxes all produce a finite, deterministic line.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::geometry::{nearest_boundary_point, segment_intersection, Point, Rect, Segment};

/// Distance within which an edge point counts as sitting on a box corner.
pub const CORNER_EPSILON: f64 = 0.5;

/// Offset applied along the adjacent edges to move a point off a corner.
pub const CORNER_NUDGE: f64 = 2.0;

/// A routed connector in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorLine {
    pub a: Point,
    pub b: Point,
}

/// Routes a connector between two bounding boxes.
pub fn route(a: Rect, b: Rect) -> ConnectorLine {
    ConnectorLine {
        a: edge_point_toward(a, b.center()),
        b: edge_point_toward(b, a.center()),
    }
}

/// The point on the boundary of `rect` where a line from its centre towards
/// `target` exits the box.
///
/// Of the (at most two) edge intersections the one closest to the centre
/// wins. When the centre-to-target segment crosses no edge — `target` inside
/// the box, or a degenerate box — the nearest boundary point to `target` is
/// used instead. Corner-coincident results are nudged inward along both
/// adjacent edges so two connectors never appear to meet exactly at a corner.
pub fn edge_point_toward(rect: Rect, target: Point) -> Point {
    let center = rect.center();
    let ray = Segment::new(center, target);

    let mut candidates: SmallVec<[(Point, f64); 4]> = SmallVec::new();
    for edge in rect.edges() {
        if let Some(hit) = segment_intersection(ray, edge) {
            candidates.push((hit, center.distance_to(hit)));
        }
    }

    let best = candidates
        .into_iter()
        .min_by(|(_, da), (_, db)| da.partial_cmp(db).unwrap_or(Ordering::Equal))
        .map(|(hit, _)| hit)
        .unwrap_or_else(|| nearest_boundary_point(rect, target));

    adjust_if_corner(best, rect)
}

fn adjust_if_corner(mut pt: Point, rect: Rect) -> Point {
    for corner in rect.corners() {
        if (pt.x - corner.x).abs() < CORNER_EPSILON && (pt.y - corner.y).abs() < CORNER_EPSILON {
            pt.x += if corner.x == rect.left() { CORNER_NUDGE } else { -CORNER_NUDGE };
            pt.y += if corner.y == rect.top() { CORNER_NUDGE } else { -CORNER_NUDGE };
            break;
        }
    }
    pt
}
