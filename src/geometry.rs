// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! 2D primitives shared by the viewport transform and the connector router.
//!
//! Everything here is plain `f64` canvas-space arithmetic. There is no
//! dependency on any UI layer; callers feed in whatever rectangles their
//! rendering toolkit reports.

/// A point in either canvas or viewport space, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An axis-aligned bounding box in canvas space.
///
/// `width`/`height` are expected to be non-negative; a zero-size rect is a
/// valid degenerate box whose edges collapse to a single point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.left(), self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// The four box edges as finite segments, in left/right/top/bottom order.
    pub fn edges(&self) -> [Segment; 4] {
        [
            Segment::new(
                Point::new(self.left(), self.top()),
                Point::new(self.left(), self.bottom()),
            ),
            Segment::new(
                Point::new(self.right(), self.top()),
                Point::new(self.right(), self.bottom()),
            ),
            Segment::new(
                Point::new(self.left(), self.top()),
                Point::new(self.right(), self.top()),
            ),
            Segment::new(
                Point::new(self.left(), self.bottom()),
                Point::new(self.right(), self.bottom()),
            ),
        ]
    }

    /// Strict interior test; boundary points are not interior.
    pub fn contains_interior(&self, p: Point) -> bool {
        p.x > self.left() && p.x < self.right() && p.y > self.top() && p.y < self.bottom()
    }
}

/// A finite line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

/// Slack applied to the on-segment bounds checks so that intersections
/// landing exactly on an endpoint survive floating-point noise.
pub(crate) const ON_SEGMENT_TOLERANCE: f64 = 0.1;

/// Intersection of two finite segments, or `None` when the segments are
/// parallel, degenerate, or when the line intersection falls outside either
/// segment (within [`ON_SEGMENT_TOLERANCE`]).
pub fn segment_intersection(p: Segment, q: Segment) -> Option<Point> {
    let (x1, y1, x2, y2) = (p.a.x, p.a.y, p.b.x, p.b.y);
    let (x3, y3, x4, y4) = (q.a.x, q.a.y, q.b.x, q.b.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return None;
    }

    let px = ((x1 * y2 - y1 * x2) * (x3 - x4) - (x1 - x2) * (x3 * y4 - y3 * x4)) / denom;
    let py = ((x1 * y2 - y1 * x2) * (y3 - y4) - (y1 - y2) * (x3 * y4 - y3 * x4)) / denom;

    let within = |value: f64, a: f64, b: f64| {
        value >= a.min(b) - ON_SEGMENT_TOLERANCE && value <= a.max(b) + ON_SEGMENT_TOLERANCE
    };

    if !within(px, x1, x2) || !within(px, x3, x4) || !within(py, y1, y2) || !within(py, y3, y4) {
        return None;
    }

    Some(Point::new(px, py))
}

/// Nearest point on the boundary of `rect` to `target`.
///
/// Clamps each axis independently to the box range, then snaps the result to
/// the closest side so the point always lies on the perimeter even when
/// `target` is inside the box.
pub fn nearest_boundary_point(rect: Rect, target: Point) -> Point {
    let mut px = target.x.max(rect.left()).min(rect.right());
    let mut py = target.y.max(rect.top()).min(rect.bottom());

    let d_left = (px - rect.left()).abs();
    let d_right = (px - rect.right()).abs();
    let d_top = (py - rect.top()).abs();
    let d_bottom = (py - rect.bottom()).abs();

    let min_dist = d_left.min(d_right).min(d_top).min(d_bottom);
    if min_dist == d_left {
        px = rect.left();
    } else if min_dist == d_right {
        px = rect.right();
    }
    if min_dist == d_top {
        py = rect.top();
    } else if min_dist == d_bottom {
        py = rect.bottom();
    }

    Point::new(px, py)
}
