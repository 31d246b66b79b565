// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! The board viewport transform.
//!
//! A board is an unbounded canvas rendered through a combined
//! scale-then-translate transform: `viewport = canvas * scale + pan`.
//! [`Viewport`] owns that transform and keeps it inside the supported scale
//! bounds. Zooming is always anchored to a focal viewport point so the canvas
//! point under the cursor (or the view centre) stays put.
//!
//! The transform never rejects input: malformed scale values fall back to
//! `1.0` and malformed pan components fall back to `0.0`, because a board
//! view that refuses to draw over a NaN is worse than one that recovers.

use crate::geometry::Point;

/// Lower zoom bound.
pub const MIN_SCALE: f64 = 0.3;
/// Upper zoom bound.
pub const MAX_SCALE: f64 = 2.0;

/// Scale factor applied per wheel notch when zooming in.
pub const WHEEL_STEP_IN: f64 = 1.1;
/// Scale factor applied per wheel notch when zooming out.
pub const WHEEL_STEP_OUT: f64 = 0.9;

/// Scale and pan state of one board view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    pan: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Identity transform: `scale = 1`, no pan.
    pub fn new() -> Self {
        Self { scale: 1.0, pan: Point::default() }
    }

    /// Builds a viewport from raw parts, sanitizing each component.
    pub fn from_parts(scale: f64, pan_x: f64, pan_y: f64) -> Self {
        Self {
            scale: sanitize_scale(scale),
            pan: Point::new(sanitize_pan(pan_x), sanitize_pan(pan_y)),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Maps a viewport (pointer) point into canvas space.
    pub fn to_canvas(&self, p: Point) -> Point {
        Point::new((p.x - self.pan.x) / self.scale, (p.y - self.pan.y) / self.scale)
    }

    /// Maps a canvas point into viewport space.
    pub fn to_viewport(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.pan.x, p.y * self.scale + self.pan.y)
    }

    /// Sets the scale while keeping the canvas point under `focal` (a
    /// viewport point) visually fixed.
    ///
    /// The pan is recomputed as
    /// `pan' = focal - (focal - pan) * (new_scale / scale)`, which makes
    /// repeated anchored zooms compose exactly.
    pub fn zoom_at(&mut self, focal: Point, new_scale: f64) {
        let new_scale = sanitize_scale(new_scale);
        let focal = Point::new(sanitize_pan(focal.x), sanitize_pan(focal.y));
        let ratio = new_scale / self.scale;

        self.pan = Point::new(
            focal.x - (focal.x - self.pan.x) * ratio,
            focal.y - (focal.y - self.pan.y) * ratio,
        );
        self.scale = new_scale;
    }

    /// One wheel notch of zoom anchored at `focal`.
    pub fn wheel_zoom(&mut self, focal: Point, towards_viewer: bool) {
        let step = if towards_viewer { WHEEL_STEP_IN } else { WHEEL_STEP_OUT };
        self.zoom_at(focal, self.scale * step);
    }

    /// Absolute scale setter, anchored at `focal`.
    ///
    /// Callers without a pointer anchor pass the centre of the visible area,
    /// which is what the board UI does for its zoom buttons.
    pub fn set_scale(&mut self, scale: f64, focal: Point) {
        self.zoom_at(focal, scale);
    }

    /// Translates the view by viewport pixels. Pan deltas are not scaled.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan = Point::new(
            self.pan.x + sanitize_pan(dx),
            self.pan.y + sanitize_pan(dy),
        );
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan = Point::new(sanitize_pan(x), sanitize_pan(y));
    }

    /// Resets the scale to `1`. The pan is deliberately left untouched;
    /// "reset zoom" and "reset pan" are distinct user actions.
    pub fn reset(&mut self) {
        self.scale = 1.0;
    }
}

fn sanitize_scale(scale: f64) -> f64 {
    if !scale.is_finite() || scale <= 0.0 {
        return 1.0;
    }
    scale.max(MIN_SCALE).min(MAX_SCALE)
}

fn sanitize_pan(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Viewport, MAX_SCALE, MIN_SCALE};
    use crate::geometry::Point;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "expected {a:?} ~= {b:?}"
        );
    }

    #[test]
    fn identity_round_trip() {
        let viewport = Viewport::new();
        let p = Point::new(12.5, -42.0);
        assert_close(viewport.to_canvas(viewport.to_viewport(p)), p);
    }

    #[rstest]
    #[case(0.5, 10.0, -20.0)]
    #[case(1.0, 0.0, 0.0)]
    #[case(1.7, -300.25, 114.0)]
    #[case(2.0, 55.0, 55.0)]
    fn round_trip_under_arbitrary_transform(
        #[case] scale: f64,
        #[case] pan_x: f64,
        #[case] pan_y: f64,
    ) {
        let viewport = Viewport::from_parts(scale, pan_x, pan_y);
        let p = Point::new(321.5, -87.25);
        assert_close(viewport.to_canvas(viewport.to_viewport(p)), p);
        assert_close(viewport.to_viewport(viewport.to_canvas(p)), p);
    }

    #[rstest]
    #[case(1.0, 0.0, 0.0, 0.5)]
    #[case(1.0, 0.0, 0.0, 2.0)]
    #[case(0.4, 120.0, -60.0, 1.3)]
    #[case(1.8, -10.0, 33.0, 0.3)]
    fn zoom_keeps_focal_canvas_point_fixed(
        #[case] scale: f64,
        #[case] pan_x: f64,
        #[case] pan_y: f64,
        #[case] target: f64,
    ) {
        let mut viewport = Viewport::from_parts(scale, pan_x, pan_y);
        let focal = Point::new(240.0, 180.0);
        let before = viewport.to_canvas(focal);

        viewport.zoom_at(focal, target);

        assert_close(viewport.to_canvas(focal), before);
    }

    #[test]
    fn zoom_scenario_from_identity() {
        let mut viewport = Viewport::new();
        viewport.zoom_at(Point::new(100.0, 100.0), 2.0);
        assert_eq!(viewport.scale(), 2.0);
        assert_close(viewport.pan(), Point::new(-100.0, -100.0));
    }

    #[test]
    fn repeated_anchored_zooms_compose() {
        let mut stepped = Viewport::new();
        let focal = Point::new(64.0, 48.0);
        stepped.zoom_at(focal, 1.5);
        stepped.zoom_at(focal, 2.0);

        let mut direct = Viewport::new();
        direct.zoom_at(focal, 2.0);

        assert!((stepped.scale() - direct.scale()).abs() < EPSILON);
        assert_close(stepped.pan(), direct.pan());
    }

    #[test]
    fn scale_clamps_at_both_bounds() {
        let mut viewport = Viewport::new();
        viewport.zoom_at(Point::default(), 10.0);
        assert_eq!(viewport.scale(), MAX_SCALE);
        viewport.zoom_at(Point::default(), 0.01);
        assert_eq!(viewport.scale(), MIN_SCALE);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(0.0)]
    #[case(-1.5)]
    #[case(f64::INFINITY)]
    fn malformed_scale_falls_back_to_identity(#[case] bad: f64) {
        let mut viewport = Viewport::from_parts(1.5, 10.0, 10.0);
        viewport.zoom_at(Point::new(5.0, 5.0), bad);
        assert_eq!(viewport.scale(), 1.0);
    }

    #[test]
    fn malformed_pan_falls_back_to_zero() {
        let viewport = Viewport::from_parts(1.0, f64::NAN, f64::NEG_INFINITY);
        assert_eq!(viewport.pan(), Point::new(0.0, 0.0));

        let mut viewport = Viewport::new();
        viewport.set_pan(f64::INFINITY, 7.0);
        assert_eq!(viewport.pan(), Point::new(0.0, 7.0));
    }

    #[test]
    fn pan_by_accumulates_in_viewport_pixels() {
        let mut viewport = Viewport::from_parts(0.5, 10.0, 10.0);
        viewport.pan_by(5.0, -3.0);
        // Deltas are not divided by the scale.
        assert_close(viewport.pan(), Point::new(15.0, 7.0));
    }

    #[test]
    fn reset_restores_scale_but_preserves_pan() {
        let mut viewport = Viewport::from_parts(1.8, 40.0, -25.0);
        viewport.reset();
        assert_eq!(viewport.scale(), 1.0);
        assert_close(viewport.pan(), Point::new(40.0, -25.0));
    }

    #[test]
    fn wheel_zoom_steps_through_the_anchor_formula() {
        let mut wheel = Viewport::new();
        let focal = Point::new(80.0, 60.0);
        wheel.wheel_zoom(focal, true);

        let mut direct = Viewport::new();
        direct.zoom_at(focal, 1.1);

        assert_eq!(wheel, direct);

        wheel.wheel_zoom(focal, false);
        assert!((wheel.scale() - 1.1 * 0.9).abs() < EPSILON);
    }
}
