// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! CSS transform string codec.
//!
//! The browser front end keeps the live transform of the board element and
//! of every note in `style.transform` strings like
//! `translate(40px, -25px) scale(1.5)`. Hosts that render through the DOM
//! read those strings back when an event arrives; this module is the
//! parsing/serializing half of that round trip, kept out of the geometry
//! core so the math stays string-free.
//!
//! Parsing is lenient by design: a missing or malformed component falls back
//! to the identity (`scale = 1`, `pan = 0`) rather than failing, matching
//! the transform failure semantics in [`crate::viewport`].

use std::sync::OnceLock;

use regex::Regex;

use crate::geometry::Point;
use crate::viewport::Viewport;

fn scale_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"scale\(([-\d.]+)\)").expect("scale regex"))
}

fn translate_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"translate\(([-\d.]+)px,\s*([-\d.]+)px\)").expect("translate regex")
    })
}

/// Extracts scale and pan from a board transform string.
pub fn parse_board_transform(transform: &str) -> Viewport {
    let scale = scale_re()
        .captures(transform)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(1.0);
    let pan = parse_translate(transform);
    Viewport::from_parts(scale, pan.x, pan.y)
}

/// Renders a viewport as a board transform string.
pub fn board_transform_string(viewport: &Viewport) -> String {
    let pan = viewport.pan();
    format!(
        "translate({}px, {}px) scale({})",
        pan.x,
        pan.y,
        viewport.scale()
    )
}

/// Extracts the translation from a note transform string, defaulting each
/// missing component to `0`.
pub fn parse_translate(transform: &str) -> Point {
    translate_re()
        .captures(transform)
        .and_then(|caps| {
            let x = caps[1].parse::<f64>().ok()?;
            let y = caps[2].parse::<f64>().ok()?;
            Some(Point::new(x, y))
        })
        .unwrap_or_default()
}

/// Renders a note position as a transform string.
pub fn translate_string(position: Point) -> String {
    format!("translate({}px, {}px)", position.x, position.y)
}
