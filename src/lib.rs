// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! Geometry and interaction engine for a campaign corkboard.
//!
//! A board is a pannable, zoomable canvas of pinned notes with straight
//! connector lines between them. This crate owns everything below the
//! rendering surface:
//!
//! - [`viewport`]: the scale/pan transform between screen and canvas space,
//!   with focal-anchored zooming.
//! - [`geometry`]: points, rects and the segment intersection primitive.
//! - [`route`]: boundary-to-boundary connector routing between two notes.
//! - [`model`]: notes, the connection set and the board state they form.
//! - [`render`]: the per-frame connector feed a drawing surface consumes.
//! - [`gesture`]: the pointer state machine (pan, drag, resize, link).
//! - [`format`]: the CSS `transform` string codec used at the DOM boundary.
//! - [`store`]: the JSON document codec and file persistence.
//!
//! The host (a browser front end or a test harness) does hit testing and
//! drawing; everything that decides *where* things are happens here.

pub mod format;
pub mod geometry;
pub mod gesture;
pub mod model;
pub mod render;
pub mod route;
pub mod store;
pub mod viewport;
