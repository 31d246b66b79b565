// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! Per-frame render feed.
//!
//! The engine does not draw; it hands the host renderer an ordered list of
//! connector segments to paint. Nodes are typically rendered inside an
//! already-transformed container while these segments can be drawn in the
//! same canvas space, or mapped through the viewport for renderers that draw
//! lines in screen space. Both layers just have to agree on one coordinate
//! space.

pub mod connectors;

pub use connectors::{connector_segments, ConnectorSegment};
