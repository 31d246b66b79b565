// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! Core board data model.
//!
//! A board holds notes (reference cards and free-form sticky notes) plus the
//! connections drawn between them. The geometry engine reads note bounding
//! boxes through the [`NoteGeometry`] trait; it never owns note lifecycle.

pub mod board;
pub mod connection;
pub mod ids;
pub mod note;

pub use board::{BoardState, NoteGeometry};
pub use connection::{Connection, ConnectionKey, ConnectionSet};
pub use ids::{BoardId, Id, IdError, NoteId};
pub use note::{
    clamp_size, sanitize_rect, Note, NoteKind, DEFAULT_NOTE_HEIGHT, DEFAULT_NOTE_WIDTH,
    MAX_NOTE_HEIGHT, MAX_NOTE_WIDTH, MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH,
};
