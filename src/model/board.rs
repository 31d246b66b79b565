// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use tracing::debug;

use crate::geometry::Rect;

use super::connection::{Connection, ConnectionSet};
use super::ids::NoteId;
use super::note::Note;

/// Source of truth for "where is note N right now, in canvas coordinates".
///
/// Implementations must always reflect the latest committed position; there
/// is no eventual-consistency window. `None` means the note is unknown,
/// which callers treat as "skip", not as an error — deletion races between a
/// note and its connections are expected.
pub trait NoteGeometry {
    fn bounding_box(&self, id: &NoteId) -> Option<Rect>;
}

/// In-memory state of one board: its notes and their connections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    notes: BTreeMap<NoteId, Note>,
    connections: ConnectionSet,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &BTreeMap<NoteId, Note> {
        &self.notes
    }

    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn connections(&self) -> &ConnectionSet {
        &self.connections
    }

    pub fn connections_mut(&mut self) -> &mut ConnectionSet {
        &mut self.connections
    }

    /// Inserts a note, replacing (and returning) any note with the same id.
    pub fn add_note(&mut self, note: Note) -> Option<Note> {
        self.notes.insert(note.id().clone(), note)
    }

    /// Removes a note and cascades to its connections.
    ///
    /// Returns the note and the connections that were dropped with it.
    pub fn remove_note(&mut self, id: &NoteId) -> Option<(Note, Vec<Connection>)> {
        let note = self.notes.remove(id)?;
        let dropped = self.connections.remove_all_for(id);
        Some((note, dropped))
    }

    /// Moves a note to a new canvas position. Returns whether it existed.
    pub fn move_note(&mut self, id: &NoteId, x: f64, y: f64) -> bool {
        match self.notes.get_mut(id) {
            Some(note) => {
                note.set_position(x, y);
                true
            }
            None => {
                debug!(note_id = %id, "move for unknown note ignored");
                false
            }
        }
    }

    /// Replaces a note's full geometry (sanitized). Returns whether it
    /// existed.
    pub fn set_note_rect(&mut self, id: &NoteId, rect: Rect) -> bool {
        match self.notes.get_mut(id) {
            Some(note) => {
                note.set_rect(rect);
                true
            }
            None => false,
        }
    }

    /// Connects two existing notes. Unknown endpoints, self-links and
    /// already-linked pairs are ignored; returns whether a connection was
    /// created.
    pub fn link(&mut self, from: NoteId, to: NoteId) -> bool {
        if !self.notes.contains_key(&from) || !self.notes.contains_key(&to) {
            debug!(from = %from, to = %to, "link with unknown endpoint ignored");
            return false;
        }
        self.connections.add(from, to)
    }
}

impl NoteGeometry for BoardState {
    fn bounding_box(&self, id: &NoteId) -> Option<Rect> {
        self.notes.get(id).map(Note::rect)
    }
}
