// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

use crate::geometry::Rect;

use super::ids::NoteId;

/// Default note size, also the lower clamp for externally supplied sizes.
pub const DEFAULT_NOTE_WIDTH: f64 = 250.0;
pub const DEFAULT_NOTE_HEIGHT: f64 = 140.0;

/// Bounds an explicit user resize is clamped to.
pub const MIN_NOTE_WIDTH: f64 = 250.0;
pub const MIN_NOTE_HEIGHT: f64 = 140.0;
pub const MAX_NOTE_WIDTH: f64 = 800.0;
pub const MAX_NOTE_HEIGHT: f64 = 600.0;

/// What a note carries: free text, or a snapshot of a catalogued reference
/// card (spell, monster, item...).
#[derive(Debug, Clone, PartialEq)]
pub enum NoteKind {
    Custom {
        title: String,
        body: String,
    },
    /// A reference card. `snapshot` is the full item record as it looked
    /// when the card was pinned, kept opaque so the board stays renderable
    /// when the catalogue changes underneath it.
    Card {
        item_id: String,
        item_type: String,
        snapshot: Option<serde_json::Value>,
    },
}

/// One board item: a positioned, sized note.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    kind: NoteKind,
    rect: Rect,
}

impl Note {
    /// Builds a note, sanitizing the supplied geometry (see
    /// [`sanitize_rect`]).
    pub fn new(id: NoteId, kind: NoteKind, rect: Rect) -> Self {
        Self { id, kind, rect: sanitize_rect(rect) }
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn kind(&self) -> &NoteKind {
        &self.kind
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = sanitize_rect(rect);
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.rect = sanitize_rect(Rect::new(x, y, self.rect.width, self.rect.height));
    }
}

/// Sanitizes externally supplied note geometry.
///
/// Non-finite coordinates fall back to `0`; missing, non-finite or
/// sub-minimum sizes fall back to the `250x140` default. This runs on every
/// ingest path (adding a note, loading a board document), never on resize,
/// which has its own clamp ([`clamp_size`]).
pub fn sanitize_rect(rect: Rect) -> Rect {
    let x = if rect.x.is_finite() { rect.x } else { 0.0 };
    let y = if rect.y.is_finite() { rect.y } else { 0.0 };
    let width = if rect.width.is_finite() && rect.width >= DEFAULT_NOTE_WIDTH {
        rect.width
    } else {
        DEFAULT_NOTE_WIDTH
    };
    let height = if rect.height.is_finite() && rect.height >= DEFAULT_NOTE_HEIGHT {
        rect.height
    } else {
        DEFAULT_NOTE_HEIGHT
    };
    Rect::new(x, y, width, height)
}

/// Clamps a user-resized note size to the supported range.
pub fn clamp_size(width: f64, height: f64) -> (f64, f64) {
    (
        width.max(MIN_NOTE_WIDTH).min(MAX_NOTE_WIDTH),
        height.max(MIN_NOTE_HEIGHT).min(MAX_NOTE_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::{clamp_size, sanitize_rect, Note, NoteKind};
    use crate::geometry::Rect;
    use crate::model::NoteId;

    #[test]
    fn sanitize_defaults_undersized_and_non_finite_geometry() {
        let rect = sanitize_rect(Rect::new(f64::NAN, 12.0, 60.0, f64::INFINITY));
        assert_eq!(rect, Rect::new(0.0, 12.0, 250.0, 140.0));
    }

    #[test]
    fn sanitize_keeps_valid_geometry() {
        let rect = Rect::new(-300.5, 42.0, 400.0, 220.0);
        assert_eq!(sanitize_rect(rect), rect);
    }

    #[test]
    fn clamp_size_enforces_the_resize_range() {
        assert_eq!(clamp_size(100.0, 100.0), (250.0, 140.0));
        assert_eq!(clamp_size(500.0, 300.0), (500.0, 300.0));
        assert_eq!(clamp_size(2000.0, 2000.0), (800.0, 600.0));
    }

    #[test]
    fn note_constructor_sanitizes() {
        let id = NoteId::new("n1").expect("id");
        let note = Note::new(
            id,
            NoteKind::Custom { title: "Plot".to_owned(), body: String::new() },
            Rect::new(10.0, 20.0, 0.0, 0.0),
        );
        assert_eq!(note.rect(), Rect::new(10.0, 20.0, 250.0, 140.0));
    }
}
