// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

use crate::model::{ConnectionSet, NoteGeometry, NoteId};
use crate::route::{route, ConnectorLine};
use crate::viewport::Viewport;

/// One drawable connector: the pair it belongs to plus the routed line in
/// canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorSegment {
    pub from: NoteId,
    pub to: NoteId,
    pub line: ConnectorLine,
}

impl ConnectorSegment {
    /// The same segment mapped into viewport space.
    pub fn in_viewport(&self, viewport: &Viewport) -> ConnectorLine {
        ConnectorLine {
            a: viewport.to_viewport(self.line.a),
            b: viewport.to_viewport(self.line.b),
        }
    }
}

/// Routes every connection, in insertion order.
///
/// A connection whose endpoint has no geometry (the note is mid-deletion or
/// otherwise unknown) is silently skipped for this frame; the connection
/// itself persists and reappears if the note does.
pub fn connector_segments(
    connections: &ConnectionSet,
    geometry: &impl NoteGeometry,
) -> Vec<ConnectorSegment> {
    connections
        .iter()
        .filter_map(|connection| {
            let from_rect = geometry.bounding_box(connection.from())?;
            let to_rect = geometry.bounding_box(connection.to())?;
            Some(ConnectorSegment {
                from: connection.from().clone(),
                to: connection.to().clone(),
                line: route(from_rect, to_rect),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::connector_segments;
    use crate::geometry::Rect;
    use crate::model::{BoardState, Note, NoteId, NoteKind};
    use crate::viewport::Viewport;

    fn id(value: &str) -> NoteId {
        NoteId::new(value).expect("note id")
    }

    fn note(note_id: &str, x: f64, y: f64) -> Note {
        Note::new(
            id(note_id),
            NoteKind::Custom { title: note_id.to_owned(), body: String::new() },
            Rect::new(x, y, 250.0, 140.0),
        )
    }

    #[test]
    fn segments_follow_connection_insertion_order() {
        let mut board = BoardState::new();
        board.add_note(note("a", 0.0, 0.0));
        board.add_note(note("b", 500.0, 0.0));
        board.add_note(note("c", 0.0, 500.0));
        board.link(id("b"), id("c"));
        board.link(id("a"), id("b"));

        let segments = connector_segments(board.connections(), &board);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].from, id("b"));
        assert_eq!(segments[0].to, id("c"));
        assert_eq!(segments[1].from, id("a"));
        assert_eq!(segments[1].to, id("b"));
    }

    #[test]
    fn missing_geometry_skips_the_segment_but_keeps_the_connection() {
        let mut board = BoardState::new();
        board.add_note(note("a", 0.0, 0.0));
        board.add_note(note("b", 500.0, 0.0));
        board.link(id("a"), id("b"));

        // Remove through the notes map directly to simulate the host
        // deleting the DOM node before the connection cleanup runs.
        let connections = board.connections().clone();
        let mut orphaned = BoardState::new();
        orphaned.add_note(note("a", 0.0, 0.0));

        let segments = connector_segments(&connections, &orphaned);
        assert!(segments.is_empty());
        assert_eq!(connections.len(), 1);
    }

    #[test]
    fn routed_endpoints_sit_between_the_notes() {
        let mut board = BoardState::new();
        board.add_note(note("a", 0.0, 0.0));
        board.add_note(note("b", 500.0, 0.0));
        board.link(id("a"), id("b"));

        let segments = connector_segments(board.connections(), &board);
        let line = segments[0].line;

        assert!((line.a.x - 250.0).abs() < 1e-6);
        assert!((line.a.y - 70.0).abs() < 1e-6);
        assert!((line.b.x - 500.0).abs() < 1e-6);
        assert!((line.b.y - 70.0).abs() < 1e-6);
    }

    #[test]
    fn in_viewport_applies_the_current_transform() {
        let mut board = BoardState::new();
        board.add_note(note("a", 0.0, 0.0));
        board.add_note(note("b", 500.0, 0.0));
        board.link(id("a"), id("b"));

        let segments = connector_segments(board.connections(), &board);
        let viewport = Viewport::from_parts(2.0, 10.0, -5.0);
        let mapped = segments[0].in_viewport(&viewport);

        assert!((mapped.a.x - (250.0 * 2.0 + 10.0)).abs() < 1e-6);
        assert!((mapped.a.y - (70.0 * 2.0 - 5.0)).abs() < 1e-6);
    }
}
