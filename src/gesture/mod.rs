// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! Pointer gesture state machine.
//!
//! The board UI drives everything through three pointer events. Instead of
//! attaching and detaching per-gesture event listeners, the engine keeps an
//! explicit state — `Idle`, `Panning`, `DraggingNote`, `ResizingNote` or
//! `Linking` — and every transition returns a [`GestureEffect`] telling the
//! host what changed (redraw the view, persist a note, a new link...).
//!
//! There is no explicit cancel event: only the matching `pointer_up` disarms
//! an active gesture. The host environment serializes input, so a gesture is
//! always processed to completion before the next event arrives.

use crate::geometry::{Point, Rect};
use crate::model::{clamp_size, BoardState, NoteGeometry, NoteId};
use crate::route::{edge_point_toward, ConnectorLine};
use crate::viewport::Viewport;

/// Which resize handle of a note is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    North,
    East,
    South,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    fn pulls_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    fn pulls_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    fn pulls_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    fn pulls_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

/// What the pointer went down on, as reported by the host's hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty board surface.
    Board,
    Note(NoteId),
    ResizeHandle(NoteId, ResizeDirection),
}

/// What a transition changed, so the host knows what to redraw or persist.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEffect {
    None,
    /// The viewport transform changed; re-render everything.
    ViewChanged,
    /// A note's geometry changed mid-gesture; re-route its connectors.
    NoteChanged(NoteId),
    /// A drag or resize finished; the host should persist the board.
    NoteCommitted(NoteId),
    /// The in-progress link line to draw this frame, in canvas space.
    TempLink(ConnectorLine),
    /// A link gesture completed on a valid target.
    LinkCreated { from: NoteId, to: NoteId },
}

#[derive(Debug, Clone, PartialEq)]
enum GestureState {
    Idle,
    Panning {
        last: Point,
    },
    DraggingNote {
        note_id: NoteId,
        grab_offset: Point,
    },
    ResizingNote {
        note_id: NoteId,
        direction: ResizeDirection,
        // Scale and pan are frozen for the whole gesture so the note does
        // not jump if the host zooms mid-resize.
        frozen: Viewport,
        start_pointer: Point,
        start_rect: Rect,
    },
    Linking {
        from: NoteId,
        anchor: Point,
    },
}

/// The gesture engine for one board view.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEngine {
    state: GestureState,
    link_mode: bool,
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEngine {
    pub fn new() -> Self {
        Self { state: GestureState::Idle, link_mode: false }
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    pub fn link_mode(&self) -> bool {
        self.link_mode
    }

    /// Toggles link mode. Any in-flight linking gesture is discarded, so the
    /// temp line disappears immediately when the user leaves link mode.
    pub fn set_link_mode(&mut self, enabled: bool) {
        self.link_mode = enabled;
        if matches!(self.state, GestureState::Linking { .. }) {
            self.state = GestureState::Idle;
        }
    }

    /// Pointer pressed. `pointer` is in viewport space.
    pub fn pointer_down(
        &mut self,
        target: PointerTarget,
        pointer: Point,
        viewport: &Viewport,
        board: &BoardState,
    ) -> GestureEffect {
        match target {
            PointerTarget::Board => {
                self.state = GestureState::Panning { last: pointer };
                GestureEffect::None
            }
            PointerTarget::Note(note_id) => {
                let Some(rect) = board.bounding_box(&note_id) else {
                    self.state = GestureState::Idle;
                    return GestureEffect::None;
                };
                let canvas_pointer = viewport.to_canvas(pointer);
                if self.link_mode {
                    let anchor = edge_point_toward(rect, canvas_pointer);
                    self.state = GestureState::Linking { from: note_id, anchor };
                    GestureEffect::TempLink(ConnectorLine { a: anchor, b: canvas_pointer })
                } else {
                    let grab_offset = Point::new(
                        canvas_pointer.x - rect.x,
                        canvas_pointer.y - rect.y,
                    );
                    self.state = GestureState::DraggingNote { note_id, grab_offset };
                    GestureEffect::None
                }
            }
            PointerTarget::ResizeHandle(note_id, direction) => {
                let Some(rect) = board.bounding_box(&note_id) else {
                    self.state = GestureState::Idle;
                    return GestureEffect::None;
                };
                self.state = GestureState::ResizingNote {
                    note_id,
                    direction,
                    frozen: *viewport,
                    start_pointer: viewport.to_canvas(pointer),
                    start_rect: rect,
                };
                GestureEffect::None
            }
        }
    }

    /// Pointer moved. `pointer` is in viewport space.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        viewport: &mut Viewport,
        board: &mut BoardState,
    ) -> GestureEffect {
        match &mut self.state {
            GestureState::Idle => GestureEffect::None,
            GestureState::Panning { last } => {
                let (dx, dy) = (pointer.x - last.x, pointer.y - last.y);
                *last = pointer;
                viewport.pan_by(dx, dy);
                GestureEffect::ViewChanged
            }
            GestureState::DraggingNote { note_id, grab_offset } => {
                let canvas_pointer = viewport.to_canvas(pointer);
                let note_id = note_id.clone();
                let moved = board.move_note(
                    &note_id,
                    canvas_pointer.x - grab_offset.x,
                    canvas_pointer.y - grab_offset.y,
                );
                if moved {
                    GestureEffect::NoteChanged(note_id)
                } else {
                    GestureEffect::None
                }
            }
            GestureState::ResizingNote { note_id, direction, frozen, start_pointer, start_rect } => {
                let canvas_pointer = frozen.to_canvas(pointer);
                let dx = canvas_pointer.x - start_pointer.x;
                let dy = canvas_pointer.y - start_pointer.y;
                let new_rect = resize_rect(*start_rect, *direction, dx, dy);
                let note_id = note_id.clone();
                if board.set_note_rect(&note_id, new_rect) {
                    GestureEffect::NoteChanged(note_id)
                } else {
                    GestureEffect::None
                }
            }
            GestureState::Linking { anchor, .. } => {
                let cursor = viewport.to_canvas(pointer);
                GestureEffect::TempLink(ConnectorLine { a: *anchor, b: cursor })
            }
        }
    }

    /// Pointer released. `over` is the note under the release point, if any,
    /// as reported by the host's hit testing.
    pub fn pointer_up(&mut self, over: Option<NoteId>, board: &mut BoardState) -> GestureEffect {
        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        match state {
            GestureState::Idle | GestureState::Panning { .. } => GestureEffect::None,
            GestureState::DraggingNote { note_id, .. }
            | GestureState::ResizingNote { note_id, .. } => GestureEffect::NoteCommitted(note_id),
            GestureState::Linking { from, .. } => match over {
                Some(target) if target != from && board.link(from.clone(), target.clone()) => {
                    GestureEffect::LinkCreated { from, to: target }
                }
                _ => GestureEffect::None,
            },
        }
    }
}

/// Applies a resize drag to the gesture's starting rect.
///
/// East/south handles grow the box in place; west/north handles keep the
/// opposite edge anchored by shifting the origin by however much the clamp
/// actually allowed.
fn resize_rect(start: Rect, direction: ResizeDirection, dx: f64, dy: f64) -> Rect {
    let mut rect = start;

    if direction.pulls_east() {
        rect.width = clamp_size(start.width + dx, start.height).0;
    }
    if direction.pulls_south() {
        rect.height = clamp_size(start.width, start.height + dy).1;
    }
    if direction.pulls_west() {
        let clamped = clamp_size(start.width - dx, start.height).0;
        rect.x = start.x + (start.width - clamped);
        rect.width = clamped;
    }
    if direction.pulls_north() {
        let clamped = clamp_size(start.width, start.height - dy).1;
        rect.y = start.y + (start.height - clamped);
        rect.height = clamped;
    }

    rect
}
