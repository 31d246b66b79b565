// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! Board document codec and file persistence.
//!
//! Serde stays confined to this module: the DTOs below mirror the wire
//! format field for field, and conversion to and from the model runs the
//! same sanitization as every other ingest path. Decoding is tolerant —
//! a damaged document degrades to an empty board rather than failing the
//! whole load, and individually invalid notes or connections are skipped
//! with a warning.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::Rect;
use crate::model::{BoardId, BoardState, Note, NoteId, NoteKind};

/// Errors from encoding or touching the filesystem. Decoding never errors.
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Serialize { source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "i/o error on {}: {source}", path.display())
            }
            Self::Serialize { source } => write!(f, "board serialization failed: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize { source } => Some(source),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct BoardDocument {
    #[serde(default)]
    notes: Vec<NoteRecord>,
    #[serde(default)]
    connections: Vec<ConnectionRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NoteRecord {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pos: Option<PosRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom: Option<CustomRecord>,
    #[serde(rename = "itemId", default, skip_serializing_if = "Option::is_none")]
    item_id: Option<String>,
    #[serde(rename = "itemType", default, skip_serializing_if = "Option::is_none")]
    item_type: Option<String>,
    #[serde(
        rename = "itemSnapshot",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    item_snapshot: Option<serde_json::Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PosRecord {
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CustomRecord {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ConnectionRecord {
    from: String,
    to: String,
    // Legacy readers key connections by this concatenated id. It is
    // emitted for them but never parsed back; `from`/`to` are the source
    // of truth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

/// The REST envelope: the board document travels JSON-encoded inside a
/// `content` field.
#[derive(Debug, Serialize, Deserialize)]
struct ContentEnvelope {
    content: serde_json::Value,
}

/// Serializes a board to its pretty-printed JSON document.
pub fn encode_board(board: &BoardState) -> Result<String, StoreError> {
    serde_json::to_string_pretty(&document_from(board))
        .map_err(|source| StoreError::Serialize { source })
}

/// Deserializes a board document, degrading instead of failing: a
/// malformed document yields an empty board, and invalid entries are
/// skipped.
pub fn decode_board(text: &str) -> BoardState {
    match serde_json::from_str::<BoardDocument>(text) {
        Ok(document) => board_from(document),
        Err(error) => {
            warn!(%error, "malformed board document, starting empty");
            BoardState::new()
        }
    }
}

/// Wraps a board for the REST body: `{"content": "<document as a JSON
/// string>"}`, the double encoding the HTTP layer expects.
pub fn encode_content_envelope(board: &BoardState) -> Result<String, StoreError> {
    let document = serde_json::to_string(&document_from(board))
        .map_err(|source| StoreError::Serialize { source })?;
    serde_json::to_string(&ContentEnvelope { content: serde_json::Value::String(document) })
        .map_err(|source| StoreError::Serialize { source })
}

/// Unwraps a REST envelope. `content` may hold the document directly or
/// as a JSON string; anything else yields an empty board.
pub fn decode_content_envelope(text: &str) -> BoardState {
    let envelope = match serde_json::from_str::<ContentEnvelope>(text) {
        Ok(envelope) => envelope,
        Err(error) => {
            warn!(%error, "malformed content envelope, starting empty");
            return BoardState::new();
        }
    };
    match envelope.content {
        serde_json::Value::String(inner) => decode_board(&inner),
        other => match serde_json::from_value::<BoardDocument>(other) {
            Ok(document) => board_from(document),
            Err(error) => {
                warn!(%error, "unexpected envelope content, starting empty");
                BoardState::new()
            }
        },
    }
}

/// Path of the document for `board_id` inside `dir`.
pub fn board_file_path(dir: &Path, board_id: &BoardId) -> PathBuf {
    dir.join(format!("{board_id}.board.json"))
}

/// Writes the board document atomically (temp file + rename) and returns
/// the final path.
pub fn save_board(dir: &Path, board_id: &BoardId, board: &BoardState) -> Result<PathBuf, StoreError> {
    let encoded = encode_board(board)?;
    let path = board_file_path(dir, board_id);
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, encoded).map_err(|source| StoreError::Io { path: tmp.clone(), source })?;
    fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path: path.clone(), source })?;
    Ok(path)
}

/// Reads a board document back. A missing file is an error; a damaged
/// one decodes to whatever [`decode_board`] salvages.
pub fn load_board(dir: &Path, board_id: &BoardId) -> Result<BoardState, StoreError> {
    let path = board_file_path(dir, board_id);
    let text =
        fs::read_to_string(&path).map_err(|source| StoreError::Io { path: path.clone(), source })?;
    Ok(decode_board(&text))
}

fn document_from(board: &BoardState) -> BoardDocument {
    let notes = board
        .notes()
        .values()
        .map(|note| {
            let rect = note.rect();
            let pos = Some(PosRecord {
                x: Some(rect.x),
                y: Some(rect.y),
                width: Some(rect.width),
                height: Some(rect.height),
            });
            match note.kind() {
                NoteKind::Custom { title, body } => NoteRecord {
                    id: note.id().to_string(),
                    kind: "custom".to_owned(),
                    pos,
                    custom: Some(CustomRecord { title: title.clone(), body: body.clone() }),
                    item_id: None,
                    item_type: None,
                    item_snapshot: None,
                },
                NoteKind::Card { item_id, item_type, snapshot } => NoteRecord {
                    id: note.id().to_string(),
                    kind: item_type.clone(),
                    pos,
                    custom: None,
                    item_id: Some(item_id.clone()),
                    item_type: Some(item_type.clone()),
                    item_snapshot: snapshot.clone(),
                },
            }
        })
        .collect();

    let connections = board
        .connections()
        .iter()
        .map(|connection| ConnectionRecord {
            from: connection.from().to_string(),
            to: connection.to().to_string(),
            id: Some(format!("{}-{}", connection.from(), connection.to())),
        })
        .collect();

    BoardDocument { notes, connections }
}

fn board_from(document: BoardDocument) -> BoardState {
    let mut board = BoardState::new();

    for record in document.notes {
        let id = match NoteId::new(&record.id) {
            Ok(id) => id,
            Err(error) => {
                warn!(raw = %record.id, %error, "skipping note with invalid id");
                continue;
            }
        };
        let kind = if record.kind == "custom" {
            let custom = record.custom.unwrap_or_default();
            NoteKind::Custom { title: custom.title, body: custom.body }
        } else {
            let Some(item_id) = record.item_id else {
                warn!(note_id = %id, "skipping card note without an item id");
                continue;
            };
            NoteKind::Card {
                item_id,
                item_type: record.item_type.unwrap_or_else(|| record.kind.clone()),
                snapshot: record.item_snapshot,
            }
        };
        let pos = record.pos.unwrap_or_default();
        // Note::new re-sanitizes; the unwraps here only fill absent fields.
        let rect = Rect::new(
            pos.x.unwrap_or(0.0),
            pos.y.unwrap_or(0.0),
            pos.width.unwrap_or(0.0),
            pos.height.unwrap_or(0.0),
        );
        board.add_note(Note::new(id, kind, rect));
    }

    for record in document.connections {
        let (from, to) = match (NoteId::new(&record.from), NoteId::new(&record.to)) {
            (Ok(from), Ok(to)) => (from, to),
            _ => {
                warn!(from = %record.from, to = %record.to, "skipping connection with invalid ids");
                continue;
            }
        };
        if !board.link(from.clone(), to.clone()) {
            warn!(from = %from, to = %to, "skipping unusable connection");
        }
    }

    board
}
