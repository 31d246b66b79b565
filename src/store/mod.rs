// SPDX-FileCopyrightText: 2026 The corkboard authors
// SPDX-License-Identifier: MIT

//! Board document persistence.
//!
//! One board serializes to one JSON document `{notes, connections}`. The
//! same codec backs both the REST wire format (where the document travels
//! JSON-encoded inside a `content` field) and plain file storage.

pub mod board_file;

pub use board_file::{
    board_file_path, decode_board, decode_content_envelope, encode_board, encode_content_envelope,
    load_board, save_board, StoreError,
};
