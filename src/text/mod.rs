//! Text manipulation over ropes.
//!
//! This module provides utilities for working with document content:
//! - Position mapping between LSP (UTF-16) coordinates and rope indices
//! - Sequential application of incremental edits

pub mod edits;
pub mod position;

pub use edits::{apply_change, apply_changes, splice};
pub use position::{
    char_to_position, line_content_len_utf16, line_text, position_to_char,
    position_to_utf16_offset,
};
