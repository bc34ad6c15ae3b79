//! Completion-prefix context at a cursor.
//!
//! The word before the cursor is split into a dotted qualifier made of
//! capitalized segments and the fragment being typed, e.g.
//! `Data.Maybe.from` gives qualifier `Data.Maybe` and fragment `from`.

use crate::document::VirtualFile;
use crate::domain::Position;
use crate::text::line_text;
use serde::Serialize;

/// What a completion provider needs to know about the cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixContext {
    /// Whole line the cursor is on, without its terminator
    pub full_line: String,
    /// Dotted module-like path before the fragment, possibly empty
    pub qualifier: String,
    /// Unqualified text immediately before the cursor
    pub fragment: String,
    pub cursor: Position,
}

impl PrefixContext {
    /// Context with no text, used when the cursor line has nothing to offer.
    pub fn empty(cursor: Position) -> Self {
        Self {
            full_line: String::new(),
            qualifier: String::new(),
            fragment: String::new(),
            cursor,
        }
    }
}

/// Extract the prefix context for `cursor` in `file`.
///
/// Never fails: an out-of-range or empty line, or a prefix that ends in
/// whitespace other than a space, yields [`PrefixContext::empty`].
pub fn extract_prefix(file: &VirtualFile, cursor: Position) -> PrefixContext {
    let Some(line) = line_text(file.text(), cursor.line as usize) else {
        return PrefixContext::empty(cursor);
    };
    if line.is_empty() {
        return PrefixContext::empty(cursor);
    }

    let before = utf16_prefix(&line, cursor.character as usize);
    // "abc |" has no current word
    let word = if before.is_empty() || before.ends_with(' ') {
        ""
    } else {
        match before.split_whitespace().next_back() {
            Some(word) => word,
            None => return PrefixContext::empty(cursor),
        }
    };

    let tail = identifier_tail(word);
    let mut segments: Vec<&str> = tail.split('.').collect();
    let fragment = segments.pop().unwrap_or_default().to_string();

    let qualifier = segments
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .skip_while(|segment| !starts_uppercase(segment))
        .collect::<Vec<_>>()
        .join(".");

    PrefixContext {
        full_line: line,
        qualifier,
        fragment,
        cursor,
    }
}

/// Leading part of `line` spanning at most `columns` UTF-16 code units.
fn utf16_prefix(line: &str, columns: usize) -> &str {
    let mut units = 0;
    for (index, ch) in line.char_indices() {
        units += ch.len_utf16();
        if units > columns {
            return &line[..index];
        }
    }
    line
}

/// Longest suffix made of identifier characters and dots.
fn identifier_tail(word: &str) -> &str {
    let start = word
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_alphanumeric() || matches!(ch, '.' | '_' | '\''))
        .last()
        .map_or(word.len(), |(index, _)| index);
    &word[start..]
}

fn starts_uppercase(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_uppercase)
}
