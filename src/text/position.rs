use crate::domain::Position;
use ropey::{Rope, RopeSlice};

/// Absolute UTF-16 code-unit offset of `position` in `text`.
///
/// A character past the end of its line clamps to the line end; a line past
/// the end of the document clamps to the document end.
pub fn position_to_utf16_offset(text: &Rope, position: Position) -> usize {
    let line = position.line as usize;
    if line >= text.len_lines() {
        return text.len_utf16_cu();
    }

    let line_start = text.char_to_utf16_cu(text.line_to_char(line));
    let column = (position.character as usize).min(line_content_len_utf16(text.line(line)));
    line_start + column
}

/// Char index of `position` in `text`, with the same clamping as
/// [`position_to_utf16_offset`].
pub fn position_to_char(text: &Rope, position: Position) -> usize {
    text.utf16_cu_to_char(position_to_utf16_offset(text, position))
}

/// LSP position of the char at `char_idx`. Indices past the end map to the
/// end of the document.
pub fn char_to_position(text: &Rope, char_idx: usize) -> Position {
    let char_idx = char_idx.min(text.len_chars());
    let line = text.char_to_line(char_idx);
    let line_start = text.char_to_utf16_cu(text.line_to_char(line));
    let column = text.char_to_utf16_cu(char_idx) - line_start;
    Position::new(line as u32, column as u32)
}

/// UTF-16 length of a line, not counting its terminator.
pub fn line_content_len_utf16(line: RopeSlice<'_>) -> usize {
    // Line terminators are all single code units
    line.len_utf16_cu() - terminator_len(line)
}

/// Content of line `line` without its terminator, or None past the end.
pub fn line_text(text: &Rope, line: usize) -> Option<String> {
    if line >= text.len_lines() {
        return None;
    }
    let slice = text.line(line);
    let content = slice.slice(..slice.len_chars() - terminator_len(slice));
    Some(content.to_string())
}

fn terminator_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    match line.char(len - 1) {
        '\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
        '\n' | '\r' => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_counts_previous_lines() {
        let text = Rope::from_str("ab\ncd\n");
        assert_eq!(position_to_utf16_offset(&text, Position::new(1, 1)), 4);
        assert_eq!(position_to_utf16_offset(&text, Position::new(2, 0)), 6);
    }

    #[test]
    fn offset_counts_surrogate_pairs_as_two_units() {
        // 😀 is outside the BMP: 2 UTF-16 code units, 1 char
        let text = Rope::from_str("a😀b");
        assert_eq!(position_to_utf16_offset(&text, Position::new(0, 3)), 3);
        assert_eq!(position_to_char(&text, Position::new(0, 3)), 2);
    }

    #[test]
    fn column_past_line_end_clamps_to_line_end() {
        let text = Rope::from_str("ab\ncd");
        assert_eq!(position_to_utf16_offset(&text, Position::new(0, 99)), 2);
    }

    #[test]
    fn column_clamp_excludes_crlf() {
        let text = Rope::from_str("ab\r\ncd");
        assert_eq!(position_to_utf16_offset(&text, Position::new(0, 99)), 2);
        assert_eq!(position_to_utf16_offset(&text, Position::new(1, 0)), 4);
    }

    #[test]
    fn line_past_end_clamps_to_document_end() {
        let text = Rope::from_str("ab\ncd");
        assert_eq!(position_to_utf16_offset(&text, Position::new(7, 0)), 5);
    }

    #[test]
    fn char_to_position_reports_utf16_columns() {
        let text = Rope::from_str("x\n😀y");
        // chars: x \n 😀 y
        assert_eq!(char_to_position(&text, 3), Position::new(1, 2));
        assert_eq!(char_to_position(&text, 100), Position::new(1, 3));
    }

    #[test]
    fn line_text_strips_terminators() {
        let text = Rope::from_str("one\r\ntwo\nthree");
        assert_eq!(line_text(&text, 0).as_deref(), Some("one"));
        assert_eq!(line_text(&text, 1).as_deref(), Some("two"));
        assert_eq!(line_text(&text, 2).as_deref(), Some("three"));
        assert_eq!(line_text(&text, 3), None);
    }

    #[test]
    fn only_cr_and_lf_break_lines() {
        let text = Rope::from_str("a\u{000C}b\u{2028}c\rd\ne");
        assert_eq!(text.len_lines(), 3);
        assert_eq!(line_text(&text, 0).as_deref(), Some("a\u{000C}b\u{2028}c"));
        assert_eq!(line_text(&text, 1).as_deref(), Some("d"));
        // a FF b LS c CR
        assert_eq!(position_to_utf16_offset(&text, Position::new(1, 0)), 6);
    }
}
