use crate::document::VirtualFile;
use crate::domain::Range;

/// Text of the lines covered by `range`, at line granularity.
///
/// Returns `range.end.line - range.start.line` whole lines starting at the
/// start line, terminators included. Columns are not consulted, so a range
/// within a single line yields an empty string.
pub fn read_range(file: &VirtualFile, range: Range) -> String {
    let text = file.text();
    let total = text.len_lines();

    let start = (range.start.line as usize).min(total);
    let count = range.end.line.saturating_sub(range.start.line) as usize;
    let end = start.saturating_add(count).min(total);

    text.slice(text.line_to_char(start)..text.line_to_char(end))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn range(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Range {
        Range::new(
            Position::new(start_line, start_col),
            Position::new(end_line, end_col),
        )
    }

    #[test]
    fn returns_whole_lines_ignoring_columns() {
        let file = VirtualFile::new(0, "zero\none\ntwo\nthree\n");
        assert_eq!(read_range(&file, range(1, 2, 3, 1)), "one\ntwo\n");
    }

    #[test]
    fn single_line_range_is_empty() {
        let file = VirtualFile::new(0, "zero\none\n");
        assert_eq!(read_range(&file, range(1, 0, 1, 3)), "");
    }

    #[test]
    fn range_past_end_is_clamped() {
        let file = VirtualFile::new(0, "zero\none");
        assert_eq!(read_range(&file, range(1, 0, 40, 0)), "one");
        assert_eq!(read_range(&file, range(9, 0, 12, 0)), "");
    }
}
