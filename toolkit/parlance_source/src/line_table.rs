//! Precomputed line-start table for line/column resolution.

/// Byte offsets of every line start in a source text.
///
/// Built once when a file is registered (one linear scan for newlines);
/// lookups are O(log L) binary searches. Line and column numbers are both
/// 1-based, and columns count characters from the line start rather than
/// bytes, so multi-byte text resolves sensibly.
#[derive(Clone, Debug, Default)]
pub(crate) struct LineTable {
    /// `starts[0] == 0`; every later entry is the byte just past a `\n`.
    starts: Vec<u32>,
}

impl LineTable {
    /// Scan `text` once and record every line start.
    pub(crate) fn build(text: &str) -> Self {
        let mut starts = vec![0u32];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                starts.push((i + 1) as u32);
            }
        }
        LineTable { starts }
    }

    /// 1-based line number containing `offset`.
    pub(crate) fn line_at(&self, offset: u32) -> u32 {
        let index = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (index as u32) + 1
    }

    /// 1-based (line, column) for `offset`.
    ///
    /// Offsets past the end of `text` resolve to the last line.
    pub(crate) fn line_col(&self, text: &str, offset: u32) -> (u32, u32) {
        let line = self.line_at(offset);
        let start = self.starts.get((line - 1) as usize).copied().unwrap_or(0) as usize;
        let offset = (offset as usize).min(text.len());

        let column = text[start..offset].chars().count() as u32 + 1;
        (line, column)
    }

    /// Number of lines (a trailing newline opens a final empty line).
    pub(crate) fn line_count(&self) -> usize {
        self.starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let text = "hello world";
        let table = LineTable::build(text);
        assert_eq!(table.line_count(), 1);
        assert_eq!(table.line_at(0), 1);
        assert_eq!(table.line_at(10), 1);
    }

    #[test]
    fn test_multiple_lines() {
        let text = "one\ntwo\nthree";
        let table = LineTable::build(text);
        assert_eq!(table.line_count(), 3);
        assert_eq!(table.line_at(0), 1);
        assert_eq!(table.line_at(3), 1); // the newline itself
        assert_eq!(table.line_at(4), 2);
        assert_eq!(table.line_at(8), 3);
    }

    #[test]
    fn test_line_col() {
        let text = "abc\ndefgh\nij";
        let table = LineTable::build(text);
        assert_eq!(table.line_col(text, 0), (1, 1));
        assert_eq!(table.line_col(text, 2), (1, 3));
        assert_eq!(table.line_col(text, 4), (2, 1));
        assert_eq!(table.line_col(text, 7), (2, 4));
        assert_eq!(table.line_col(text, 10), (3, 1));
    }

    #[test]
    fn test_line_col_multibyte() {
        // Greek letters are 2 bytes each; columns count characters.
        let text = "αβγ\nδε";
        let table = LineTable::build(text);
        assert_eq!(table.line_col(text, 0), (1, 1));
        assert_eq!(table.line_col(text, 2), (1, 2));
        assert_eq!(table.line_col(text, 4), (1, 3));
        assert_eq!(table.line_col(text, 7), (2, 1));
    }

    #[test]
    fn test_trailing_newline() {
        let text = "one\ntwo\n";
        let table = LineTable::build(text);
        assert_eq!(table.line_count(), 3);
        assert_eq!(table.line_at(8), 3);
    }

    #[test]
    fn test_offset_past_end() {
        let text = "ab";
        let table = LineTable::build(text);
        assert_eq!(table.line_col(text, 100), (1, 3));
    }

    #[test]
    fn test_empty_text() {
        let table = LineTable::build("");
        assert_eq!(table.line_count(), 1);
        assert_eq!(table.line_col("", 0), (1, 1));
    }
}
