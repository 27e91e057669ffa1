//! Streaming cursor over source text.

use thiserror::Error;

use parlance_source::{FileId, Location, SourceFile, Span};

use crate::classify;

/// A scanning failure the caller is expected to diagnose.
#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ScanError {
    /// A radix prefix (`0b`, `0o`, `0x`) with no digits after it.
    #[error("expected a digit after the radix prefix")]
    ExpectedDigit { location: Location },
}

/// Character cursor over a source text.
///
/// Presents the five streaming operations (`eof`, `peek`, `peek_n`, `get`,
/// `location`) plus the scanning moves shared by hand-written lexers. The
/// cursor is [`Copy`]; a saved copy is a backtracking point.
///
/// Reads are total: [`peek`](Self::peek) and [`get`](Self::get) return
/// `'\0'` at the end of input, and [`get`](Self::get) does not advance
/// there. Interior NUL characters also read as `'\0'`; [`eof`](Self::eof)
/// tells them apart.
#[derive(Copy, Clone, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    file: FileId,
    pos: u32,
}

// &str (16) + FileId (4) + u32 (4) = 24 bytes; the cursor is copied freely.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Opens a cursor at the start of `text`.
    ///
    /// `file` stamps the locations this cursor produces; use
    /// [`FileId::NONE`] for text that is not in any source map.
    #[must_use]
    pub fn new(file: FileId, text: &'a str) -> Self {
        debug_assert!(
            u32::try_from(text.len()).is_ok(),
            "source text exceeds u32::MAX bytes"
        );
        Cursor { text, file, pos: 0 }
    }

    /// Opens a cursor over a registered source file.
    #[must_use]
    pub fn over(file: &'a SourceFile) -> Self {
        Cursor::new(file.id(), file.text())
    }

    /// `true` if all input has been consumed.
    #[must_use]
    #[inline]
    pub fn eof(&self) -> bool {
        self.pos as usize >= self.text.len()
    }

    /// The current character, or `'\0'` at end of input.
    #[must_use]
    #[inline]
    pub fn peek(&self) -> char {
        self.rest().chars().next().unwrap_or('\0')
    }

    /// The character `n` positions ahead, or `'\0'` past the end.
    ///
    /// `peek_n(0)` is the current character. Positions count characters,
    /// not bytes.
    #[must_use]
    #[inline]
    pub fn peek_n(&self, n: usize) -> char {
        self.rest().chars().nth(n).unwrap_or('\0')
    }

    /// Consumes and returns the current character.
    ///
    /// At end of input, returns `'\0'` and stays put.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "UTF-8 encodings are at most 4 bytes"
    )]
    pub fn get(&mut self) -> char {
        match self.rest().chars().next() {
            Some(c) => {
                self.pos += c.len_utf8() as u32;
                c
            }
            None => '\0',
        }
    }

    /// Location of the current position.
    #[must_use]
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.file, self.pos)
    }

    /// Current byte offset from the start of the text.
    #[must_use]
    #[inline]
    pub fn offset(&self) -> u32 {
        self.pos
    }

    /// The text between two byte offsets.
    ///
    /// # Panics
    ///
    /// Panics if the offsets are out of bounds or split a character.
    #[must_use]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        &self.text[start as usize..end as usize]
    }

    /// The text from `start` to the current position.
    #[must_use]
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// A span from `start` to the current position.
    #[must_use]
    pub fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.pos)
    }

    /// Consumes characters while `pred` holds.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.eof() && pred(self.peek()) {
            let _ = self.get();
        }
    }

    /// Consumes whitespace, including newlines.
    #[inline]
    pub fn eat_spaces(&mut self) {
        self.eat_while(classify::is_space);
    }

    /// Consumes an identifier (`[A-Za-z_][A-Za-z0-9_]*`), if one starts
    /// here. Returns its span.
    pub fn eat_identifier(&mut self) -> Option<Span> {
        if !classify::is_identifier_start(self.peek()) {
            return None;
        }
        let start = self.pos;
        let _ = self.get();
        self.eat_while(classify::is_identifier_continue);
        Some(self.span_from(start))
    }

    /// Consumes a run of decimal digits, if one starts here. Returns its
    /// span.
    pub fn eat_decimal_integer(&mut self) -> Option<Span> {
        if !classify::is_decimal_digit(self.peek()) {
            return None;
        }
        let start = self.pos;
        self.eat_while(classify::is_decimal_digit);
        Some(self.span_from(start))
    }

    /// Consumes a radix-prefixed integer: the two prefix characters the
    /// caller has already sighted (`0b`, `0o`, `0x`), then one or more
    /// digits matching `digit`.
    ///
    /// The returned span includes the prefix. Errs without consuming
    /// digits if none follow the prefix; the cursor is left after the
    /// prefix so the caller can point a diagnostic at the offending
    /// character.
    pub fn eat_prefixed_integer(
        &mut self,
        digit: impl Fn(char) -> bool,
    ) -> Result<Span, ScanError> {
        debug_assert!(self.peek() == '0', "cursor is not at a radix prefix");
        let start = self.pos;
        let _ = self.get();
        let _ = self.get();
        if !digit(self.peek()) {
            return Err(ScanError::ExpectedDigit {
                location: self.location(),
            });
        }
        self.eat_while(digit);
        Ok(self.span_from(start))
    }

    /// Advances to the next newline, or to the end of input. The newline
    /// itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by text length, which fits in u32"
    )]
    pub fn eat_line(&mut self) {
        let rest = &self.text.as_bytes()[self.pos as usize..];
        match memchr::memchr(b'\n', rest) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.text.len() as u32,
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.text[self.pos as usize..]
    }
}
