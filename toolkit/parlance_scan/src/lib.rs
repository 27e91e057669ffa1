//! Character-level scanning for hand-written lexers.
//!
//! A [`Cursor`] walks a source text with the same five-operation interface
//! a token stream offers over tokens (`eof`, `peek`, `peek_n`, `get`,
//! `location`), so lexers and parsers read alike. On top of the core
//! interface the cursor carries the scanning moves every lexer repeats:
//! skipping whitespace, eating identifiers and integers, and jumping to
//! the end of the line.
//!
//! Byte offsets come back as [`Span`](parlance_source::Span)s into the
//! scanned text; the cursor never interns or reports, leaving symbol and
//! diagnostic choices to the client.

pub mod classify;
mod cursor;

pub use cursor::{Cursor, ScanError};
