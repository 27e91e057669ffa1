//! Registry of source files.
//!
//! A `SourceMap` owns every piece of source text a pipeline works on, both
//! real files and anonymous buffers (REPL lines, test snippets). Files are
//! handed out as `Arc<SourceFile>` so lexers can keep the text alive while
//! the map continues to grow behind a shared handle.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::line_table::LineTable;
use crate::{FileId, Location, ResolvedLocation, Span};

/// One registered piece of source text, immutable after registration.
pub struct SourceFile {
    id: FileId,
    path: Option<Arc<str>>,
    text: String,
    lines: LineTable,
}

impl SourceFile {
    /// The id this file was registered under.
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// The path label, if the file was registered with one.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The full source text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Make a location pointing at `offset` within this file.
    #[inline]
    pub fn location(&self, offset: u32) -> Location {
        Location::new(self.id, offset)
    }

    /// Location just past the last byte (end of input).
    pub fn end_location(&self) -> Location {
        Location::new(self.id, self.text.len() as u32)
    }

    /// The text covered by `span`.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or splits a character, which
    /// means the span was not produced by scanning this file.
    pub fn span_text(&self, span: Span) -> &str {
        &self.text[span.to_range()]
    }

    /// 1-based (line, column) for a byte offset. Columns count characters.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        self.lines.line_col(&self.text, offset)
    }

    /// Number of lines in the file.
    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    /// Bind an offset to printable coordinates.
    pub fn resolve(&self, offset: u32) -> ResolvedLocation {
        let (line, column) = self.line_col(offset);
        ResolvedLocation::new(self.path.clone(), line, column)
    }
}

/// Registry of source files.
///
/// Insertion goes through `&self` so the map can sit behind a shared handle
/// ([`SharedSourceMap`]) while a pipeline keeps adding inputs.
#[derive(Default)]
pub struct SourceMap {
    files: RwLock<Vec<Arc<SourceFile>>>,
}

impl SourceMap {
    pub fn new() -> Self {
        SourceMap::default()
    }

    /// Register a file-backed source.
    pub fn insert(&self, path: impl Into<Arc<str>>, text: impl Into<String>) -> Arc<SourceFile> {
        self.insert_file(Some(path.into()), text.into())
    }

    /// Register an anonymous buffer (REPL line, test snippet).
    ///
    /// Locations in anonymous buffers render as `line:col` without a path.
    pub fn insert_anonymous(&self, text: impl Into<String>) -> Arc<SourceFile> {
        self.insert_file(None, text.into())
    }

    fn insert_file(&self, path: Option<Arc<str>>, text: String) -> Arc<SourceFile> {
        assert!(
            u32::try_from(text.len()).is_ok(),
            "source text exceeds u32::MAX bytes"
        );
        let lines = LineTable::build(&text);
        let mut files = self.files.write();
        let id = FileId::new(files.len() as u32);
        debug!(
            id = id.index(),
            path = path.as_deref().unwrap_or("<anonymous>"),
            bytes = text.len(),
            "registered source"
        );
        let file = Arc::new(SourceFile {
            id,
            path,
            text,
            lines,
        });
        files.push(Arc::clone(&file));
        file
    }

    /// Look up a registered file.
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.read().get(id.index()).cloned()
    }

    /// Bind a location to printable coordinates.
    ///
    /// The unknown location and locations into unregistered files resolve
    /// to [`ResolvedLocation::unknown`]; resolution never fails.
    pub fn resolve(&self, loc: Location) -> ResolvedLocation {
        if loc.is_none() {
            return ResolvedLocation::unknown();
        }
        match self.get(loc.file()) {
            Some(file) => file.resolve(loc.offset()),
            None => ResolvedLocation::unknown(),
        }
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared handle to a [`SourceMap`].
///
/// Cloning is cheap; all clones see the same registry. The diagnostic
/// engine holds one of these so it can resolve raw locations at report
/// time.
#[derive(Clone, Default)]
pub struct SharedSourceMap(Arc<SourceMap>);

impl SharedSourceMap {
    pub fn new() -> Self {
        SharedSourceMap(Arc::new(SourceMap::new()))
    }
}

impl std::ops::Deref for SharedSourceMap {
    type Target = SourceMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
