//! Compact source locations and their resolved, printable form.

use std::fmt;
use std::sync::Arc;

/// Identifies a file registered in a [`crate::SourceMap`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FileId(u32);

impl FileId {
    /// Sentinel for "no file". Locations made from it are unknown.
    pub const NONE: FileId = FileId(u32::MAX);

    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        FileId(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the "no file" sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

/// A compact reference to a position in a registered source file.
///
/// Layout: 8 bytes total (file id + byte offset). Locations are cheap to
/// copy and carry no human-readable information; resolve them through the
/// owning [`crate::SourceMap`] when rendering.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    file: FileId,
    offset: u32,
}

impl Location {
    /// The unknown location. Resolves to [`ResolvedLocation::unknown`] and
    /// renders as empty text.
    pub const NONE: Location = Location {
        file: FileId::NONE,
        offset: 0,
    };

    /// Create a location from a file id and byte offset.
    #[inline]
    pub const fn new(file: FileId, offset: u32) -> Self {
        Location { file, offset }
    }

    /// The file this location points into.
    #[inline]
    pub const fn file(self) -> FileId {
        self.file
    }

    /// Byte offset from the start of the file.
    #[inline]
    pub const fn offset(self) -> u32 {
        self.offset
    }

    /// Check if this is the unknown location.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.file.is_none()
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::NONE
    }
}

/// A location bound to human-readable coordinates.
///
/// This is what diagnostics store: an optional file path plus 1-based line
/// and column numbers. Columns count characters, not bytes.
///
/// Rendering:
/// - file-backed: `path:line:col`
/// - anonymous buffer: `line:col`
/// - unknown: empty output
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ResolvedLocation {
    path: Option<Arc<str>>,
    line: u32,
    column: u32,
}

impl ResolvedLocation {
    /// Bind coordinates to an optional path label.
    pub fn new(path: Option<Arc<str>>, line: u32, column: u32) -> Self {
        ResolvedLocation { path, line, column }
    }

    /// The unknown location (renders as empty text).
    pub fn unknown() -> Self {
        ResolvedLocation::default()
    }

    /// Check if this location carries real coordinates.
    ///
    /// Line numbers are 1-based, so line 0 marks the unknown location.
    #[inline]
    pub fn is_known(&self) -> bool {
        self.line != 0
    }

    /// The path label, if the source was file-backed.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// 1-based line number (0 when unknown).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column number (0 when unknown).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_known() {
            return Ok(());
        }
        if let Some(path) = &self.path {
            write!(f, "{path}:")?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Location;
    crate::static_assert_size!(Location, 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_none() {
        let loc = Location::NONE;
        assert!(loc.is_none());
        assert!(loc.file().is_none());
        assert_eq!(Location::default(), Location::NONE);
    }

    #[test]
    fn test_location_accessors() {
        let loc = Location::new(FileId::new(3), 17);
        assert!(!loc.is_none());
        assert_eq!(loc.file(), FileId::new(3));
        assert_eq!(loc.offset(), 17);
    }

    #[test]
    fn test_resolved_display_with_path() {
        let loc = ResolvedLocation::new(Some(Arc::from("demo.calc")), 2, 5);
        assert_eq!(loc.to_string(), "demo.calc:2:5");
    }

    #[test]
    fn test_resolved_display_anonymous() {
        let loc = ResolvedLocation::new(None, 1, 9);
        assert_eq!(loc.to_string(), "1:9");
    }

    #[test]
    fn test_resolved_display_unknown() {
        let loc = ResolvedLocation::unknown();
        assert!(!loc.is_known());
        assert_eq!(loc.to_string(), "");
    }
}
