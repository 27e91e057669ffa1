//! Source text management for the parlance toolkit.
//!
//! This crate is the location service every other parlance crate builds on:
//! - `SourceMap` registers source files (named or anonymous) and hands out
//!   shared `SourceFile` handles
//! - `Location` is a compact 8-byte reference into a registered file
//! - `ResolvedLocation` is a location bound to human-readable coordinates
//!   (path, 1-based line, 1-based column), which is what diagnostics store
//!   and print
//! - `Span` is a half-open byte range within one file
//!
//! Resolution is split in two: tokens and cursors carry cheap `Location`
//! values, and only the diagnostic path pays for line/column lookup, at
//! report time.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod line_table;
mod location;
mod source_map;
mod span;

pub use location::{FileId, Location, ResolvedLocation};
pub use source_map::{SharedSourceMap, SourceFile, SourceMap};
pub use span::Span;
