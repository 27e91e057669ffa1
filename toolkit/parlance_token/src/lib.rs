//! Token representation for parlance front ends.
//!
//! The vocabulary is open: a [`TokenKind`] is an integer, not an enum, so
//! clients mint their own kinds without touching this crate. Kinds in the
//! common ranges (0..=55) have fixed meanings; client vocabularies start at
//! [`TokenKind::CLIENT_BASE`] and describe themselves to a [`TokenRegistry`]
//! through the [`TokenSet`] trait.
//!
//! A [`Token`] is a compact `Copy` value: kind, location, interned symbol.
//! A lexer accumulates tokens into a [`TokenList`]; parsers walk a borrowed
//! [`TokenStream`] with arbitrary lookahead. Literal tokens are turned into
//! values on demand by the [elaboration functions](as_integer).

mod elaborate;
mod kind;
mod list;
mod registry;
mod stream;
mod token;

pub use elaborate::{as_boolean, as_integer, as_string, ElaborateError};
pub use kind::TokenKind;
pub use list::TokenList;
pub use registry::{TokenRegistry, TokenSet};
pub use stream::TokenStream;
pub use token::Token;
