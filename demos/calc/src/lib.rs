//! calc: a tiny arithmetic language built on the parlance toolkit.
//!
//! The pipeline is the toolkit's intended shape in miniature:
//!
//! ```text
//! text --lex--> TokenList --parse--> Expr --evaluate--> i64
//! ```
//!
//! with every stage reporting through one [`DiagnosticEngine`], tokens
//! interned in one [`SymbolTable`], and positions resolved against one
//! [`SharedSourceMap`]. A [`Session`] owns those pieces and runs the
//! pipeline over interactive lines or whole files.
//!
//! [`DiagnosticEngine`]: parlance_diagnostic::DiagnosticEngine
//! [`SymbolTable`]: parlance_symbol::SymbolTable
//! [`SharedSourceMap`]: parlance_source::SharedSourceMap

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;
mod session;
pub mod tokens;

pub use session::Session;
