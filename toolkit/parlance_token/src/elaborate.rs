//! Turning literal tokens into values.
//!
//! Lexers store literal text verbatim; these functions convert it on
//! demand at the point of use. Errors are values, not reports: the caller
//! owns the decision to diagnose, since a malformed literal reaching
//! elaboration usually indicates a lexer bug rather than bad input.

use std::num::IntErrorKind;

use thiserror::Error;

use parlance_symbol::SymbolTable;

use crate::{Token, TokenKind};

/// Why a literal token could not be elaborated.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum ElaborateError {
    #[error("expected {expected} token but found kind {found}")]
    WrongKind { expected: &'static str, found: u16 },
    #[error("malformed {class} literal '{text}'")]
    Malformed { class: &'static str, text: String },
    #[error("integer literal '{text}' does not fit in 64 bits")]
    OutOfRange { text: String },
}

/// Elaborates a [`TokenKind::BOOLEAN`] token into its value.
pub fn as_boolean(symbols: &SymbolTable, token: Token) -> Result<bool, ElaborateError> {
    if token.kind != TokenKind::BOOLEAN {
        return Err(ElaborateError::WrongKind {
            expected: "boolean",
            found: token.kind.raw(),
        });
    }
    match token.text(symbols) {
        "true" => Ok(true),
        "false" => Ok(false),
        text => Err(ElaborateError::Malformed {
            class: "boolean",
            text: text.to_owned(),
        }),
    }
}

/// Elaborates an integer token into its value.
///
/// The radix follows the token's kind; a radix prefix (`0b`, `0o`, `0x`,
/// upper or lower) is accepted and stripped if present.
pub fn as_integer(symbols: &SymbolTable, token: Token) -> Result<i64, ElaborateError> {
    let (radix, prefix, class) = match token.kind {
        TokenKind::BINARY_INTEGER => (2, Some(("0b", "0B")), "binary integer"),
        TokenKind::DECIMAL_INTEGER => (10, None, "decimal integer"),
        TokenKind::OCTAL_INTEGER => (8, Some(("0o", "0O")), "octal integer"),
        TokenKind::HEXADECIMAL_INTEGER => (16, Some(("0x", "0X")), "hexadecimal integer"),
        other => {
            return Err(ElaborateError::WrongKind {
                expected: "integer",
                found: other.raw(),
            })
        }
    };
    let text = token.text(symbols);
    let digits = match prefix {
        Some((lower, upper)) => text
            .strip_prefix(lower)
            .or_else(|| text.strip_prefix(upper))
            .unwrap_or(text),
        None => text,
    };
    i64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ElaborateError::OutOfRange {
            text: text.to_owned(),
        },
        _ => ElaborateError::Malformed {
            class,
            text: text.to_owned(),
        },
    })
}

/// The token's text. Defined for every token, whatever its kind.
#[must_use]
pub fn as_string(symbols: &SymbolTable, token: Token) -> &'static str {
    token.text(symbols)
}
