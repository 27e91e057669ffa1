//! Character classification for lexical scanning.
//!
//! All predicates are ASCII-oriented and return `false` for `'\0'`, so
//! they compose with [`Cursor::eat_while`](crate::Cursor::eat_while)
//! without terminating checks.

/// Whitespace, including newlines.
#[must_use]
#[inline]
pub const fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// ASCII letters.
#[must_use]
#[inline]
pub const fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `0` through `9`.
#[must_use]
#[inline]
pub const fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `0` or `1`.
#[must_use]
#[inline]
pub const fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// `0` through `7`.
#[must_use]
#[inline]
pub const fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// `0-9`, `a-f`, `A-F`.
#[must_use]
#[inline]
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Letters and `_`.
#[must_use]
#[inline]
pub const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Letters, digits, and `_`.
#[must_use]
#[inline]
pub const fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
