//! The compact token value.

use parlance_source::Location;
use parlance_symbol::{Symbol, SymbolTable};

use crate::TokenKind;

/// A lexeme: what it is, where it starts, and its interned text.
///
/// Tokens are compact `Copy` values; the text lives in the client's
/// [`SymbolTable`] and the position resolves against a source map only when
/// a diagnostic needs it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Location,
    pub symbol: Symbol,
}

impl Token {
    #[must_use]
    #[inline]
    pub fn new(kind: TokenKind, location: Location, symbol: Symbol) -> Self {
        Token {
            kind,
            location,
            symbol,
        }
    }

    /// Creates an identifier token.
    #[must_use]
    #[inline]
    pub fn identifier(location: Location, symbol: Symbol) -> Self {
        Token::new(TokenKind::IDENTIFIER, location, symbol)
    }

    /// Creates an integer token of one of the integer value classes.
    #[must_use]
    #[inline]
    pub fn integer(kind: TokenKind, location: Location, symbol: Symbol) -> Self {
        debug_assert!(kind.is_integer(), "kind {} is not an integer class", kind.raw());
        Token::new(kind, location, symbol)
    }

    /// Creates the error token. Streams yield it past the end of input.
    #[must_use]
    #[inline]
    pub fn error(location: Location) -> Self {
        Token::new(TokenKind::ERROR, location, Symbol::EMPTY)
    }

    /// `true` unless this is the error token.
    #[must_use]
    #[inline]
    pub fn is_valid(self) -> bool {
        !self.kind.is_error()
    }

    /// `true` for the error token.
    #[must_use]
    #[inline]
    pub fn is_error(self) -> bool {
        self.kind.is_error()
    }

    /// The token's text, resolved from `symbols`.
    ///
    /// # Panics
    ///
    /// Panics if the symbol was interned in a different table.
    #[must_use]
    pub fn text(self, symbols: &SymbolTable) -> &'static str {
        symbols.resolve(self.symbol)
    }
}

// Token is bulk-allocated in TokenList, keep it compact.
// Location (8) + Symbol (4) + TokenKind (2) + padding = 16 bytes.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    parlance_source::static_assert_size!(Token, 16);
    parlance_source::static_assert_size!(TokenKind, 2);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_constructors() {
        let symbols = SymbolTable::new();
        let sym = symbols.intern("count");
        let tok = Token::identifier(Location::NONE, sym);
        assert_eq!(tok.kind, TokenKind::IDENTIFIER);
        assert!(tok.is_valid());
        assert_eq!(tok.text(&symbols), "count");
    }

    #[test]
    fn test_error_token() {
        let tok = Token::error(Location::NONE);
        assert!(tok.is_error());
        assert!(!tok.is_valid());
        assert_eq!(tok.symbol, Symbol::EMPTY);
    }

    #[test]
    fn test_integer_token() {
        let symbols = SymbolTable::new();
        let sym = symbols.intern("0x1f");
        let tok = Token::integer(TokenKind::HEXADECIMAL_INTEGER, Location::NONE, sym);
        assert!(tok.kind.is_integer());
        assert_eq!(tok.text(&symbols), "0x1f");
    }
}
