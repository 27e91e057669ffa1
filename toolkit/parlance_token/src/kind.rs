//! Open integer token vocabulary with fixed common ranges.

/// Identifies what a token is: `(`, `->`, an identifier, a client keyword.
///
/// Kinds are plain integers rather than an enum so the vocabulary stays
/// open: clients mint their own kinds without touching this crate. The
/// numbering is arranged in fixed ranges:
///
/// | Range | Category           |
/// |-------|--------------------|
/// | 0     | Error sentinel     |
/// | 1-23  | Single-character punctuation and operators |
/// | 24-34 | Multi-character operators |
/// | 35-49 | Reserved (future common punctuation) |
/// | 50-55 | Value classes      |
/// | 56+   | Client vocabularies |
///
/// Kinds in the common ranges carry built-in names and spellings
/// ([`common_name`](TokenKind::common_name),
/// [`common_spelling`](TokenKind::common_spelling)); client kinds describe
/// themselves through a [`TokenSet`](crate::TokenSet) installed in a
/// [`TokenRegistry`](crate::TokenRegistry).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TokenKind(u16);

impl TokenKind {
    // === Error sentinel (0) ===
    pub const ERROR: TokenKind = TokenKind(0);

    // === Single-character punctuation and operators (1-23) ===
    pub const LPAREN: TokenKind = TokenKind(1); // (
    pub const RPAREN: TokenKind = TokenKind(2); // )
    pub const LBRACE: TokenKind = TokenKind(3); // {
    pub const RBRACE: TokenKind = TokenKind(4); // }
    pub const LBRACKET: TokenKind = TokenKind(5); // [
    pub const RBRACKET: TokenKind = TokenKind(6); // ]
    pub const DOT: TokenKind = TokenKind(7); // .
    pub const COMMA: TokenKind = TokenKind(8); // ,
    pub const SEMICOLON: TokenKind = TokenKind(9); // ;
    pub const COLON: TokenKind = TokenKind(10); // :
    pub const EQUAL: TokenKind = TokenKind(11); // =
    pub const PLUS: TokenKind = TokenKind(12); // +
    pub const MINUS: TokenKind = TokenKind(13); // -
    pub const STAR: TokenKind = TokenKind(14); // *
    pub const SLASH: TokenKind = TokenKind(15); // /
    pub const PERCENT: TokenKind = TokenKind(16); // %
    pub const AMP: TokenKind = TokenKind(17); // &
    pub const BAR: TokenKind = TokenKind(18); // |
    pub const CARET: TokenKind = TokenKind(19); // ^
    pub const TILDE: TokenKind = TokenKind(20); // ~
    pub const BANG: TokenKind = TokenKind(21); // !
    pub const LT: TokenKind = TokenKind(22); // <
    pub const GT: TokenKind = TokenKind(23); // >

    // === Multi-character operators (24-34) ===
    pub const ARROW: TokenKind = TokenKind(24); // ->
    pub const FAT_ARROW: TokenKind = TokenKind(25); // =>
    pub const SHL: TokenKind = TokenKind(26); // <<
    pub const SHR: TokenKind = TokenKind(27); // >>
    pub const EQ_EQ: TokenKind = TokenKind(28); // ==
    pub const BANG_EQ: TokenKind = TokenKind(29); // !=
    pub const LT_EQ: TokenKind = TokenKind(30); // <=
    pub const GT_EQ: TokenKind = TokenKind(31); // >=
    pub const AMP_AMP: TokenKind = TokenKind(32); // &&
    pub const BAR_BAR: TokenKind = TokenKind(33); // ||
    pub const DOT_DOT: TokenKind = TokenKind(34); // ..

    // 35-49: reserved for future common punctuation

    // === Value classes (50-55) ===
    pub const IDENTIFIER: TokenKind = TokenKind(50);
    pub const BOOLEAN: TokenKind = TokenKind(51);
    pub const BINARY_INTEGER: TokenKind = TokenKind(52);
    pub const DECIMAL_INTEGER: TokenKind = TokenKind(53);
    pub const OCTAL_INTEGER: TokenKind = TokenKind(54);
    pub const HEXADECIMAL_INTEGER: TokenKind = TokenKind(55);

    /// First kind available to client vocabularies.
    pub const CLIENT_BASE: TokenKind = TokenKind(56);

    /// Wraps a raw kind number.
    #[must_use]
    #[inline]
    pub const fn new(raw: u16) -> Self {
        TokenKind(raw)
    }

    /// The raw kind number.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// `true` for the error sentinel.
    #[must_use]
    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 == 0
    }

    /// `true` for kinds in the common ranges (0..=55).
    #[must_use]
    #[inline]
    pub const fn is_common(self) -> bool {
        self.0 <= 55
    }

    /// `true` for the punctuation and operator range (1..=49), including
    /// the reserved gap.
    #[must_use]
    #[inline]
    pub const fn is_punctuation(self) -> bool {
        matches!(self.0, 1..=49)
    }

    /// `true` for the value-class range (50..=55).
    #[must_use]
    #[inline]
    pub const fn is_value_class(self) -> bool {
        matches!(self.0, 50..=55)
    }

    /// `true` for the integer value classes (52..=55).
    #[must_use]
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self.0, 52..=55)
    }

    /// `true` for client kinds (56 and above).
    #[must_use]
    #[inline]
    pub const fn is_client(self) -> bool {
        self.0 >= 56
    }

    /// Name from the built-in common vocabulary, if this kind has one.
    #[must_use]
    pub const fn common_name(self) -> Option<&'static str> {
        match self {
            TokenKind::ERROR => Some("error"),
            TokenKind::LPAREN => Some("lparen"),
            TokenKind::RPAREN => Some("rparen"),
            TokenKind::LBRACE => Some("lbrace"),
            TokenKind::RBRACE => Some("rbrace"),
            TokenKind::LBRACKET => Some("lbracket"),
            TokenKind::RBRACKET => Some("rbracket"),
            TokenKind::DOT => Some("dot"),
            TokenKind::COMMA => Some("comma"),
            TokenKind::SEMICOLON => Some("semicolon"),
            TokenKind::COLON => Some("colon"),
            TokenKind::EQUAL => Some("equal"),
            TokenKind::PLUS => Some("plus"),
            TokenKind::MINUS => Some("minus"),
            TokenKind::STAR => Some("star"),
            TokenKind::SLASH => Some("slash"),
            TokenKind::PERCENT => Some("percent"),
            TokenKind::AMP => Some("amp"),
            TokenKind::BAR => Some("bar"),
            TokenKind::CARET => Some("caret"),
            TokenKind::TILDE => Some("tilde"),
            TokenKind::BANG => Some("bang"),
            TokenKind::LT => Some("lt"),
            TokenKind::GT => Some("gt"),
            TokenKind::ARROW => Some("arrow"),
            TokenKind::FAT_ARROW => Some("fat_arrow"),
            TokenKind::SHL => Some("shl"),
            TokenKind::SHR => Some("shr"),
            TokenKind::EQ_EQ => Some("eq_eq"),
            TokenKind::BANG_EQ => Some("bang_eq"),
            TokenKind::LT_EQ => Some("lt_eq"),
            TokenKind::GT_EQ => Some("gt_eq"),
            TokenKind::AMP_AMP => Some("amp_amp"),
            TokenKind::BAR_BAR => Some("bar_bar"),
            TokenKind::DOT_DOT => Some("dot_dot"),
            TokenKind::IDENTIFIER => Some("identifier"),
            TokenKind::BOOLEAN => Some("boolean"),
            TokenKind::BINARY_INTEGER => Some("binary_integer"),
            TokenKind::DECIMAL_INTEGER => Some("decimal_integer"),
            TokenKind::OCTAL_INTEGER => Some("octal_integer"),
            TokenKind::HEXADECIMAL_INTEGER => Some("hexadecimal_integer"),
            _ => None,
        }
    }

    /// Spelling from the built-in common vocabulary, if this kind has one.
    ///
    /// Value classes spell as placeholders (`<identifier>`, `<boolean>`,
    /// `<decimal-integer>`, ...) since their text varies per token.
    #[must_use]
    pub const fn common_spelling(self) -> Option<&'static str> {
        match self {
            TokenKind::ERROR => Some("<error>"),
            TokenKind::LPAREN => Some("("),
            TokenKind::RPAREN => Some(")"),
            TokenKind::LBRACE => Some("{"),
            TokenKind::RBRACE => Some("}"),
            TokenKind::LBRACKET => Some("["),
            TokenKind::RBRACKET => Some("]"),
            TokenKind::DOT => Some("."),
            TokenKind::COMMA => Some(","),
            TokenKind::SEMICOLON => Some(";"),
            TokenKind::COLON => Some(":"),
            TokenKind::EQUAL => Some("="),
            TokenKind::PLUS => Some("+"),
            TokenKind::MINUS => Some("-"),
            TokenKind::STAR => Some("*"),
            TokenKind::SLASH => Some("/"),
            TokenKind::PERCENT => Some("%"),
            TokenKind::AMP => Some("&"),
            TokenKind::BAR => Some("|"),
            TokenKind::CARET => Some("^"),
            TokenKind::TILDE => Some("~"),
            TokenKind::BANG => Some("!"),
            TokenKind::LT => Some("<"),
            TokenKind::GT => Some(">"),
            TokenKind::ARROW => Some("->"),
            TokenKind::FAT_ARROW => Some("=>"),
            TokenKind::SHL => Some("<<"),
            TokenKind::SHR => Some(">>"),
            TokenKind::EQ_EQ => Some("=="),
            TokenKind::BANG_EQ => Some("!="),
            TokenKind::LT_EQ => Some("<="),
            TokenKind::GT_EQ => Some(">="),
            TokenKind::AMP_AMP => Some("&&"),
            TokenKind::BAR_BAR => Some("||"),
            TokenKind::DOT_DOT => Some(".."),
            TokenKind::IDENTIFIER => Some("<identifier>"),
            TokenKind::BOOLEAN => Some("<boolean>"),
            TokenKind::BINARY_INTEGER => Some("<binary-integer>"),
            TokenKind::DECIMAL_INTEGER => Some("<decimal-integer>"),
            TokenKind::OCTAL_INTEGER => Some("<octal-integer>"),
            TokenKind::HEXADECIMAL_INTEGER => Some("<hexadecimal-integer>"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_numbering_is_pinned() {
        assert_eq!(TokenKind::ERROR.raw(), 0);
        assert_eq!(TokenKind::LPAREN.raw(), 1);
        assert_eq!(TokenKind::LBRACKET.raw(), 5);
        assert_eq!(TokenKind::RBRACKET.raw(), 6);
        assert_eq!(TokenKind::GT.raw(), 23);
        assert_eq!(TokenKind::ARROW.raw(), 24);
        assert_eq!(TokenKind::DOT_DOT.raw(), 34);
        assert_eq!(TokenKind::IDENTIFIER.raw(), 50);
        assert_eq!(TokenKind::HEXADECIMAL_INTEGER.raw(), 55);
        assert_eq!(TokenKind::CLIENT_BASE.raw(), 56);
    }

    #[test]
    fn test_range_predicates() {
        assert!(TokenKind::ERROR.is_error());
        assert!(TokenKind::ERROR.is_common());
        assert!(!TokenKind::ERROR.is_punctuation());
        assert!(TokenKind::LPAREN.is_punctuation());
        assert!(TokenKind::DOT_DOT.is_punctuation());
        assert!(TokenKind::new(42).is_punctuation());
        assert!(!TokenKind::IDENTIFIER.is_punctuation());
        assert!(TokenKind::IDENTIFIER.is_value_class());
        assert!(!TokenKind::IDENTIFIER.is_integer());
        assert!(TokenKind::BINARY_INTEGER.is_integer());
        assert!(TokenKind::HEXADECIMAL_INTEGER.is_integer());
        assert!(TokenKind::CLIENT_BASE.is_client());
        assert!(!TokenKind::CLIENT_BASE.is_common());
    }

    #[test]
    fn test_common_names() {
        assert_eq!(TokenKind::ERROR.common_name(), Some("error"));
        assert_eq!(TokenKind::PLUS.common_name(), Some("plus"));
        assert_eq!(TokenKind::FAT_ARROW.common_name(), Some("fat_arrow"));
        assert_eq!(TokenKind::DECIMAL_INTEGER.common_name(), Some("decimal_integer"));
        assert_eq!(TokenKind::new(35).common_name(), None);
        assert_eq!(TokenKind::CLIENT_BASE.common_name(), None);
    }

    #[test]
    fn test_common_spellings() {
        assert_eq!(TokenKind::LBRACKET.common_spelling(), Some("["));
        assert_eq!(TokenKind::RBRACKET.common_spelling(), Some("]"));
        assert_eq!(TokenKind::ARROW.common_spelling(), Some("->"));
        assert_eq!(TokenKind::ERROR.common_spelling(), Some("<error>"));
        assert_eq!(TokenKind::IDENTIFIER.common_spelling(), Some("<identifier>"));
        assert_eq!(TokenKind::new(200).common_spelling(), None);
    }
}
