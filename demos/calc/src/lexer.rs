//! The calculator's lexer.
//!
//! One pass over the file with a [`Cursor`]; every lexeme is interned and
//! pushed onto a [`TokenList`]. Unrecognized characters are reported and
//! skipped so one bad character does not hide later errors.

use parlance_diagnostic::DiagnosticEngine;
use parlance_scan::{classify, Cursor};
use parlance_source::SourceFile;
use parlance_symbol::SymbolTable;
use parlance_token::{Token, TokenKind, TokenList};

use crate::tokens::POW;

/// Tokenizes `file`, reporting unrecognized characters through `engine`.
pub fn lex(file: &SourceFile, symbols: &SymbolTable, engine: &mut DiagnosticEngine) -> TokenList {
    let mut cursor = Cursor::over(file);
    let mut tokens = TokenList::new();

    loop {
        cursor.eat_spaces();
        if cursor.eof() {
            break;
        }

        let location = cursor.location();
        let start = cursor.offset();

        if classify::is_decimal_digit(cursor.peek()) {
            cursor.eat_while(classify::is_decimal_digit);
            let symbol = symbols.intern(cursor.slice_from(start));
            tokens.push(Token::integer(TokenKind::DECIMAL_INTEGER, location, symbol));
            continue;
        }

        let (kind, chars) = match cursor.peek() {
            '(' => (TokenKind::LPAREN, 1),
            ')' => (TokenKind::RPAREN, 1),
            '+' => (TokenKind::PLUS, 1),
            '-' => (TokenKind::MINUS, 1),
            '*' if cursor.peek_n(1) == '*' => (POW, 2),
            '*' => (TokenKind::STAR, 1),
            '/' => (TokenKind::SLASH, 1),
            '%' => (TokenKind::PERCENT, 1),
            other => {
                engine.error(location, format!("unrecognized character '{other}'"));
                let _ = cursor.get();
                continue;
            }
        };

        for _ in 0..chars {
            let _ = cursor.get();
        }
        let symbol = symbols.intern(cursor.slice_from(start));
        tokens.push(Token::new(kind, location, symbol));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use parlance_source::SharedSourceMap;

    use super::*;

    fn lex_kinds(text: &str) -> Vec<TokenKind> {
        let map = SharedSourceMap::new();
        let file = map.insert_anonymous(text);
        let symbols = SymbolTable::new();
        let mut engine = DiagnosticEngine::new(map);
        let tokens = lex(&file, &symbols, &mut engine);
        assert!(engine.ok(), "unexpected diagnostics for {text:?}");
        tokens.iter().map(|token| token.kind).collect()
    }

    #[test]
    fn test_lexes_every_operator() {
        assert_eq!(
            lex_kinds("( ) + - * ** / %"),
            vec![
                TokenKind::LPAREN,
                TokenKind::RPAREN,
                TokenKind::PLUS,
                TokenKind::MINUS,
                TokenKind::STAR,
                POW,
                TokenKind::SLASH,
                TokenKind::PERCENT,
            ]
        );
    }

    #[test]
    fn test_star_star_is_one_token() {
        assert_eq!(
            lex_kinds("2**3"),
            vec![TokenKind::DECIMAL_INTEGER, POW, TokenKind::DECIMAL_INTEGER]
        );
    }

    #[test]
    fn test_integers_keep_their_text() {
        let map = SharedSourceMap::new();
        let file = map.insert_anonymous("10 + 200");
        let symbols = SymbolTable::new();
        let mut engine = DiagnosticEngine::new(map);
        let tokens = lex(&file, &symbols, &mut engine);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text(&symbols), "10");
        assert_eq!(tokens[2].text(&symbols), "200");
    }

    #[test]
    fn test_locations_point_at_lexeme_starts() {
        let map = SharedSourceMap::new();
        let file = map.insert_anonymous("1 + 23");
        let symbols = SymbolTable::new();
        let mut engine = DiagnosticEngine::new(map.clone());
        let tokens = lex(&file, &symbols, &mut engine);
        assert_eq!(map.resolve(tokens[2].location).to_string(), "1:5");
    }

    #[test]
    fn test_unrecognized_character_is_reported_and_skipped() {
        let map = SharedSourceMap::new();
        let file = map.insert_anonymous("1 # 2");
        let symbols = SymbolTable::new();
        let mut engine = DiagnosticEngine::new(map);
        let (tokens, context) = engine.suppressed(|engine| lex(&file, &symbols, engine));
        assert_eq!(tokens.len(), 2);
        assert_eq!(context.error_count(), 1);
        assert_eq!(
            context.buffered()[0].to_string(),
            "error:1:3: unrecognized character '#'"
        );
    }

    #[test]
    fn test_empty_input_lexes_to_nothing() {
        assert!(lex_kinds("").is_empty());
        assert!(lex_kinds("   \n\t  ").is_empty());
    }
}
