//! A recursive descent parser for calculator expressions.
//!
//! Grammar, loosest to tightest:
//!
//! ```text
//! expression     = additive
//! additive       = multiplicative (('+' | '-') multiplicative)*
//! multiplicative = power (('*' | '/' | '%') power)*
//! power          = prefix ('**' power)?
//! prefix         = ('+' | '-') prefix | primary
//! primary        = INTEGER | '(' expression ')'
//! ```
//!
//! `**` is right-associative; every other binary operator associates left.
//! Errors go through the [`DiagnosticEngine`] and parsing stops at the
//! first one, returning `None`.

use parlance_diagnostic::DiagnosticEngine;
use parlance_symbol::SymbolTable;
use parlance_token::{as_integer, TokenKind, TokenRegistry, TokenStream};

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::tokens::POW;

/// Parses one expression spanning the whole of `stream`.
///
/// Tokens left over after the expression are themselves an error. Returns
/// `None` after reporting if the input does not parse.
pub fn parse(
    stream: &mut TokenStream<'_>,
    symbols: &SymbolTable,
    registry: &TokenRegistry,
    engine: &mut DiagnosticEngine,
) -> Option<Expr> {
    let mut parser = Parser {
        stream,
        symbols,
        registry,
        engine,
    };
    let expr = parser.parse_expression()?;
    if !parser.stream.eof() {
        parser.expected_got("end of input");
        return None;
    }
    Some(expr)
}

struct Parser<'p, 't> {
    stream: &'p mut TokenStream<'t>,
    symbols: &'p SymbolTable,
    registry: &'p TokenRegistry,
    engine: &'p mut DiagnosticEngine,
}

impl Parser<'_, '_> {
    fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> Option<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = match_additive_op(self.stream.peek().kind) {
            let location = self.stream.get().location;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, location, left, right);
        }
        Some(left)
    }

    fn parse_multiplicative(&mut self) -> Option<Expr> {
        let mut left = self.parse_power()?;
        while let Some(op) = match_multiplicative_op(self.stream.peek().kind) {
            let location = self.stream.get().location;
            let right = self.parse_power()?;
            left = Expr::binary(op, location, left, right);
        }
        Some(left)
    }

    /// `**` binds tighter than prefix on its right only: `2 ** -3` negates
    /// the exponent, while `-2 ** 3` exponentiates the negation.
    fn parse_power(&mut self) -> Option<Expr> {
        let left = self.parse_prefix()?;
        if self.stream.peek().kind == POW {
            let location = self.stream.get().location;
            let right = self.parse_power()?;
            return Some(Expr::binary(BinaryOp::Pow, location, left, right));
        }
        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        let op = match self.stream.peek().kind {
            TokenKind::PLUS => UnaryOp::Pos,
            TokenKind::MINUS => UnaryOp::Neg,
            _ => return self.parse_primary(),
        };
        let location = self.stream.get().location;
        let operand = self.parse_prefix()?;
        Some(Expr::unary(op, location, operand))
    }

    fn parse_primary(&mut self) -> Option<Expr> {
        match self.stream.peek().kind {
            TokenKind::DECIMAL_INTEGER => {
                let token = self.stream.get();
                match as_integer(self.symbols, token) {
                    Ok(value) => Some(Expr::int(token.location, value)),
                    Err(err) => {
                        self.engine.error(token.location, err.to_string());
                        None
                    }
                }
            }
            TokenKind::LPAREN => {
                let _ = self.stream.get();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RPAREN)?;
                Some(expr)
            }
            _ => {
                self.expected_got("expression");
                None
            }
        }
    }

    /// Consumes a token of `kind` or reports what stands in its place.
    fn expect(&mut self, kind: TokenKind) -> Option<()> {
        if self.stream.peek().kind == kind {
            let _ = self.stream.get();
            return Some(());
        }
        let spelling = self.registry.spelling(kind);
        self.expected_got(&format!("'{spelling}'"));
        None
    }

    fn expected_got(&mut self, what: &str) {
        let location = self.stream.location();
        let message = if self.stream.eof() {
            format!("expected {what} but got end of input")
        } else {
            let found = self.stream.peek().text(self.symbols);
            format!("expected {what} but got '{found}'")
        };
        self.engine.error(location, message);
    }
}

fn match_additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::PLUS => Some(BinaryOp::Add),
        TokenKind::MINUS => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn match_multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::STAR => Some(BinaryOp::Mul),
        TokenKind::SLASH => Some(BinaryOp::Div),
        TokenKind::PERCENT => Some(BinaryOp::Rem),
        _ => None,
    }
}
