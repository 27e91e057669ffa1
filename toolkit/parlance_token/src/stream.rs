//! Borrowed lookahead cursor over a token slice.

use parlance_source::Location;

use crate::Token;

/// A non-owning cursor over a token sequence with arbitrary lookahead.
///
/// The stream is [`Copy`]: snapshotting the current position for
/// backtracking is a plain assignment, and restoring is assigning it back.
///
/// Reads past the end are total rather than panicking: [`peek`](Self::peek)
/// and [`get`](Self::get) yield the error token at end of input, and
/// [`get`](Self::get) does not advance there, so a parser loop that fails
/// to terminate spins on the error token instead of walking off the slice.
#[derive(Copy, Clone, Debug)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenStream<'a> {
    /// Opens a stream at the start of `tokens`.
    #[must_use]
    #[inline]
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    /// `true` if all tokens have been consumed.
    #[must_use]
    #[inline]
    pub fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The current token, or the error token at end of input.
    #[must_use]
    #[inline]
    pub fn peek(&self) -> Token {
        self.peek_n(0)
    }

    /// The token `n` positions ahead, or the error token past the end.
    ///
    /// `peek_n(0)` is the current token.
    #[must_use]
    #[inline]
    pub fn peek_n(&self, n: usize) -> Token {
        match self.tokens.get(self.pos + n) {
            Some(token) => *token,
            None => Token::error(Location::NONE),
        }
    }

    /// Consumes and returns the current token.
    ///
    /// At end of input, returns the error token and stays put.
    #[inline]
    pub fn get(&mut self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                *token
            }
            None => Token::error(Location::NONE),
        }
    }

    /// Location of the current token, or [`Location::NONE`] at end of
    /// input.
    #[must_use]
    #[inline]
    pub fn location(&self) -> Location {
        match self.tokens.get(self.pos) {
            Some(token) => token.location,
            None => Location::NONE,
        }
    }

    /// Index of the current token in the underlying sequence.
    #[must_use]
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of tokens left to consume.
    #[must_use]
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}
