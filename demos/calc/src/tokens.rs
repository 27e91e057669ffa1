//! The calculator's token vocabulary.
//!
//! Almost everything calc lexes already has a common kind: the punctuation
//! range covers `( ) + - * / %` and the value classes cover decimal
//! integers. The only kind calc mints itself is the power operator.

use parlance_token::{TokenKind, TokenRegistry};

/// The right-associative power operator `**`.
pub const POW: TokenKind = TokenKind::CLIENT_BASE;

/// Installs calc's own kinds into `registry`.
pub fn init_tokens(registry: &mut TokenRegistry) {
    registry.install_tokens(&[(POW, "pow", "**")]);
}
