//! Diagnostic rendering backends.
//!
//! The [`DiagnosticEngine`](crate::DiagnosticEngine) hands every
//! non-suppressed diagnostic to a [`DiagnosticEmitter`]. Implementations
//! decide how reports reach the user: the stock [`TerminalEmitter`] writes
//! plain lines to a stream, while tests typically capture into a buffer.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Renders diagnostics to some output.
///
/// Emitters do not filter or count; the engine decides which diagnostics
/// reach the emitter and in what order. Emission is infallible:
/// implementations swallow writer failures instead of surfacing them to
/// report sites.
pub trait DiagnosticEmitter {
    /// Renders a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Renders a batch of diagnostics in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Flushes any buffered output.
    fn flush(&mut self);
}
