//! Diagnostic reporting for parlance front ends.
//!
//! A [`Diagnostic`] is an immutable report: a severity, a resolved source
//! location, and a message. Diagnostics are routed through a
//! [`DiagnosticEngine`], which owns a stack of [`DiagnosticContext`]s. Each
//! context either forwards diagnostics to an emitter as they arrive or
//! buffers them for later replay, and keeps its own error count. Speculative
//! passes push a suppressing context, probe the error count, and pop; the
//! buffered diagnostics come back with the popped context.
//!
//! Rendering is delegated to a [`DiagnosticEmitter`]. The stock
//! [`TerminalEmitter`] writes one line per diagnostic in the form
//! `severity:location: message`.

mod diagnostic;
mod emitter;
mod engine;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use engine::{DiagnosticContext, DiagnosticEngine, ErrorCheckpoint};
