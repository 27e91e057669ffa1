//! The diagnostic engine and its context stack.

use parlance_source::{Location, SharedSourceMap};
use smallvec::SmallVec;
use tracing::debug;

use crate::{ColorMode, Diagnostic, DiagnosticEmitter, TerminalEmitter};

/// One frame of diagnostic state.
///
/// A context decides what happens to the diagnostics reported while it is
/// on top of the engine's stack: a suppressing context buffers them, a
/// pass-through context forwards them to the emitter as they arrive. Every
/// context keeps its own error count, so nested passes can probe whether
/// *they* failed without consulting the state of their callers.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticContext {
    suppress: bool,
    errors: usize,
    buffered: Vec<Diagnostic>,
}

impl DiagnosticContext {
    fn new(suppress: bool) -> Self {
        DiagnosticContext {
            suppress,
            errors: 0,
            buffered: Vec::new(),
        }
    }

    /// `true` if diagnostics reported under this context are buffered
    /// instead of emitted.
    #[must_use]
    #[inline]
    pub fn is_suppressing(&self) -> bool {
        self.suppress
    }

    /// Number of error diagnostics reported under this context, including
    /// buffered ones.
    #[must_use]
    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// `true` if no errors were reported under this context.
    #[must_use]
    #[inline]
    pub fn ok(&self) -> bool {
        self.errors == 0
    }

    /// The diagnostics buffered under this context, in report order.
    #[must_use]
    pub fn buffered(&self) -> &[Diagnostic] {
        &self.buffered
    }

    /// Consumes the context, yielding its buffered diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.buffered
    }
}

/// Records the error count at a point in time, so a caller can tell
/// whether an operation reported new errors.
///
/// A checkpoint is only meaningful against the context it was taken in;
/// comparing across a push or pop is a caller bug.
#[derive(Copy, Clone, Debug)]
pub struct ErrorCheckpoint {
    errors: usize,
    depth: usize,
}

/// Routes diagnostics from report sites to an emitter.
///
/// The engine pairs a source map with an emitter and a stack of
/// [`DiagnosticContext`]s. Reports always target the top of the stack. The
/// root context is created with the engine and can never be popped, so an
/// engine is usable from the moment it exists.
///
/// Locations are resolved against the source map when a diagnostic is
/// *reported*, not when it is rendered; a buffered diagnostic prints the
/// same text no matter how long it sits in the buffer.
pub struct DiagnosticEngine {
    map: SharedSourceMap,
    emitter: Box<dyn DiagnosticEmitter>,
    root: DiagnosticContext,
    stack: SmallVec<[DiagnosticContext; 4]>,
}

impl DiagnosticEngine {
    /// Creates an engine that emits to standard error.
    #[must_use]
    pub fn new(map: SharedSourceMap) -> Self {
        DiagnosticEngine::with_emitter(map, Box::new(TerminalEmitter::stderr(ColorMode::Auto)))
    }

    /// Creates an engine with a custom emitter.
    #[must_use]
    pub fn with_emitter(map: SharedSourceMap, emitter: Box<dyn DiagnosticEmitter>) -> Self {
        DiagnosticEngine {
            map,
            emitter,
            root: DiagnosticContext::new(false),
            stack: SmallVec::new(),
        }
    }

    /// Pushes a fresh context onto the stack.
    ///
    /// While a suppressing context is on top, reported diagnostics are
    /// buffered rather than emitted.
    pub fn push(&mut self, suppress: bool) {
        self.stack.push(DiagnosticContext::new(suppress));
        debug!(depth = self.depth(), suppress, "pushed diagnostic context");
    }

    /// Pops the top context and returns it, buffered diagnostics and all.
    ///
    /// # Panics
    ///
    /// Panics if only the root context remains; the root belongs to the
    /// engine.
    pub fn pop(&mut self) -> DiagnosticContext {
        let Some(context) = self.stack.pop() else {
            panic!("cannot pop the root diagnostic context");
        };
        debug!(
            depth = self.depth(),
            errors = context.errors,
            buffered = context.buffered.len(),
            "popped diagnostic context"
        );
        context
    }

    /// Number of contexts on the stack, counting the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// `true` if the top context buffers diagnostics.
    #[must_use]
    pub fn is_suppressing(&self) -> bool {
        self.stack.last().unwrap_or(&self.root).suppress
    }

    /// Error count of the top context.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.stack.last().unwrap_or(&self.root).errors
    }

    /// `true` if the top context has seen no errors.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Reports a fully-formed diagnostic to the top context.
    ///
    /// Errors bump the context's error count whether or not the context is
    /// suppressing; suppression hides output, never failure.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        let top = self.stack.last_mut().unwrap_or(&mut self.root);
        if diagnostic.severity.is_error() {
            top.errors += 1;
        }
        if top.suppress {
            top.buffered.push(diagnostic);
        } else {
            self.emitter.emit(&diagnostic);
        }
    }

    /// Reports an error at `location`.
    pub fn error(&mut self, location: Location, message: impl Into<String>) {
        let resolved = self.map.resolve(location);
        self.report(Diagnostic::error(resolved, message));
    }

    /// Reports a warning at `location`.
    pub fn warning(&mut self, location: Location, message: impl Into<String>) {
        let resolved = self.map.resolve(location);
        self.report(Diagnostic::warning(resolved, message));
    }

    /// Reports a note at `location`.
    pub fn note(&mut self, location: Location, message: impl Into<String>) {
        let resolved = self.map.resolve(location);
        self.report(Diagnostic::note(resolved, message));
    }

    /// Emits the diagnostics buffered in the top context, in report order.
    ///
    /// The buffer is left intact, so the same diagnostics are replayed
    /// again by a later call. Does nothing when the top context is not
    /// suppressing.
    pub fn emit_buffered(&mut self) {
        let top = self.stack.last().unwrap_or(&self.root);
        if top.suppress {
            self.emitter.emit_all(&top.buffered);
        }
    }

    /// Discards the top context's buffered diagnostics and zeroes its
    /// error count.
    pub fn reset(&mut self) {
        let top = self.stack.last_mut().unwrap_or(&mut self.root);
        top.buffered.clear();
        top.errors = 0;
    }

    /// Runs `f` under a fresh suppressing context and returns its result
    /// together with the popped context.
    ///
    /// Nothing reported inside `f` reaches the emitter; probe the returned
    /// context to decide whether to replay, rephrase, or drop the buffered
    /// diagnostics.
    pub fn suppressed<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> (R, DiagnosticContext) {
        self.push(true);
        let result = f(self);
        let context = self.pop();
        (result, context)
    }

    /// Captures the current error count for a later [`ok_since`] probe.
    ///
    /// [`ok_since`]: DiagnosticEngine::ok_since
    #[must_use]
    pub fn checkpoint(&self) -> ErrorCheckpoint {
        ErrorCheckpoint {
            errors: self.error_count(),
            depth: self.depth(),
        }
    }

    /// `true` if no errors were reported since `checkpoint` was taken.
    #[must_use]
    pub fn ok_since(&self, checkpoint: ErrorCheckpoint) -> bool {
        debug_assert_eq!(
            checkpoint.depth,
            self.depth(),
            "checkpoint crossed a diagnostic context boundary"
        );
        self.error_count() == checkpoint.errors
    }

    /// Flushes the emitter.
    pub fn flush(&mut self) {
        self.emitter.flush();
    }
}
