//! One evaluation session: shared tables plus the diagnostic engine.

use parlance_diagnostic::{DiagnosticEmitter, DiagnosticEngine};
use parlance_source::{SharedSourceMap, SourceFile};
use parlance_symbol::SymbolTable;
use parlance_token::TokenRegistry;
use tracing::debug;

use crate::{eval, lexer, parser, tokens};

/// Everything a REPL line or a file evaluation needs, wired together.
///
/// The session owns the source map, the symbol table, the token registry
/// and the diagnostic engine. Each input buffer is inserted into the map,
/// so diagnostics resolve to stable coordinates even after the line has
/// scrolled away.
pub struct Session {
    map: SharedSourceMap,
    symbols: SymbolTable,
    registry: TokenRegistry,
    engine: DiagnosticEngine,
}

impl Session {
    /// Creates a session that reports to standard error.
    #[must_use]
    pub fn new() -> Self {
        let map = SharedSourceMap::new();
        let engine = DiagnosticEngine::new(map.clone());
        Session::assemble(map, engine)
    }

    /// Creates a session with a caller-supplied emitter.
    #[must_use]
    pub fn with_emitter(emitter: Box<dyn DiagnosticEmitter>) -> Self {
        let map = SharedSourceMap::new();
        let engine = DiagnosticEngine::with_emitter(map.clone(), emitter);
        Session::assemble(map, engine)
    }

    fn assemble(map: SharedSourceMap, engine: DiagnosticEngine) -> Self {
        let mut registry = TokenRegistry::new();
        tokens::init_tokens(&mut registry);
        Session {
            map,
            symbols: SymbolTable::new(),
            registry,
            engine,
        }
    }

    /// Evaluates one interactive line.
    ///
    /// Returns `None` when the line is empty or fails; failures have
    /// already been reported by the time this returns. Coordinates
    /// restart at 1:1 for every line.
    pub fn eval_line(&mut self, text: &str) -> Option<i64> {
        let file = self.map.insert_anonymous(text);
        self.eval_source(&file)
    }

    /// Evaluates the whole of a file as one expression.
    ///
    /// Diagnostics carry `path` in their coordinates.
    pub fn eval_file(&mut self, path: &str, text: &str) -> Option<i64> {
        let file = self.map.insert(path, text);
        self.eval_source(&file)
    }

    fn eval_source(&mut self, file: &SourceFile) -> Option<i64> {
        let checkpoint = self.engine.checkpoint();
        let tokens = lexer::lex(file, &self.symbols, &mut self.engine);
        debug!(tokens = tokens.len(), "lexed");
        if !self.engine.ok_since(checkpoint) {
            return None;
        }
        if tokens.is_empty() {
            return None;
        }

        let mut stream = tokens.stream();
        let expr = parser::parse(&mut stream, &self.symbols, &self.registry, &mut self.engine)?;
        debug!(expr = %expr, "parsed");

        eval::evaluate(&expr, &mut self.engine)
    }

    /// Errors reported since the session was created or last reset.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.engine.error_count()
    }

    /// Clears the error tally, e.g. between interactive lines.
    pub fn reset(&mut self) {
        self.engine.reset();
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
