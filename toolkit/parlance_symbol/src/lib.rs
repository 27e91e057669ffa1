//! String interning for the parlance toolkit.
//!
//! Tokens do not own their text; they carry a [`Symbol`], a stable 4-byte
//! reference into a [`SymbolTable`]. Interning the same text twice yields
//! the same symbol, so spelling comparison is integer comparison.
//!
//! Interned text is leaked and therefore lives as long as the process,
//! which is why [`SymbolTable::resolve`] can hand out `&'static str` and a
//! symbol can never dangle. A pipeline typically creates one table and
//! threads `&SymbolTable` through its lexer and elaboration calls.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// A stable, non-owning reference to interned text.
///
/// Symbols are meaningful only together with the table that produced them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    /// The pre-interned empty string. Error tokens carry this symbol.
    pub const EMPTY: Symbol = Symbol(0);

    /// The raw table index, for debug output.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Table exceeded capacity (over 4 billion symbols).
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "symbol table exceeded capacity: {} strings, max is {}",
                count,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct Inner {
    /// Map from string content to symbol index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by symbol.
    strings: Vec<&'static str>,
}

/// The interner.
///
/// Interning goes through `&self` so a lexer and its collaborators can
/// share one table without mutable aliasing gymnastics. The table is
/// `Sync`; independent pipelines may share one instance.
pub struct SymbolTable {
    inner: RwLock<Inner>,
}

impl SymbolTable {
    /// Create a table with the empty string pre-interned as
    /// [`Symbol::EMPTY`].
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        SymbolTable {
            inner: RwLock::new(Inner {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Try to intern a string, returning its symbol or an error on
    /// overflow.
    pub fn try_intern(&self, text: &str) -> Result<Symbol, InternError> {
        // Fast path: already interned.
        {
            let guard = self.inner.read();
            if let Some(&index) = guard.map.get(text) {
                return Ok(Symbol(index));
            }
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring the write lock.
        if let Some(&index) = guard.map.get(text) {
            return Ok(Symbol(index));
        }

        // Leak the string to get a 'static lifetime.
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());

        let index = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        guard.strings.push(leaked);
        guard.map.insert(leaked, index);
        Ok(Symbol(index))
    }

    /// Intern a string, returning its symbol.
    ///
    /// # Panics
    /// Panics if the table exceeds capacity. Use `try_intern` for fallible
    /// interning.
    #[inline]
    pub fn intern(&self, text: &str) -> Symbol {
        self.try_intern(text).unwrap_or_else(|e| panic!("{}", e))
    }

    /// The text a symbol refers to.
    ///
    /// # Panics
    /// Panics if the symbol did not come from this table.
    pub fn resolve(&self, symbol: Symbol) -> &'static str {
        self.try_resolve(symbol).unwrap_or_else(|| {
            panic!(
                "symbol {} does not belong to this table ({} interned)",
                symbol.index(),
                self.len()
            )
        })
    }

    /// The text a symbol refers to, or `None` for a foreign symbol.
    pub fn try_resolve(&self, symbol: Symbol) -> Option<&'static str> {
        self.inner.read().strings.get(symbol.0 as usize).copied()
    }

    /// Number of interned symbols (the empty string counts).
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    /// Check if the table holds only the pre-interned empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
