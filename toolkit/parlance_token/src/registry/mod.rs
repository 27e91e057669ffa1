//! Pluggable token vocabularies.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use crate::TokenKind;

/// A client vocabulary: names and spellings for the kinds it defines.
///
/// Return `None` for kinds the set does not define; the registry keeps
/// probing older installations. Names identify kinds in messages and logs
/// (`"pow"`); spellings are what the token looks like in source (`"**"`).
pub trait TokenSet {
    /// Name of `kind`, if this set defines it.
    fn name(&self, kind: TokenKind) -> Option<&str>;

    /// Spelling of `kind`, if this set defines it.
    fn spelling(&self, kind: TokenKind) -> Option<&str>;
}

/// One installed vocabulary entry.
enum Registration {
    Set(Arc<dyn TokenSet>),
    Single {
        kind: TokenKind,
        name: &'static str,
        spelling: &'static str,
    },
}

/// Resolves token kinds to names and spellings.
///
/// The registry is an explicit value owned by the front end, not process
/// state; two pipelines with different vocabularies coexist by each owning
/// their own registry.
///
/// Resolution order: the built-in common vocabulary first (kinds 0..=55
/// have fixed meanings and cannot be overridden), then installed
/// vocabularies from most to least recent. Later installations shadow
/// earlier ones for the kinds they define; uninstalling re-exposes
/// whatever was underneath.
#[derive(Default)]
pub struct TokenRegistry {
    stack: SmallVec<[Registration; 4]>,
}

impl TokenRegistry {
    /// Creates a registry holding only the common vocabulary.
    #[must_use]
    pub fn new() -> Self {
        TokenRegistry {
            stack: SmallVec::new(),
        }
    }

    /// Installs a vocabulary on top of the stack.
    ///
    /// The registry keeps a handle to the set; pass a clone of the same
    /// `Arc` to [`uninstall`](Self::uninstall) later.
    pub fn install(&mut self, set: Arc<dyn TokenSet>) {
        self.stack.push(Registration::Set(set));
        debug!(depth = self.depth(), "installed token set");
    }

    /// Removes the most recent installation of `set`.
    ///
    /// # Panics
    ///
    /// Panics if `set` is not installed.
    pub fn uninstall(&mut self, set: &Arc<dyn TokenSet>) {
        let index = self.stack.iter().rposition(|registration| match registration {
            Registration::Set(installed) => Arc::ptr_eq(installed, set),
            Registration::Single { .. } => false,
        });
        let Some(index) = index else {
            panic!("token set is not installed");
        };
        self.stack.remove(index);
        debug!(depth = self.depth(), "uninstalled token set");
    }

    /// Installs a single kind with its name and spelling.
    ///
    /// Shorthand for vocabularies too small to deserve a [`TokenSet`]
    /// type. Singles shadow and are shadowed like any other installation.
    pub fn install_token(&mut self, kind: TokenKind, name: &'static str, spelling: &'static str) {
        self.stack.push(Registration::Single {
            kind,
            name,
            spelling,
        });
        debug!(kind = kind.raw(), name, "installed token");
    }

    /// Installs several kinds at once, in slice order.
    pub fn install_tokens(&mut self, entries: &[(TokenKind, &'static str, &'static str)]) {
        for &(kind, name, spelling) in entries {
            self.install_token(kind, name, spelling);
        }
    }

    /// Number of installed registrations (sets and singles).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Name of `kind`, if any installation or the common vocabulary
    /// defines it.
    #[must_use]
    pub fn try_name(&self, kind: TokenKind) -> Option<&str> {
        if let Some(name) = kind.common_name() {
            return Some(name);
        }
        self.stack.iter().rev().find_map(|registration| match registration {
            Registration::Set(set) => set.name(kind),
            Registration::Single { kind: k, name, .. } => (*k == kind).then_some(*name),
        })
    }

    /// Spelling of `kind`, if any installation or the common vocabulary
    /// defines it.
    #[must_use]
    pub fn try_spelling(&self, kind: TokenKind) -> Option<&str> {
        if let Some(spelling) = kind.common_spelling() {
            return Some(spelling);
        }
        self.stack.iter().rev().find_map(|registration| match registration {
            Registration::Set(set) => set.spelling(kind),
            Registration::Single { kind: k, spelling, .. } => (*k == kind).then_some(*spelling),
        })
    }

    /// Name of `kind`.
    ///
    /// # Panics
    ///
    /// Panics if no installation defines `kind`; lexing a kind that was
    /// never installed is a front-end bug.
    #[must_use]
    pub fn name(&self, kind: TokenKind) -> &str {
        match self.try_name(kind) {
            Some(name) => name,
            None => panic!("no installed token set defines kind {}", kind.raw()),
        }
    }

    /// Spelling of `kind`.
    ///
    /// # Panics
    ///
    /// Panics if no installation defines `kind`.
    #[must_use]
    pub fn spelling(&self, kind: TokenKind) -> &str {
        match self.try_spelling(kind) {
            Some(spelling) => spelling,
            None => panic!("no installed token set defines kind {}", kind.raw()),
        }
    }
}
