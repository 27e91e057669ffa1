//! The diagnostic value type and its severity levels.

use std::fmt;

use parlance_source::ResolvedLocation;

/// How serious a diagnostic is.
///
/// Only [`Severity::Error`] diagnostics count toward an engine's error
/// tally; warnings and notes never affect whether a pass is considered to
/// have failed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    /// The input is invalid and cannot be accepted.
    Error,
    /// The input is suspicious but still accepted.
    Warning,
    /// Supplementary information attached to an earlier report.
    Note,
}

impl Severity {
    /// `true` for [`Severity::Error`].
    #[must_use]
    #[inline]
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// An immutable report about the source program.
///
/// A diagnostic carries a resolved location rather than a raw offset so
/// that it can be rendered long after the source map that produced it has
/// gone out of scope. Construction is expected to be rare relative to the
/// amount of clean input a front end processes, so the constructors are
/// marked cold.
///
/// Rendered form: `severity:location: message`. An unknown location
/// renders as the empty string, collapsing the line to
/// `severity:: message`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    /// How serious the report is.
    pub severity: Severity,
    /// Where in the source the report points.
    pub location: ResolvedLocation,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic with an explicit severity.
    #[must_use]
    pub fn new(severity: Severity, location: ResolvedLocation, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            location,
            message: message.into(),
        }
    }

    /// Creates an error diagnostic.
    #[cold]
    #[must_use]
    pub fn error(location: ResolvedLocation, message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Error, location, message)
    }

    /// Creates a warning diagnostic.
    #[cold]
    #[must_use]
    pub fn warning(location: ResolvedLocation, message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Warning, location, message)
    }

    /// Creates a note diagnostic.
    #[cold]
    #[must_use]
    pub fn note(location: ResolvedLocation, message: impl Into<String>) -> Self {
        Diagnostic::new(Severity::Note, location, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.severity, self.location, self.message)
    }
}
