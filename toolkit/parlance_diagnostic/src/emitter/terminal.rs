//! Line-oriented terminal emitter.

use std::io::{self, IsTerminal, Write};

use crate::{Diagnostic, DiagnosticEmitter, Severity};

/// ANSI escape sequences for severity highlighting.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const RESET: &str = "\x1b[0m";
}

/// When to apply ANSI colors.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ColorMode {
    /// Color only when the output stream is a terminal.
    #[default]
    Auto,
    /// Always color, even when piped.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes one line per diagnostic in the form `severity:location: message`.
///
/// Only the severity word is colored, so the line remains machine-splittable
/// on the first two `:` regardless of color mode. Write errors are swallowed;
/// diagnostics are best-effort output on a stream the process does not
/// control.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Creates an emitter with colors disabled.
    pub fn new(writer: W) -> Self {
        TerminalEmitter {
            writer,
            colors: false,
        }
    }

    /// Creates an emitter with an explicit color decision.
    ///
    /// `is_tty` reports whether `writer` is attached to a terminal; it is
    /// only consulted in [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        if self.colors {
            let color = match severity {
                Severity::Error => colors::ERROR,
                Severity::Warning => colors::WARNING,
                Severity::Note => colors::NOTE,
            };
            let _ = write!(self.writer, "{}{}{}", color, severity, colors::RESET);
        } else {
            let _ = write!(self.writer, "{}", severity);
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Creates an emitter on standard error, detecting terminal attachment
    /// for [`ColorMode::Auto`].
    #[must_use]
    pub fn stderr(mode: ColorMode) -> Self {
        let stderr = io::stderr();
        let is_tty = stderr.is_terminal();
        TerminalEmitter::with_color_mode(stderr, mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_severity(diagnostic.severity);
        let _ = writeln!(self.writer, ":{}: {}", diagnostic.location, diagnostic.message);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
