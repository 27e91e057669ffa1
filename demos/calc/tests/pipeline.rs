// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end pipeline tests for the calc front end.
//!
//! Everything here drives the public [`Session`] surface the way the
//! binary does: one buffer per input, diagnostics captured through a
//! shared writer, values compared against hand-computed results.

use std::io;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use calc::Session;
use parlance_diagnostic::TerminalEmitter;

/// Cloneable capture buffer for asserting on emitted diagnostics.
#[derive(Clone, Default)]
struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl SharedWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn session() -> (Session, SharedWriter) {
    let writer = SharedWriter::default();
    let session = Session::with_emitter(Box::new(TerminalEmitter::new(writer.clone())));
    (session, writer)
}

#[test]
fn test_precedence_chain() {
    let (mut session, _) = session();
    assert_eq!(session.eval_line("1 + 2 * 3"), Some(7));
    assert_eq!(session.eval_line("(1 + 2) * 3"), Some(9));
    assert_eq!(session.eval_line("10 - 2 - 3"), Some(5));
}

#[test]
fn test_power_is_right_associative() {
    let (mut session, _) = session();
    assert_eq!(session.eval_line("2 ** 3 ** 2"), Some(512));
    assert_eq!(session.eval_line("(2 ** 3) ** 2"), Some(64));
}

#[test]
fn test_prefix_operators() {
    let (mut session, _) = session();
    assert_eq!(session.eval_line("-5 + 2"), Some(-3));
    assert_eq!(session.eval_line("-2 ** 2"), Some(4));
    assert_eq!(session.eval_line("--5"), Some(5));
}

#[test]
fn test_division_by_zero_points_at_the_slash() {
    let (mut session, writer) = session();
    assert_eq!(session.eval_line("1 / 0"), None);
    assert_eq!(session.error_count(), 1);
    assert_eq!(writer.contents(), "error:1:3: division by zero\n");
}

#[test]
fn test_unrecognized_character_is_located() {
    let (mut session, writer) = session();
    assert_eq!(session.eval_line("1 $ 2"), None);
    assert_eq!(writer.contents(), "error:1:3: unrecognized character '$'\n");
}

#[test]
fn test_parse_errors_are_located() {
    let (mut session, writer) = session();
    assert_eq!(session.eval_line("1 + * 2"), None);
    assert_eq!(
        writer.contents(),
        "error:1:5: expected expression but got '*'\n"
    );
}

#[test]
fn test_unclosed_paren_reports_end_of_input() {
    let (mut session, writer) = session();
    assert_eq!(session.eval_line("(1 + 2"), None);
    assert_eq!(
        writer.contents(),
        "error:: expected ')' but got end of input\n"
    );
}

#[test]
fn test_trailing_tokens_are_an_error() {
    let (mut session, writer) = session();
    assert_eq!(session.eval_line("1 2"), None);
    assert_eq!(
        writer.contents(),
        "error:1:3: expected end of input but got '2'\n"
    );
}

#[test]
fn test_overflow_is_diagnosed() {
    let (mut session, writer) = session();
    assert_eq!(session.eval_line("9223372036854775807 + 1"), None);
    assert_eq!(writer.contents(), "error:1:21: integer overflow in addition\n");
}

#[test]
fn test_line_coordinates_restart_per_line() {
    let (mut session, writer) = session();
    assert_eq!(session.eval_line("@"), None);
    assert_eq!(session.eval_line("@"), None);
    assert_eq!(
        writer.contents(),
        "error:1:1: unrecognized character '@'\n\
         error:1:1: unrecognized character '@'\n"
    );
    assert_eq!(session.error_count(), 2);
}

#[test]
fn test_file_diagnostics_carry_the_path() {
    let (mut session, writer) = session();
    assert_eq!(session.eval_file("demo.calc", "1 +\n2 / 0"), None);
    assert_eq!(writer.contents(), "error:demo.calc:2:3: division by zero\n");
}

#[test]
fn test_file_evaluates_across_lines() {
    let (mut session, writer) = session();
    assert_eq!(session.eval_file("sum.calc", "1 +\n2 +\n3\n"), Some(6));
    assert_eq!(writer.contents(), "");
}

#[test]
fn test_reset_between_lines() {
    let (mut session, _) = session();
    assert_eq!(session.eval_line("1 / 0"), None);
    assert_eq!(session.error_count(), 1);
    session.reset();
    assert_eq!(session.error_count(), 0);
    assert_eq!(session.eval_line("1 + 1"), Some(2));
}
