//! calc command line interface.
//!
//! With no arguments calc is a REPL reading one expression per line;
//! with a file argument the file's whole text is evaluated as a single
//! expression.

use std::io::{self, BufRead, Write};
use std::sync::Once;

use calc::Session;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing with hierarchical output (idempotent).
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => repl(),
        Some("help" | "--help" | "-h") => print_usage(),
        Some("version" | "--version" | "-V") => {
            println!("calc {}", env!("CARGO_PKG_VERSION"));
        }
        Some(option) if option.starts_with('-') => {
            eprintln!("Unknown option: {option}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
        Some(path) => {
            if args.len() > 2 {
                eprintln!("error: expected a single file argument");
                std::process::exit(1);
            }
            run_file(path);
        }
    }
}

/// Reads expressions from standard input, one per line.
fn repl() {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match session.eval_line(line) {
            Some(value) => println!("{value}"),
            None => session.reset(),
        }
    }
}

/// Evaluates the whole of `path` as one expression.
fn run_file(path: &str) {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            std::process::exit(1);
        }
    };

    let mut session = Session::new();
    match session.eval_file(path, &text) {
        Some(value) => println!("{value}"),
        None => {
            if session.error_count() == 0 {
                eprintln!("error: '{path}' contains no expression");
            }
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("A line-oriented arithmetic calculator");
    println!();
    println!("Usage: calc [file]");
    println!();
    println!("With no arguments, calc reads one expression per line from");
    println!("standard input and prints each value. With a file argument,");
    println!("the file's whole text is evaluated as a single expression.");
    println!();
    println!("Options:");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
    println!();
    println!("Expressions use decimal integers, prefix + -, parentheses,");
    println!("and the operators + - * / % and ** (right-associative).");
    println!();
    println!("Environment:");
    println!("  RUST_LOG         Tracing filter, e.g. RUST_LOG=calc=debug");
}
