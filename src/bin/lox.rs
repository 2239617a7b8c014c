//! Lox interpreter command-line.
//!
//! When called without argument it drops into an interactive
//! read-evaluate-print loop; errors are shown but never end the session.
//!
//! When called with a script path it runs the file once and exits 65 after
//! static errors, 70 after a runtime error, and 0 otherwise.

use std::env;
use std::fs;
use std::io;
use std::io::prelude::*;
use std::process;

use anyhow::{self, Context};

use lox::interpreter::{Interpreter, RunStatus};

fn main() -> Result<(), anyhow::Error> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.len() > 1 {
        eprintln!("Usage: lox [script]");
        process::exit(64);
    }

    let status = match args.first() {
        Some(path) => run_file(path)?,
        None => run_prompt()?,
    };

    match status {
        RunStatus::Ok => Ok(()),
        RunStatus::StaticError => process::exit(65),
        RunStatus::RuntimeError => process::exit(70),
    }
}

fn run_file(path: &str) -> Result<RunStatus, anyhow::Error> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;

    let mut stdout = io::stdout();
    let mut interp = Interpreter::new(&mut stdout);
    let status = interp.run(&source);
    for diag in interp.take_diagnostics() {
        eprintln!("{}", diag);
    }

    drop(interp);
    io::stdout().flush()?;
    Ok(status)
}

fn run_prompt() -> Result<RunStatus, anyhow::Error> {
    let stdin = io::stdin();
    let mut repl_stdout = io::stdout();
    let mut interp_stdout = io::stdout();

    let mut interp = Interpreter::new(&mut interp_stdout);

    let mut input = String::new();
    loop {
        repl_stdout.write_all(b"> ")?;
        repl_stdout.flush()?;

        input.clear();
        let nbytes = stdin.read_line(&mut input)?;
        if nbytes == 0 {
            break;
        }

        // Flags reset on every run, so one bad line does not end the session.
        interp.run(&input);
        for diag in interp.take_diagnostics() {
            eprintln!("{}", diag);
        }
    }

    Ok(RunStatus::Ok)
}
