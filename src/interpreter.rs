//! API to control the interpreter.

use std::io::prelude::*;

use crate::ast::ExprId;
use crate::diag::Reporter;
use crate::eval::Evaluator;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::Scanner;

/// Tree-walk interpreter driving the whole pipeline: scan, parse, resolve,
/// evaluate.
///
/// State persists across `run` calls, so an interactive session can define a
/// function on one line and call it on the next.
///
/// # Example
///
/// ```
/// use lox::interpreter::{Interpreter, RunStatus};
///
/// let mut output: Vec<u8> = Vec::new();
/// let mut interp = Interpreter::new(&mut output);
///
/// let counter_def = r#"
///     fun makeCounter() {
///         var n = 0;
///         fun count() {
///             n = n + 1;
///             print n;
///         }
///         return count;
///     }
///     var count = makeCounter();
/// "#;
/// assert_eq!(interp.run(counter_def), RunStatus::Ok);
///
/// assert_eq!(interp.run("count();"), RunStatus::Ok);
/// assert_eq!(interp.run("count();"), RunStatus::Ok);
///
/// assert_eq!(output, b"1\n2\n");
/// ```
#[derive(Debug)]
pub struct Interpreter<'t, W: Write> {
    evaluator: Evaluator<'t, W>,
    reporter: Reporter,
    next_id: ExprId,
}

/// How a `run` ended; in batch mode this decides the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    /// A scan, parse, or resolve error; evaluation never started.
    StaticError,
    /// Evaluation started and was aborted by a runtime error.
    RuntimeError,
}

impl<'t, W: Write> Interpreter<'t, W> {
    /// Creates an interpreter writing program output to `output`.
    pub fn new(output: &'t mut W) -> Interpreter<'t, W> {
        Interpreter {
            evaluator: Evaluator::new(output),
            reporter: Reporter::new(),
            next_id: 0,
        }
    }

    /// Run `source` through the full pipeline.
    ///
    /// Error flags are reset on entry; any static error skips evaluation.
    /// Diagnostics are collected and available via [`take_diagnostics`].
    ///
    /// [`take_diagnostics`]: Interpreter::take_diagnostics
    pub fn run(&mut self, source: &str) -> RunStatus {
        self.reporter.reset();

        let tokens = Scanner::new(source, &mut self.reporter).scan_tokens();

        let mut parser = Parser::new(tokens, self.next_id, &mut self.reporter);
        let program = parser.parse();
        self.next_id = parser.next_id();
        if self.reporter.had_error() {
            return RunStatus::StaticError;
        }

        let locals = Resolver::new(&mut self.reporter).resolve(&program);
        if self.reporter.had_error() {
            return RunStatus::StaticError;
        }
        self.evaluator.add_locals(locals);

        if let Err(e) = self.evaluator.interpret(&program) {
            self.reporter.runtime_error(e.line(), &e.to_string());
        }
        if self.reporter.had_runtime_error() {
            return RunStatus::RuntimeError;
        }
        RunStatus::Ok
    }

    /// Hand over the diagnostics accumulated by runs since the last call.
    pub fn take_diagnostics(&mut self) -> Vec<String> {
        self.reporter.take_diagnostics()
    }
}
