//! Diagnostic collection and formatting.

use crate::token::{Token, TokenKind};

/// Line number (starting at one).
pub type Position = u32;

/// Collects formatted diagnostics for the current run and tracks whether any
/// static or runtime error occurred.
///
/// The scanner, parser, and resolver report here as soon as a problem is
/// detected; the facade reports runtime errors after evaluation unwinds.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<String>,
    had_error: bool,
    had_runtime_error: bool,
}

impl Reporter {
    pub fn new() -> Reporter {
        Reporter::default()
    }

    /// Report a lexical error at `line`.
    pub fn error(&mut self, line: Position, message: &str) {
        self.diagnostics.push(format!("[line {}] Error: {}", line, message));
        self.had_error = true;
    }

    /// Report a parse or resolve error at `token`.
    pub fn error_at(&mut self, token: &Token, message: &str) {
        let diag = if token.kind == TokenKind::Eof {
            format!("[line {}] Error at end: {}", token.line, message)
        } else {
            format!("[line {}] Error at '{}': {}", token.line, token.lexeme, message)
        };
        self.diagnostics.push(diag);
        self.had_error = true;
    }

    /// Report a runtime error. `line` is absent only for host I/O failures,
    /// which carry no source location.
    pub fn runtime_error(&mut self, line: Option<Position>, message: &str) {
        let diag = match line {
            Some(line) => format!("{}\n[line {}]", message, line),
            None => message.to_string(),
        };
        self.diagnostics.push(diag);
        self.had_runtime_error = true;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clear the flags at the start of a run so one bad REPL line does not
    /// poison the next.
    pub fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }

    /// Hand over the diagnostics accumulated so far.
    pub fn take_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, lexeme: &str, line: Position) -> Token {
        Token::new(kind, lexeme.to_string(), None, line)
    }

    #[test]
    fn lex_error_format() {
        let mut reporter = Reporter::new();
        reporter.error(3, "Unexpected character.");
        assert_eq!(reporter.take_diagnostics(), vec!["[line 3] Error: Unexpected character."]);
        assert!(reporter.had_error());
        assert!(!reporter.had_runtime_error());
    }

    #[test]
    fn parse_error_at_token_format() {
        let mut reporter = Reporter::new();
        reporter.error_at(&token(TokenKind::Plus, "+", 7), "Expect expression.");
        assert_eq!(
            reporter.take_diagnostics(),
            vec!["[line 7] Error at '+': Expect expression."]
        );
    }

    #[test]
    fn parse_error_at_eof_format() {
        let mut reporter = Reporter::new();
        reporter.error_at(&token(TokenKind::Eof, "", 2), "Expect ';' after value.");
        assert_eq!(
            reporter.take_diagnostics(),
            vec!["[line 2] Error at end: Expect ';' after value."]
        );
    }

    #[test]
    fn runtime_error_format() {
        let mut reporter = Reporter::new();
        reporter.runtime_error(Some(5), "Operands must be numbers.");
        assert_eq!(reporter.take_diagnostics(), vec!["Operands must be numbers.\n[line 5]"]);
        assert!(reporter.had_runtime_error());
        assert!(!reporter.had_error());
    }

    #[test]
    fn reset_clears_flags_but_take_drains_diagnostics() {
        let mut reporter = Reporter::new();
        reporter.error(1, "Unexpected character.");
        reporter.reset();
        assert!(!reporter.had_error());
        assert_eq!(reporter.take_diagnostics().len(), 1);
        assert!(reporter.take_diagnostics().is_empty());
    }
}
