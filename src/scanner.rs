//! Lexical analyzer

use crate::diag::{Position, Reporter};
use crate::token::{self, Literal, Token, TokenKind};

/// Turn source text into a sequence of tokens.
///
/// The scanner never aborts: lexical errors are reported and scanning resumes
/// at the next character, so a complete token stream (terminated by `Eof`) is
/// produced even for bad input.
pub struct Scanner<'s, 'r> {
    source: &'s str,
    start: usize,
    current: usize,
    line: Position,
    tokens: Vec<Token>,
    reporter: &'r mut Reporter,
}

impl<'s, 'r> Scanner<'s, 'r> {
    /// Creates a new scanner operating on `source`.
    pub fn new(source: &'s str, reporter: &'r mut Reporter) -> Scanner<'s, 'r> {
        Scanner {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: vec![],
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), None, self.line));
        self.tokens
    }

    fn scan_token(&mut self) {
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return,
        };
        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.matches('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.matches('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.matches('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.matches('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.matches('/') {
                    // Line comment, discarded up to the newline.
                    while self.peek().map_or(false, |c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\t' | '\r' => (),
            '\n' => self.line += 1,
            '"' => self.string(),
            '0'..='9' => self.number(),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),
            _ => self.reporter.error(self.line, "Unexpected character."),
        }
    }

    fn string(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.reporter.error(self.line, "Unterminated string.");
            return;
        }

        // The closing quote.
        self.advance();

        let contents = self.source[self.start + 1..self.current - 1].to_string();
        self.add_literal(TokenKind::Str, Literal::Str(contents));
    }

    fn number(&mut self) {
        while self.peek().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        // A fractional part only if the dot is followed by a digit.
        if self.peek() == Some('.') && self.peek_next().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        match self.source[self.start..self.current].parse::<f64>() {
            Ok(n) => self.add_literal(TokenKind::Number, Literal::Number(n)),
            Err(_) => self.reporter.error(self.line, "Unexpected character."),
        }
    }

    fn identifier(&mut self) {
        while self
            .peek()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let name = &self.source[self.start..self.current];
        let kind = token::keyword(name).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.source[self.current..].chars().next()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    /// Consume the next character iff it is `expected`.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.add(kind, Some(literal));
    }

    fn add(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.source[self.start..self.current].to_string();
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }
}
