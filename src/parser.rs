//! Recursive-descent parser with panic-mode recovery.

use std::rc::Rc;

use crate::ast::{Expr, ExprId, FunctionDecl, Stmt};
use crate::diag::Reporter;
use crate::token::{Literal, Token, TokenKind};

/// Sentinel unwound to the nearest declaration boundary; the diagnostic has
/// already been reported by the time this is raised.
struct ParseError;

type ParseResult<T> = Result<T, ParseError>;

pub struct Parser<'r> {
    tokens: Vec<Token>,
    current: usize,
    next_id: ExprId,
    reporter: &'r mut Reporter,
}

impl<'r> Parser<'r> {
    /// `first_id` is the first free AST node id; the caller keeps the counter
    /// so ids stay unique across successive parses feeding one evaluator.
    pub fn new(tokens: Vec<Token>, first_id: ExprId, reporter: &'r mut Reporter) -> Parser<'r> {
        Parser {
            tokens,
            current: 0,
            next_id: first_id,
            reporter,
        }
    }

    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut statements = vec![];
        while !self.is_at_end() {
            statements.push(self.declaration());
        }
        statements
    }

    /// The next free node id after parsing.
    pub fn next_id(&self) -> ExprId {
        self.next_id
    }

    fn declaration(&mut self) -> Stmt {
        let result = if self.matches(&[TokenKind::Var]) {
            self.var_declaration()
        } else if self.matches(&[TokenKind::Fun]) {
            self.fun_declaration()
        } else if self.matches(&[TokenKind::Class]) {
            self.class_declaration()
        } else {
            self.statement()
        };
        match result {
            Ok(stmt) => stmt,
            Err(ParseError) => {
                self.synchronize();
                Stmt::Nop
            }
        }
    }

    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;
        let initializer = if self.matches(&[TokenKind::Equal]) {
            Some(Box::new(self.expression()?))
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var(name, initializer))
    }

    fn fun_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;
        let mut params = vec![];
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= 255 {
                    // Non-fatal, parsing proceeds.
                    let token = self.peek().clone();
                    self.reporter
                        .error_at(&token, "Can't have more than 255 parameters.");
                }
                params.push(self.consume(TokenKind::Identifier, "Expect parameter name.")?);
                if !self.matches(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.block()?;
        Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body })))
    }

    fn class_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect class name.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before class body.")?;
        self.consume(TokenKind::RightBrace, "Expect '}' after class body.")?;
        Ok(Stmt::Class(name))
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        if self.matches(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.matches(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.matches(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.matches(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.matches(&[TokenKind::Return]) {
            return self.return_statement();
        }
        if self.matches(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(Box::new(value)))
    }

    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;
        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.matches(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Stmt::If(Box::new(condition), then_branch, else_branch))
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = self.statement()?;
        Ok(Stmt::While(Box::new(condition), Box::new(body)))
    }

    /// `for` is desugared into an equivalent `while` during parsing.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.matches(&[TokenKind::Semicolon]) {
            None
        } else if self.matches(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(TokenKind::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if !self.check(TokenKind::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expr(Box::new(increment))]);
        }

        let condition = condition.unwrap_or(Expr::Bool(true));
        body = Stmt::While(Box::new(condition), Box::new(body));

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();
        let value = if !self.check(TokenKind::Semicolon) {
            Some(Box::new(self.expression()?))
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return(keyword, value))
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expr(Box::new(expr)))
    }

    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = vec![];
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.declaration());
        }
        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if self.matches(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable(_, name) = expr {
                return Ok(Expr::Assign(self.make_id(), name, Box::new(value)));
            }

            // Reported without unwinding; the right-hand side is discarded.
            self.reporter.error_at(&equals, "Invalid assignment target.");
        }

        Ok(expr)
    }

    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;
        while self.matches(&[TokenKind::Or]) {
            let op = self.previous().clone();
            let right = self.and()?;
            expr = Expr::Logical(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;
        while self.matches(&[TokenKind::And]) {
            let op = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;
        while self.matches(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let op = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;
        while self.matches(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let op = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;
        while self.matches(&[TokenKind::Minus, TokenKind::Plus]) {
            let op = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;
        while self.matches(&[TokenKind::Slash, TokenKind::Star]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary(Box::new(expr), op, Box::new(right));
        }
        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::Bang, TokenKind::Minus]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary(op, Box::new(right)));
        }
        self.call()
    }

    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        while self.matches(&[TokenKind::LeftParen]) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments = vec![];
        if !self.check(TokenKind::RightParen) {
            loop {
                if arguments.len() >= 255 {
                    let token = self.peek().clone();
                    self.reporter
                        .error_at(&token, "Can't have more than 255 arguments.");
                }
                arguments.push(self.expression()?);
                if !self.matches(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;
        Ok(Expr::Call(Box::new(callee), paren, arguments))
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::False]) {
            return Ok(Expr::Bool(false));
        }
        if self.matches(&[TokenKind::True]) {
            return Ok(Expr::Bool(true));
        }
        if self.matches(&[TokenKind::Nil]) {
            return Ok(Expr::Nil);
        }
        if self.matches(&[TokenKind::Number]) {
            let token = self.previous().clone();
            return match token.literal {
                Some(Literal::Number(n)) => Ok(Expr::Number(n)),
                _ => Err(self.error(&token, "Expect expression.")),
            };
        }
        if self.matches(&[TokenKind::Str]) {
            let token = self.previous().clone();
            return match token.literal {
                Some(Literal::Str(s)) => Ok(Expr::Str(s)),
                _ => Err(self.error(&token, "Expect expression.")),
            };
        }
        if self.matches(&[TokenKind::Identifier]) {
            let name = self.previous().clone();
            return Ok(Expr::Variable(self.make_id(), name));
        }
        if self.matches(&[TokenKind::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        let token = self.peek().clone();
        Err(self.error(&token, "Expect expression."))
    }

    /// Discard tokens until a likely statement boundary.
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => (),
            }
            self.advance();
        }
    }

    fn make_id(&mut self) -> ExprId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }
        let token = self.peek().clone();
        Err(self.error(&token, message))
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn error(&mut self, token: &Token, message: &str) -> ParseError {
        self.reporter.error_at(token, message);
        ParseError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Scanner;

    fn parse(input: &str) -> (Vec<Stmt>, Vec<String>) {
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(input, &mut reporter).scan_tokens();
        let mut parser = Parser::new(tokens, 0, &mut reporter);
        let program = parser.parse();
        (program, reporter.take_diagnostics())
    }

    fn parse_ok(input: &str) -> Vec<Stmt> {
        let (program, diags) = parse(input);
        assert!(diags.is_empty(), "unexpected diagnostics: {:?}", diags);
        program
    }

    fn parse_expr(input: &str) -> Expr {
        let program = parse_ok(&format!("{};", input));
        match program.into_iter().next() {
            Some(Stmt::Expr(e)) => *e,
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn literals() {
        assert_eq!(parse_expr("42"), Expr::Number(42.0));
        assert_eq!(parse_expr("true"), Expr::Bool(true));
        assert_eq!(parse_expr("false"), Expr::Bool(false));
        assert_eq!(parse_expr("nil"), Expr::Nil);
        assert_eq!(parse_expr("\"hi\""), Expr::Str("hi".to_string()));
    }

    #[test]
    fn unary_is_right_associative() {
        match parse_expr("--1") {
            Expr::Unary(op, inner) => {
                assert_eq!(op.kind, TokenKind::Minus);
                assert!(matches!(*inner, Expr::Unary(_, _)));
            }
            e => panic!("unexpected expression: {:?}", e),
        }
    }

    #[test]
    fn addition_is_left_associative() {
        match parse_expr("1 + 2 + 3") {
            Expr::Binary(left, op, right) => {
                assert_eq!(op.kind, TokenKind::Plus);
                assert!(matches!(*left, Expr::Binary(_, _, _)));
                assert_eq!(*right, Expr::Number(3.0));
            }
            e => panic!("unexpected expression: {:?}", e),
        }
    }

    #[test]
    fn factors_have_precedence_over_terms() {
        match parse_expr("1 + 2 * 3") {
            Expr::Binary(left, op, right) => {
                assert_eq!(op.kind, TokenKind::Plus);
                assert_eq!(*left, Expr::Number(1.0));
                assert!(matches!(*right, Expr::Binary(_, _, _)));
            }
            e => panic!("unexpected expression: {:?}", e),
        }
    }

    #[test]
    fn comparison_binds_tighter_than_equality() {
        match parse_expr("1 < 2 == true") {
            Expr::Binary(left, op, _) => {
                assert_eq!(op.kind, TokenKind::EqualEqual);
                match *left {
                    Expr::Binary(_, inner_op, _) => assert_eq!(inner_op.kind, TokenKind::Less),
                    e => panic!("unexpected expression: {:?}", e),
                }
            }
            e => panic!("unexpected expression: {:?}", e),
        }
    }

    #[test]
    fn logical_operators_become_logical_nodes() {
        match parse_expr("a or b and c") {
            Expr::Logical(_, op, right) => {
                assert_eq!(op.kind, TokenKind::Or);
                match *right {
                    Expr::Logical(_, inner_op, _) => assert_eq!(inner_op.kind, TokenKind::And),
                    e => panic!("unexpected expression: {:?}", e),
                }
            }
            e => panic!("unexpected expression: {:?}", e),
        }
    }

    #[test]
    fn grouping() {
        match parse_expr("1 * (2 + 3)") {
            Expr::Binary(_, op, right) => {
                assert_eq!(op.kind, TokenKind::Star);
                assert!(matches!(*right, Expr::Grouping(_)));
            }
            e => panic!("unexpected expression: {:?}", e),
        }
    }

    #[test]
    fn assignment_is_right_associative() {
        match parse_expr("a = b = 1") {
            Expr::Assign(_, name, value) => {
                assert_eq!(name.lexeme, "a");
                assert!(matches!(*value, Expr::Assign(_, _, _)));
            }
            e => panic!("unexpected expression: {:?}", e),
        }
    }

    #[test]
    fn invalid_assignment_target_is_reported_without_unwinding() {
        let (program, diags) = parse("1 + 2 = 3;");
        assert_eq!(diags, vec!["[line 1] Error at '=': Invalid assignment target."]);
        // The left-hand expression survives as the statement.
        assert!(matches!(program[0], Stmt::Expr(_)));
    }

    #[test]
    fn var_declarations() {
        let program = parse_ok("var foo; var bar = 2;");
        match &program[0] {
            Stmt::Var(name, init) => {
                assert_eq!(name.lexeme, "foo");
                assert!(init.is_none());
            }
            s => panic!("unexpected statement: {:?}", s),
        }
        match &program[1] {
            Stmt::Var(name, Some(init)) => {
                assert_eq!(name.lexeme, "bar");
                assert_eq!(**init, Expr::Number(2.0));
            }
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn block_statement() {
        let program = parse_ok("{ 1; 2; }");
        match &program[0] {
            Stmt::Block(stmts) => assert_eq!(stmts.len(), 2),
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn if_else() {
        let program = parse_ok("if (true) 1; else 2;");
        match &program[0] {
            Stmt::If(cond, _, else_branch) => {
                assert_eq!(**cond, Expr::Bool(true));
                assert!(else_branch.is_some());
            }
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn dangling_else_binds_to_nearest_if() {
        let program = parse_ok("if (a) if (b) 1; else 2;");
        match &program[0] {
            Stmt::If(_, then_branch, else_branch) => {
                assert!(else_branch.is_none());
                assert!(matches!(**then_branch, Stmt::If(_, _, Some(_))));
            }
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn while_statement() {
        let program = parse_ok("while (true) 1;");
        assert!(matches!(program[0], Stmt::While(_, _)));
    }

    #[test]
    fn for_desugars_to_while_in_a_block() {
        let program = parse_ok("for (var i = 0; i < 3; i = i + 1) print i;");
        match &program[0] {
            Stmt::Block(stmts) => {
                assert_eq!(stmts.len(), 2);
                assert!(matches!(stmts[0], Stmt::Var(_, _)));
                match &stmts[1] {
                    Stmt::While(_, body) => match &**body {
                        // Loop body plus the appended increment.
                        Stmt::Block(inner) => {
                            assert_eq!(inner.len(), 2);
                            assert!(matches!(inner[0], Stmt::Print(_)));
                            assert!(matches!(inner[1], Stmt::Expr(_)));
                        }
                        s => panic!("unexpected statement: {:?}", s),
                    },
                    s => panic!("unexpected statement: {:?}", s),
                }
            }
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn for_with_all_clauses_empty_is_a_bare_while_true() {
        let program = parse_ok("for (;;) print 1;");
        match &program[0] {
            Stmt::While(cond, body) => {
                assert_eq!(**cond, Expr::Bool(true));
                assert!(matches!(**body, Stmt::Print(_)));
            }
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn return_statements() {
        let program = parse_ok("return; return 1;");
        assert!(matches!(&program[0], Stmt::Return(_, None)));
        assert!(matches!(&program[1], Stmt::Return(_, Some(_))));
    }

    #[test]
    fn function_declaration() {
        let program = parse_ok("fun add(a, b) { return a + b; }");
        match &program[0] {
            Stmt::Function(decl) => {
                assert_eq!(decl.name.lexeme, "add");
                assert_eq!(decl.params.len(), 2);
                assert_eq!(decl.body.len(), 1);
            }
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn class_declaration() {
        let program = parse_ok("class Counter {}");
        match &program[0] {
            Stmt::Class(name) => assert_eq!(name.lexeme, "Counter"),
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn call_chains() {
        match parse_expr("f(1)(2, 3)") {
            Expr::Call(callee, _, args) => {
                assert_eq!(args.len(), 2);
                assert!(matches!(*callee, Expr::Call(_, _, _)));
            }
            e => panic!("unexpected expression: {:?}", e),
        }
    }

    #[test]
    fn variable_and_assign_nodes_get_distinct_ids() {
        let expr = parse_expr("a = a");
        match expr {
            Expr::Assign(assign_id, _, value) => match *value {
                Expr::Variable(var_id, _) => assert_ne!(assign_id, var_id),
                e => panic!("unexpected expression: {:?}", e),
            },
            e => panic!("unexpected expression: {:?}", e),
        }
    }

    #[test]
    fn missing_semicolon_is_reported() {
        let (_, diags) = parse("print 1");
        assert_eq!(diags, vec!["[line 1] Error at end: Expect ';' after value."]);
    }

    #[test]
    fn recovery_resumes_at_next_statement() {
        let (program, diags) = parse("var = 1;\nprint 2;");
        assert_eq!(diags, vec!["[line 1] Error at '=': Expect variable name."]);
        // The failed declaration leaves a placeholder; the next one parses.
        assert_eq!(program.len(), 2);
        assert_eq!(program[0], Stmt::Nop);
        assert!(matches!(program[1], Stmt::Print(_)));
    }

    #[test]
    fn recovery_inside_block_keeps_later_statements() {
        let (program, diags) = parse("{ 1 + ; print 2; }");
        assert_eq!(diags.len(), 1);
        match &program[0] {
            Stmt::Block(stmts) => {
                assert_eq!(stmts[0], Stmt::Nop);
                assert!(matches!(stmts[1], Stmt::Print(_)));
            }
            s => panic!("unexpected statement: {:?}", s),
        }
    }

    #[test]
    fn too_many_arguments_is_reported_but_parsing_proceeds() {
        let args = (0..256).map(|i| i.to_string()).collect::<Vec<_>>().join(", ");
        let (program, diags) = parse(&format!("f({});", args));
        assert_eq!(
            diags,
            vec!["[line 1] Error at '255': Can't have more than 255 arguments."]
        );
        match &program[0] {
            Stmt::Expr(e) => match &**e {
                Expr::Call(_, _, arguments) => assert_eq!(arguments.len(), 256),
                e => panic!("unexpected expression: {:?}", e),
            },
            s => panic!("unexpected statement: {:?}", s),
        }
    }
}
