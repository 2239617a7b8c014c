//! Static resolution of identifier references to lexical scope depths.
//!
//! A single pass over the statements after parsing.  Each `Variable` and
//! `Assign` node is bound to the number of enclosing environments between the
//! evaluation-time environment and the frame declaring the name; names that
//! never match a tracked scope are left to the globals frame at runtime.

use std::collections::HashMap;

use crate::ast::{Expr, ExprId, FunctionDecl, Stmt};
use crate::diag::Reporter;
use crate::token::Token;

pub struct Resolver<'r> {
    // Innermost scope last.  The flag is false between declaration and
    // definition, while the initializer is being resolved.
    scopes: Vec<HashMap<String, bool>>,
    locals: HashMap<ExprId, usize>,
    reporter: &'r mut Reporter,
}

impl<'r> Resolver<'r> {
    pub fn new(reporter: &'r mut Reporter) -> Resolver<'r> {
        Resolver {
            scopes: vec![],
            locals: HashMap::new(),
            reporter,
        }
    }

    /// Resolve `statements` and return the side-table of scope depths.
    pub fn resolve(mut self, statements: &[Stmt]) -> HashMap<ExprId, usize> {
        self.resolve_stmts(statements);
        self.locals
    }

    fn resolve_stmts(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn resolve_stmt(&mut self, statement: &Stmt) {
        match statement {
            Stmt::Nop => (),
            Stmt::Expr(expr) | Stmt::Print(expr) => self.resolve_expr(expr),
            Stmt::Var(name, initializer) => {
                self.declare(name);
                if let Some(initializer) = initializer {
                    self.resolve_expr(initializer);
                }
                self.define(name);
            }
            Stmt::Block(statements) => {
                self.begin_scope();
                self.resolve_stmts(statements);
                self.end_scope();
            }
            Stmt::If(condition, then_branch, else_branch) => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            Stmt::While(condition, body) => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }
            Stmt::Function(decl) => {
                // The name is usable inside the body, allowing recursion.
                self.declare(&decl.name);
                self.define(&decl.name);
                self.resolve_function(decl);
            }
            Stmt::Return(_, value) => {
                if let Some(value) = value {
                    self.resolve_expr(value);
                }
            }
            Stmt::Class(name) => {
                self.declare(name);
                self.define(name);
            }
        }
    }

    fn resolve_function(&mut self, decl: &FunctionDecl) {
        // One scope holds both the parameters and the body, matching the
        // single environment a call creates.
        self.begin_scope();
        for param in &decl.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve_stmts(&decl.body);
        self.end_scope();
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Nil | Expr::Bool(_) | Expr::Number(_) | Expr::Str(_) => (),
            Expr::Grouping(inner) => self.resolve_expr(inner),
            Expr::Unary(_, right) => self.resolve_expr(right),
            Expr::Binary(left, _, right) | Expr::Logical(left, _, right) => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            Expr::Variable(id, name) => {
                if let Some(scope) = self.scopes.last() {
                    if scope.get(&name.lexeme) == Some(&false) {
                        self.reporter
                            .error_at(name, "Can't read local variable in its own initializer.");
                    }
                }
                self.resolve_local(*id, name);
            }
            Expr::Assign(id, name, value) => {
                self.resolve_expr(value);
                self.resolve_local(*id, name);
            }
            Expr::Call(callee, _, arguments) => {
                self.resolve_expr(callee);
                for argument in arguments {
                    self.resolve_expr(argument);
                }
            }
        }
    }

    fn resolve_local(&mut self, id: ExprId, name: &Token) {
        for (index, scope) in self.scopes.iter().enumerate().rev() {
            if scope.contains_key(&name.lexeme) {
                self.locals.insert(id, self.scopes.len() - 1 - index);
                return;
            }
        }
        // Not found: left for the globals frame.
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            if scope.contains_key(&name.lexeme) {
                self.reporter
                    .error_at(name, "Already a variable with this name in this scope.");
            }
            scope.insert(name.lexeme.clone(), false);
        }
    }

    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), true);
        }
    }
}
