use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::io;
use std::io::prelude::*;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ast::{Expr, ExprId, FunctionDecl, Stmt};
use crate::diag::Position;
use crate::token::{Token, TokenKind};

#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
    Function(Function),
    Class(Rc<LoxClass>),
    Instance(Rc<Instance>),
}

#[derive(Clone)]
pub struct Function {
    name: String,
    arity: usize,
    body: FunctionBody,
}

#[derive(Clone)]
enum FunctionBody {
    Native(fn(&[Value]) -> Value),
    User(Rc<FunctionDecl>, Rc<Env>),
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

#[derive(Debug, PartialEq)]
pub struct LoxClass {
    name: String,
}

#[derive(Debug)]
pub struct Instance {
    class: Rc<LoxClass>,
}

impl Value {
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(l), Value::Bool(r)) => l == r,
            (Value::Number(l), Value::Number(r)) => l == r,
            (Value::Str(l), Value::Str(r)) => l == r,
            (Value::Function(l), Value::Function(r)) => l.is_identical(r),
            (Value::Class(l), Value::Class(r)) => Rc::ptr_eq(l, r),
            (Value::Instance(l), Value::Instance(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl Function {
    // Callables compare by identity, never by structure.
    fn is_identical(&self, other: &Function) -> bool {
        match (&self.body, &other.body) {
            (FunctionBody::Native(l), FunctionBody::Native(r)) => l == r,
            (FunctionBody::User(l_decl, l_env), FunctionBody::User(r_decl, r_env)) => {
                Rc::ptr_eq(l_decl, r_decl) && Rc::ptr_eq(l_env, r_env)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Function(func) => match func.body {
                FunctionBody::Native(_) => write!(f, "<native fn>"),
                FunctionBody::User(..) => write!(f, "<fn {}>", func.name),
            },
            Value::Class(class) => write!(f, "{}", class.name),
            Value::Instance(instance) => write!(f, "{} instance", instance.class.name),
        }
    }
}

#[derive(Debug)]
pub enum RuntimeError {
    OperandMustBeNumber(Position),
    OperandsMustBeNumbers(Position),
    AddOperands(Position),
    UndefinedVariable(String, Position),
    NotCallable(Position),
    Arity {
        expected: usize,
        got: usize,
        line: Position,
    },
    Io(io::Error),
}

impl RuntimeError {
    /// Source line to report, absent for host I/O failures.
    pub fn line(&self) -> Option<Position> {
        match self {
            RuntimeError::OperandMustBeNumber(line)
            | RuntimeError::OperandsMustBeNumbers(line)
            | RuntimeError::AddOperands(line)
            | RuntimeError::UndefinedVariable(_, line)
            | RuntimeError::NotCallable(line)
            | RuntimeError::Arity { line, .. } => Some(*line),
            RuntimeError::Io(_) => None,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::OperandMustBeNumber(_) => write!(f, "Operand must be a number."),
            RuntimeError::OperandsMustBeNumbers(_) => write!(f, "Operands must be numbers."),
            RuntimeError::AddOperands(_) => {
                write!(f, "Operands must be two numbers or two strings.")
            }
            RuntimeError::UndefinedVariable(name, _) => {
                write!(f, "Undefined variable '{}'.", name)
            }
            RuntimeError::NotCallable(_) => write!(f, "Can only call functions and classes."),
            RuntimeError::Arity { expected, got, .. } => {
                write!(f, "Expected {} arguments but got {}.", expected, got)
            }
            RuntimeError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for RuntimeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RuntimeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> RuntimeError {
        RuntimeError::Io(e)
    }
}

/// One lexical frame: bindings plus the enclosing frame.
///
/// Frames are shared (`Rc`) because a closure's captured environment can
/// outlive the scope that created it and be referenced by several callables
/// at once.
#[derive(Debug)]
struct Env {
    parent: Option<Rc<Env>>,
    bindings: RefCell<HashMap<String, Value>>,
}

impl Env {
    fn new() -> Rc<Env> {
        Rc::new(Env {
            parent: None,
            bindings: RefCell::new(HashMap::new()),
        })
    }

    fn with_parent(parent: Rc<Env>) -> Rc<Env> {
        Rc::new(Env {
            parent: Some(parent),
            bindings: RefCell::new(HashMap::new()),
        })
    }

    /// Create or overwrite a binding in this frame.
    fn define(&self, name: &str, value: Value) {
        self.bindings.borrow_mut().insert(name.to_string(), value);
    }

    fn define_native(&self, name: &str, arity: usize, body: fn(&[Value]) -> Value) {
        self.define(
            name,
            Value::Function(Function {
                name: name.to_string(),
                arity,
                body: FunctionBody::Native(body),
            }),
        );
    }

    /// Read a binding, walking the chain outward.
    fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        if let Some(value) = self.bindings.borrow().get(&name.lexeme) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.get(name),
            None => Err(RuntimeError::UndefinedVariable(
                name.lexeme.clone(),
                name.line,
            )),
        }
    }

    /// Rewrite an existing binding, walking the chain outward.
    fn assign(&self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        let mut bindings = self.bindings.borrow_mut();
        if let Some(slot) = bindings.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }
        drop(bindings);
        match &self.parent {
            Some(parent) => parent.assign(name, value),
            None => Err(RuntimeError::UndefinedVariable(
                name.lexeme.clone(),
                name.line,
            )),
        }
    }

    /// Read in the frame exactly `distance` parent links away.
    fn get_at(&self, distance: usize, name: &Token) -> Result<Value, RuntimeError> {
        match (distance, &self.parent) {
            (0, _) => self
                .bindings
                .borrow()
                .get(&name.lexeme)
                .cloned()
                .ok_or_else(|| RuntimeError::UndefinedVariable(name.lexeme.clone(), name.line)),
            (_, Some(parent)) => parent.get_at(distance - 1, name),
            (_, None) => Err(RuntimeError::UndefinedVariable(
                name.lexeme.clone(),
                name.line,
            )),
        }
    }

    /// Rewrite in the frame exactly `distance` parent links away.
    fn assign_at(&self, distance: usize, name: &Token, value: Value) -> Result<(), RuntimeError> {
        match (distance, &self.parent) {
            (0, _) => {
                self.define(&name.lexeme, value);
                Ok(())
            }
            (_, Some(parent)) => parent.assign_at(distance - 1, name, value),
            (_, None) => Err(RuntimeError::UndefinedVariable(
                name.lexeme.clone(),
                name.line,
            )),
        }
    }

    fn is_global(&self) -> bool {
        self.parent.is_none()
    }
}

/// Walks the AST, writing `print` output to the supplied sink.
#[derive(Debug)]
pub struct Evaluator<'t, W: Write> {
    output: &'t mut W,
    globals: Rc<Env>,
    locals: HashMap<ExprId, usize>,
    // Return value travelling up to the nearest call frame.  While it is set
    // no further statements execute.
    is_returning: Option<Value>,
}

impl<'t, W: Write> Evaluator<'t, W> {
    pub fn new(output: &'t mut W) -> Evaluator<'t, W> {
        let globals = Env::new();
        globals.define_native("clock", 0, native_clock);
        Evaluator {
            output,
            globals,
            locals: HashMap::new(),
            is_returning: None,
        }
    }

    /// Merge a resolver side-table into the accumulated one.  Node ids are
    /// unique across runs, so entries never collide.
    pub fn add_locals(&mut self, locals: HashMap<ExprId, usize>) {
        self.locals.extend(locals);
    }

    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        let globals = Rc::clone(&self.globals);
        let result = self.eval_stmts(statements, &globals);
        // A stray top-level return must not leak into the next run.
        self.is_returning = None;
        result
    }

    fn eval_stmts(&mut self, statements: &[Stmt], env: &Rc<Env>) -> Result<(), RuntimeError> {
        for statement in statements {
            self.eval_stmt(statement, env)?;
        }
        Ok(())
    }

    fn eval_stmt(&mut self, statement: &Stmt, env: &Rc<Env>) -> Result<(), RuntimeError> {
        if self.is_returning.is_some() {
            return Ok(());
        }

        match statement {
            Stmt::Nop => (),
            Stmt::Expr(expr) => {
                self.eval_expr(expr, env)?;
            }
            Stmt::Print(expr) => {
                let value = self.eval_expr(expr, env)?;
                writeln!(self.output, "{}", value)?;
            }
            Stmt::Var(name, initializer) => {
                // At the global frame the name is visible (as nil) to its own
                // initializer; locals reject that statically instead.
                if env.is_global() {
                    env.define(&name.lexeme, Value::Nil);
                }
                let value = match initializer {
                    Some(initializer) => self.eval_expr(initializer, env)?,
                    None => Value::Nil,
                };
                env.define(&name.lexeme, value);
            }
            Stmt::Block(statements) => {
                self.eval_stmts(statements, &Env::with_parent(Rc::clone(env)))?;
            }
            Stmt::If(condition, then_branch, else_branch) => {
                if self.eval_expr(condition, env)?.is_truthy() {
                    self.eval_stmt(then_branch, env)?;
                } else if let Some(else_branch) = else_branch {
                    self.eval_stmt(else_branch, env)?;
                }
            }
            Stmt::While(condition, body) => {
                while self.eval_expr(condition, env)?.is_truthy() {
                    self.eval_stmt(body, env)?;
                    if self.is_returning.is_some() {
                        break;
                    }
                }
            }
            Stmt::Function(decl) => {
                env.define(
                    &decl.name.lexeme,
                    Value::Function(Function {
                        name: decl.name.lexeme.clone(),
                        arity: decl.params.len(),
                        body: FunctionBody::User(Rc::clone(decl), Rc::clone(env)),
                    }),
                );
            }
            Stmt::Return(_, value) => {
                let value = match value {
                    Some(value) => self.eval_expr(value, env)?,
                    None => Value::Nil,
                };
                debug_assert!(self.is_returning.is_none());
                self.is_returning = Some(value);
            }
            Stmt::Class(name) => {
                env.define(
                    &name.lexeme,
                    Value::Class(Rc::new(LoxClass {
                        name: name.lexeme.clone(),
                    })),
                );
            }
        };
        Ok(())
    }

    fn eval_expr(&mut self, expr: &Expr, env: &Rc<Env>) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Nil => Ok(Value::Nil),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Grouping(inner) => self.eval_expr(inner, env),
            Expr::Unary(op, right) => {
                let right = self.eval_expr(right, env)?;
                match op.kind {
                    TokenKind::Minus => match right {
                        Value::Number(n) => Ok(Value::Number(-n)),
                        _ => Err(RuntimeError::OperandMustBeNumber(op.line)),
                    },
                    TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
                    kind => unreachable!("not a unary operator: {:?}", kind),
                }
            }
            Expr::Binary(left, op, right) => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                self.eval_binary(&left, op, &right)
            }
            Expr::Logical(left, op, right) => {
                let left = self.eval_expr(left, env)?;
                // The original operand is the result, not a coerced boolean.
                if op.kind == TokenKind::Or {
                    if left.is_truthy() {
                        return Ok(left);
                    }
                } else if !left.is_truthy() {
                    return Ok(left);
                }
                self.eval_expr(right, env)
            }
            Expr::Variable(id, name) => self.lookup_variable(*id, name, env),
            Expr::Assign(id, name, value) => {
                let value = self.eval_expr(value, env)?;
                match self.locals.get(id) {
                    Some(&distance) => env.assign_at(distance, name, value.clone())?,
                    None => self.globals.assign(name, value.clone())?,
                }
                Ok(value)
            }
            Expr::Call(callee, paren, arguments) => {
                let callee = self.eval_expr(callee, env)?;
                let mut args = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    args.push(self.eval_expr(argument, env)?);
                }
                self.call_value(callee, args, paren)
            }
        }
    }

    fn eval_binary(&self, left: &Value, op: &Token, right: &Value) -> Result<Value, RuntimeError> {
        match op.kind {
            TokenKind::Plus => match (left, right) {
                (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
                (Value::Str(l), Value::Str(r)) => Ok(Value::Str(format!("{}{}", l, r))),
                _ => Err(RuntimeError::AddOperands(op.line)),
            },
            TokenKind::Minus => self.numeric(left, op, right).map(|(l, r)| Value::Number(l - r)),
            TokenKind::Star => self.numeric(left, op, right).map(|(l, r)| Value::Number(l * r)),
            // IEEE-754 division: a zero divisor yields inf or nan.
            TokenKind::Slash => self.numeric(left, op, right).map(|(l, r)| Value::Number(l / r)),
            TokenKind::Greater => self.numeric(left, op, right).map(|(l, r)| Value::Bool(l > r)),
            TokenKind::GreaterEqual => {
                self.numeric(left, op, right).map(|(l, r)| Value::Bool(l >= r))
            }
            TokenKind::Less => self.numeric(left, op, right).map(|(l, r)| Value::Bool(l < r)),
            TokenKind::LessEqual => self.numeric(left, op, right).map(|(l, r)| Value::Bool(l <= r)),
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            kind => unreachable!("not a binary operator: {:?}", kind),
        }
    }

    fn numeric(&self, left: &Value, op: &Token, right: &Value) -> Result<(f64, f64), RuntimeError> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
            _ => Err(RuntimeError::OperandsMustBeNumbers(op.line)),
        }
    }

    fn lookup_variable(
        &self,
        id: ExprId,
        name: &Token,
        env: &Rc<Env>,
    ) -> Result<Value, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => env.get_at(distance, name),
            None => self.globals.get(name),
        }
    }

    fn call_value(
        &mut self,
        callee: Value,
        args: Vec<Value>,
        paren: &Token,
    ) -> Result<Value, RuntimeError> {
        match callee {
            Value::Function(function) => {
                if args.len() != function.arity {
                    return Err(RuntimeError::Arity {
                        expected: function.arity,
                        got: args.len(),
                        line: paren.line,
                    });
                }
                match &function.body {
                    FunctionBody::Native(native) => Ok(native(&args)),
                    FunctionBody::User(decl, closure) => {
                        // Parameters and body share one frame whose parent is
                        // the environment captured at declaration.
                        let frame = Env::with_parent(Rc::clone(closure));
                        for (param, arg) in decl.params.iter().zip(args) {
                            frame.define(&param.lexeme, arg);
                        }
                        let decl = Rc::clone(decl);
                        self.eval_stmts(&decl.body, &frame)?;
                        Ok(self.is_returning.take().unwrap_or(Value::Nil))
                    }
                }
            }
            Value::Class(class) => {
                if !args.is_empty() {
                    return Err(RuntimeError::Arity {
                        expected: 0,
                        got: args.len(),
                        line: paren.line,
                    });
                }
                Ok(Value::Instance(Rc::new(Instance { class })))
            }
            _ => Err(RuntimeError::NotCallable(paren.line)),
        }
    }
}

fn native_clock(_args: &[Value]) -> Value {
    Value::Number(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("error when getting current time")
            .as_secs_f64(),
    )
}
