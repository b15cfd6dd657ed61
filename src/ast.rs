use std::fmt;

use crate::interpreter::value::Value;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions never mutate program state. The only composite form is the
/// inequality test, which is also the only way to produce a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A constant value.
    Literal(Value),
    /// Reference to a variable by name.
    Variable(String),
    /// `not lhs rhs`: true when the operands differ.
    Inequality {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
}

impl Expr {
    /// Builds an integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Value::Integer(value))
    }

    /// Builds a variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Builds `not lhs rhs`.
    #[must_use]
    pub fn inequality(lhs: Self, rhs: Self) -> Self {
        Self::Inequality { lhs: Box::new(lhs),
                           rhs: Box::new(rhs), }
    }
}

/// A single statement of the language.
///
/// Every statement owns its operands outright; a `while` owns its test and the
/// nested program forming its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `clear v`: set `v` to zero, creating it if needed.
    Clear(String),
    /// `incr v`: add one to `v` if it exists.
    Incr(String),
    /// `decr v`: subtract one from `v` if it exists.
    Decr(String),
    /// `while test do body end`.
    While {
        /// Loop condition, re-evaluated before every iteration.
        test: Expr,
        /// Loop body.
        body: Program,
    },
}

/// An ordered sequence of statements, executed one after another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl From<Vec<Statement>> for Program {
    fn from(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Variable(name) => f.write_str(name),
            Self::Inequality { lhs, rhs } => write!(f, "not {lhs} {rhs}"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear(name) => write!(f, "clear {name}"),
            Self::Incr(name) => write!(f, "incr {name}"),
            Self::Decr(name) => write!(f, "decr {name}"),
            Self::While { test, body } => write!(f, "while {test} do {body} end"),
        }
    }
}

/// Prints canonical source text: statements joined by `;`.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
