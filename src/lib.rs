//! # whilelang
//!
//! whilelang is an interpreter for a minimal imperative teaching language in
//! the tradition of the LOOP/WHILE languages of computability theory.
//! Programs manipulate named integer variables with `clear`, `incr` and
//! `decr`, and loop with `while not <a> <b> do <body> end`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::tokenize,
        parser::core::parse,
    },
    util::source::normalize_source,
};

/// Defines the structure of parsed programs.
///
/// This module declares the `Expr` and `Statement` enums and the `Program`
/// node. The AST is a strict tree built by the parser and walked by the
/// evaluator.
pub mod ast;
/// Provides error types for every phase.
///
/// Parse errors, runtime errors and source errors each have their own enum;
/// [`error::Error`] wraps all three for a complete run.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Provides entry points for each phase.
pub mod interpreter;
/// Helpers for acquiring and normalizing source text.
pub mod util;

pub use error::Error;
pub use interpreter::evaluator::core::ProgramState;

/// Runs a complete program and returns the final variable state.
///
/// The source is normalized, tokenized, parsed and executed against a fresh,
/// empty state. Nothing is printed.
///
/// # Errors
/// Returns an error if parsing fails or execution hits a fatal runtime error.
/// Non-boolean loop tests are not fatal; they show up in
/// [`ProgramState::diagnostics`].
///
/// # Examples
/// ```
/// use whilelang::run_source;
///
/// let state = run_source("clear x;incr x;incr x").unwrap();
/// assert_eq!(state.get("x"), Some(2));
///
/// // Reading a variable that was never cleared is an error.
/// assert!(run_source("clear x;while not x y do incr x end").is_err());
/// ```
pub fn run_source(source: &str) -> Result<ProgramState, Error> {
    let normalized = normalize_source(source);
    let (tokens, lexemes) = tokenize(&normalized)?;
    let program = parse(&tokens, &lexemes)?;

    Ok(run_program(&program)?)
}

/// Executes an already parsed program against a fresh state.
///
/// # Errors
/// Returns the first fatal runtime error.
pub fn run_program(program: &Program) -> EvalResult<ProgramState> {
    let mut state = ProgramState::new();
    state.exec_program(program)?;
    Ok(state)
}
