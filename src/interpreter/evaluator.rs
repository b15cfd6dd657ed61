/// Core evaluation state.
///
/// Defines [`ProgramState`](core::ProgramState), the variable store every
/// evaluation reads and every statement mutates, and the shared result type.
pub mod core;

/// Expression evaluation.
///
/// Evaluates literals, variable references and inequality tests to values.
pub mod expression;

/// Statement execution.
///
/// Executes `clear`, `incr`, `decr`, `while` and whole programs.
pub mod statement;
