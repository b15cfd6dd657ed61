/// Parser entry point and token cursor.
///
/// Holds the shared result type, the cursor that walks the token stream in
/// step with the lexeme stream, and [`parse`](core::parse).
pub mod core;

/// Expression parsing.
///
/// Parses the `not <operand> <operand>` loop test.
pub mod expression;

/// Statement parsing.
///
/// Parses statement sequences, the primitive statements and `while` loops.
pub mod statement;
