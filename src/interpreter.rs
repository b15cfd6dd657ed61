/// The evaluator module executes AST nodes against program state.
///
/// The evaluator walks the AST, evaluates loop tests, applies `clear`, `incr`
/// and `decr` to the variable store and drives `while` loops. It is the
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions to values.
/// - Executes statements in order, mutating the variable store.
/// - Reports undefined-variable reads and non-boolean loop tests.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer produces a payload-free token stream together with a parallel
/// stream of lexemes holding the text of every variable and number token.
///
/// # Responsibilities
/// - Recognizes keywords, `;`, numbers and variable names.
/// - Drops fragments of any other shape.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token and lexeme streams left to right by recursive
/// descent and builds a [`Program`](crate::ast::Program).
///
/// # Responsibilities
/// - Converts tokens into statements and loop tests.
/// - Rejects any token sequence outside the grammar.
pub mod parser;
/// The value module defines the runtime values produced by expressions.
pub mod value;
