use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are indices into the token stream, counted from zero.
pub enum ParseError {
    /// Found a token the grammar does not allow at this point.
    #[error("Error at token {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Index of the offending token.
        position: usize,
    },
    /// Reached the end of input in the middle of a construct.
    #[error("Error at token {position}: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// Number of tokens consumed before input ran out.
        position: usize,
    },
    /// Found extra tokens after a complete program.
    #[error("Error at token {position}: Extra tokens after program, starting with {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Index of the first extra token.
        position: usize,
    },
    /// A `Var` or `Number` token had no lexeme paired with it.
    #[error("Error at token {position}: Token stream and lexeme stream are out of step.")]
    MissingLexeme {
        /// Index of the token without a lexeme.
        position: usize,
    },
    /// A numeric literal does not fit in a 64-bit signed integer.
    #[error("Error at token {position}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal text.
        literal:  String,
        /// Index of the literal token.
        position: usize,
    },
    /// The lexer could not match the input at all.
    #[error("Error at offset {offset}: Unrecognized input '{fragment}'.")]
    UnrecognizedInput {
        /// The offending text.
        fragment: String,
        /// Byte offset into the source.
        offset:   usize,
    },
}
