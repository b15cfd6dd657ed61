use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// text: unexpected tokens, a premature end of input, trailing tokens after
/// the program and literals that do not fit the integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while executing a program, such as reading
/// a variable that was never defined.
pub mod runtime_error;
/// Source acquisition errors.
pub mod source_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use source_error::SourceError;

/// Any failure of a complete interpreter run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source text could not be acquired.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The source text did not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Execution aborted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
