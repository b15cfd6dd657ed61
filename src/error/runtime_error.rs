use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never defined.
    ///
    /// Only `clear` creates variables, so reading a name before it has been
    /// cleared is always an error.
    #[error("Runtime error: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// A `while` test produced something other than a boolean.
    ///
    /// This one is recovered locally: the loop is skipped and the run goes on.
    #[error("Runtime error: Expected boolean in while test, found {found}.")]
    ExpectedBoolean {
        /// Rendering of the value the test produced.
        found: String,
    },
}
