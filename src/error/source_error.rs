use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while acquiring source text.
pub enum SourceError {
    /// The path does not name a readable file.
    #[error("File can't be found: '{}'.", .path.display())]
    NotFound {
        /// The path that was tried.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
