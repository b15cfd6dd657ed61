use std::{fs, path::Path};

use crate::error::SourceError;

/// Rejoins command-line words into a single path.
///
/// Shells split unquoted paths on spaces. The interpreter takes exactly one
/// path, so every word is joined back with a single space.
///
/// # Example
/// ```
/// use whilelang::util::source::join_path_args;
///
/// assert_eq!(join_path_args(&["my", "program.while"]), "my program.while");
/// ```
pub fn join_path_args<S: AsRef<str>>(args: &[S]) -> String {
    args.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ")
}

/// Reads a source file into memory.
///
/// # Errors
/// Returns [`SourceError::NotFound`] if the file cannot be opened or read.
pub fn load_source(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| SourceError::NotFound { path: path.to_path_buf(),
                                                                       source })
}

/// Normalizes raw source text for the lexer.
///
/// Lines are joined with spaces, runs of whitespace collapse to one space and
/// both ends are trimmed. Lines whose first non-blank character is `#` are
/// comments and are removed first.
///
/// # Example
/// ```
/// use whilelang::util::source::normalize_source;
///
/// let text = "# counts to two\nclear x;\n  incr x;\tincr x\n";
/// assert_eq!(normalize_source(text), "clear x; incr x; incr x");
/// ```
#[must_use]
pub fn normalize_source(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_words_with_single_spaces() {
        assert_eq!(join_path_args(&[String::from("a"), String::from("b c")]), "a b c");
        assert_eq!(join_path_args::<&str>(&[]), "");
    }

    #[test]
    fn collapses_whitespace_across_lines() {
        assert_eq!(normalize_source("  while not x y do\n\n   incr y\nend  "),
                   "while not x y do incr y end");
    }

    #[test]
    fn strips_comment_lines() {
        assert_eq!(normalize_source("# expect: x = 1\nclear x;incr x\n   # trailing"),
                   "clear x;incr x");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_source("definitely/not/a/real/file.while").unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }
}
