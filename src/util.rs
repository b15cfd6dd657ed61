/// Source acquisition helpers.
///
/// Rejoins path arguments, reads source files and normalizes their text into
/// the single-space form the lexer expects.
pub mod source;
