use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// Tokens carry no payload. The text behind every `Var` and `Number` token is
/// recorded separately in the lexeme stream returned by [`tokenize`], in the
/// same relative order as the tokens themselves.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// `clear`
    #[token("clear")]
    Clear,
    /// `incr`
    #[token("incr")]
    Incr,
    /// `decr`
    #[token("decr")]
    Decr,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `not`
    #[token("not")]
    Not,
    /// Variable names such as `x` or `total`. Letters only.
    #[regex(r"[a-zA-Z]+", priority = 3)]
    Var,
    /// `;`
    #[token(";")]
    SemiColon,
    /// Unsigned decimal literals such as `42`.
    #[regex(r"[0-9]+", priority = 3)]
    Number,
    /// `end`
    #[token("end")]
    End,
    /// Any other run of non-delimiter characters. Never emitted.
    #[regex(r"[^ \t\n\r\f;]+", drop_fragment, priority = 1)]
    Dropped,
}

impl Token {
    /// Returns `true` for tokens that consume an entry of the lexeme stream.
    #[must_use]
    pub const fn has_lexeme(self) -> bool {
        matches!(self, Self::Var | Self::Number)
    }

    /// The source spelling of the token, or a placeholder for `Var` and
    /// `Number`.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Clear => "'clear'",
            Self::Incr => "'incr'",
            Self::Decr => "'decr'",
            Self::While => "'while'",
            Self::Do => "'do'",
            Self::Not => "'not'",
            Self::Var => "variable",
            Self::SemiColon => "';'",
            Self::Number => "number",
            Self::End => "'end'",
            Self::Dropped => "unrecognized fragment",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// How many fragments were silently dropped so far.
    pub dropped: usize,
}

/// Skips a fragment that matches none of the recognized shapes.
///
/// Malformed fragments vanish instead of failing the lex, so `x1` or `-3`
/// simply disappear from the token stream.
fn drop_fragment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.dropped += 1;
    tracing::debug!(fragment = lex.slice(), offset = lex.span().start, "dropping unrecognized fragment");
    logos::Skip
}

/// Converts source text into a token stream and its parallel lexeme stream.
///
/// The i-th `Var` or `Number` token in the returned tokens corresponds to the
/// i-th entry of the returned lexemes.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedInput`] if the lexer cannot make
/// progress. Every non-delimiter run is otherwise matched by some rule, so
/// this does not happen for ordinary text.
///
/// # Example
/// ```
/// use whilelang::interpreter::lexer::{Token, tokenize};
///
/// let (tokens, lexemes) = tokenize("clear x;incr x").unwrap();
///
/// assert_eq!(tokens, vec![Token::Clear, Token::Var, Token::SemiColon, Token::Incr, Token::Var]);
/// assert_eq!(lexemes, vec!["x", "x"]);
/// ```
pub fn tokenize(source: &str) -> Result<(Vec<Token>, Vec<String>), ParseError> {
    let mut tokens = Vec::new();
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => {
                if tok.has_lexeme() {
                    lexemes.push(lexer.slice().to_string());
                }
                tokens.push(tok);
            },
            Err(()) => {
                return Err(ParseError::UnrecognizedInput { fragment: lexer.slice().to_string(),
                                                           offset:   lexer.span().start, });
            },
        }
    }

    tracing::debug!(tokens = tokens.len(),
                    lexemes = lexemes.len(),
                    dropped = lexer.extras.dropped,
                    "tokenized source");

    Ok((tokens, lexemes))
}
