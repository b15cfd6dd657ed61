use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{lexer::Token, parser::statement::parse_program},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A single forward cursor over the token stream and its lexeme stream.
///
/// The lexeme index only advances when a `Var` or `Number` token is consumed,
/// which keeps the two streams paired.
pub struct TokenCursor<'a> {
    tokens:   Peekable<Iter<'a, Token>>,
    lexemes:  Iter<'a, String>,
    position: usize,
}

impl<'a> TokenCursor<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Token], lexemes: &'a [String]) -> Self {
        Self { tokens:   tokens.iter().peekable(),
               lexemes:  lexemes.iter(),
               position: 0, }
    }

    /// Looks at the next token without consuming it.
    pub fn peek(&mut self) -> Option<Token> {
        self.tokens.peek().copied().copied()
    }

    /// Index of the next token to be consumed.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Consumes the next token. Returns it together with its lexeme for `Var`
    /// and `Number` tokens.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if no tokens remain.
    /// - `MissingLexeme` if a `Var`/`Number` token has no paired lexeme.
    pub fn advance(&mut self, expected: &str) -> ParseResult<(Token, Option<&'a str>)> {
        let position = self.position;
        let token = *self.tokens
                          .next()
                          .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected:
                                                                                expected.to_string(),
                                                                            position })?;
        self.position += 1;

        if token.has_lexeme() {
            let lexeme = self.lexemes
                             .next()
                             .ok_or(ParseError::MissingLexeme { position })?;
            return Ok((token, Some(lexeme.as_str())));
        }

        Ok((token, None))
    }

    /// Consumes the next token and checks that it is `expected`.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a different token is found.
    /// - `UnexpectedEndOfInput` if no tokens remain.
    pub fn expect(&mut self, expected: Token) -> ParseResult<()> {
        let position = self.position;
        match self.advance(expected.describe())? {
            (tok, _) if tok == expected => Ok(()),
            (tok, _) => Err(ParseError::UnexpectedToken { expected: expected.describe()
                                                                            .to_string(),
                                                          found: tok.describe().to_string(),
                                                          position }),
        }
    }

    /// Consumes a `Var` token and returns its name.
    ///
    /// # Errors
    /// Returns a `ParseError` if the next token is not a variable or the input
    /// ends.
    pub fn expect_var(&mut self) -> ParseResult<String> {
        let position = self.position;
        match self.advance(Token::Var.describe())? {
            (Token::Var, Some(name)) => Ok(name.to_string()),
            (tok, _) => Err(ParseError::UnexpectedToken { expected: Token::Var.describe()
                                                                              .to_string(),
                                                          found: tok.describe().to_string(),
                                                          position }),
        }
    }
}

/// Parses a complete program from a token stream and its lexeme stream.
///
/// This is the entry point of the parser. The whole token stream must form a
/// single program; leftover tokens such as a stray `end` are an error.
///
/// Grammar: `program := statement (";" statement)*`
///
/// # Errors
/// Returns a `ParseError` for any token sequence that does not match the
/// grammar.
///
/// # Example
/// ```
/// use whilelang::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let (tokens, lexemes) = tokenize("clear x;incr x").unwrap();
/// let program = parse(&tokens, &lexemes).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse(tokens: &[Token], lexemes: &[String]) -> ParseResult<Program> {
    let mut cursor = TokenCursor::new(tokens, lexemes);
    let program = parse_program(&mut cursor)?;

    if let Some(tok) = cursor.peek() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    tok.describe().to_string(),
                                                          position: cursor.position(), });
    }

    tracing::debug!(statements = program.len(), "parsed program");
    Ok(program)
}
