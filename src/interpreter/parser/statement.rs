use crate::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenCursor},
            expression::parse_expression,
        },
    },
};

/// Parses a sequence of `;`-separated statements.
///
/// A `;` directly before `end` or the end of input is accepted and ignored,
/// so `while not x y do incr y; end;` parses.
///
/// Grammar: `program := statement (";" statement)*`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first statement.
///
/// # Returns
/// The parsed statements as a [`Program`].
pub fn parse_program(cursor: &mut TokenCursor<'_>) -> ParseResult<Program> {
    let mut statements = vec![parse_statement(cursor)?];

    while let Some(Token::SemiColon) = cursor.peek() {
        cursor.advance(Token::SemiColon.describe())?;

        match cursor.peek() {
            None | Some(Token::End) => break,
            Some(_) => statements.push(parse_statement(cursor)?),
        }
    }

    Ok(Program::new(statements))
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - `clear <var>`
/// - `incr <var>`
/// - `decr <var>`
/// - `while <expr> do <program> end`
///
/// The leading keyword decides the form; there is no backtracking.
///
/// # Errors
/// Returns a `ParseError` if the statement does not begin with one of the
/// four keywords or its operands are malformed.
pub fn parse_statement(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    let position = cursor.position();

    match cursor.advance("statement")? {
        (Token::Clear, _) => Ok(Statement::Clear(cursor.expect_var()?)),
        (Token::Incr, _) => Ok(Statement::Incr(cursor.expect_var()?)),
        (Token::Decr, _) => Ok(Statement::Decr(cursor.expect_var()?)),
        (Token::While, _) => parse_while(cursor),
        (tok, _) => Err(ParseError::UnexpectedToken { expected: "statement".to_string(),
                                                      found: tok.describe().to_string(),
                                                      position }),
    }
}

/// Parses the rest of a `while` loop after the `while` keyword.
///
/// Grammar: `while := "while" expr "do" program "end"`
///
/// The body is parsed with [`parse_program`], which stops at the matching
/// `end`; nested loops consume their own `end` first.
fn parse_while(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    let test = parse_expression(cursor)?;
    cursor.expect(Token::Do)?;
    let body = parse_program(cursor)?;
    cursor.expect(Token::End)?;

    Ok(Statement::While { test, body })
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, Program, Statement},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::core::parse},
    };

    fn parse_source(source: &str) -> Result<Program, ParseError> {
        let (tokens, lexemes) = tokenize(source)?;
        parse(&tokens, &lexemes)
    }

    #[test]
    fn parses_primitive_statements() {
        let program = parse_source("clear x;incr x;decr y").unwrap();
        assert_eq!(program.statements,
                   vec![Statement::Clear("x".into()),
                        Statement::Incr("x".into()),
                        Statement::Decr("y".into())]);
    }

    #[test]
    fn parses_while_with_literal_operand() {
        let program = parse_source("while not x 10 do incr x end").unwrap();
        assert_eq!(program.statements,
                   vec![Statement::While { test: Expr::inequality(Expr::variable("x"),
                                                                  Expr::integer(10)),
                                           body: Program::new(vec![Statement::Incr("x".into())]), }]);
    }

    #[test]
    fn parses_nested_loops() {
        let program =
            parse_source("while not a b do while not c 0 do decr c end;incr a end;clear z").unwrap();
        assert_eq!(program.len(), 2);

        let Statement::While { body, .. } = &program.statements[0] else {
            panic!("expected a while loop");
        };
        assert_eq!(body.len(), 2);
        assert!(matches!(body.statements[0], Statement::While { .. }));
        assert_eq!(body.statements[1], Statement::Incr("a".into()));
        assert_eq!(program.statements[1], Statement::Clear("z".into()));
    }

    #[test]
    fn trailing_semicolons_are_accepted() {
        let program = parse_source("clear x;while not x 1 do incr x; end;").unwrap();
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn missing_end_is_an_error() {
        let err = parse_source("while not x 1 do incr x").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));
    }

    #[test]
    fn missing_operand_is_an_error() {
        let err = parse_source("while not x do incr x end").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedToken { expected: "variable or number".into(),
                                                 found:    "'do'".into(),
                                                 position: 3, });
    }

    #[test]
    fn statement_must_start_with_keyword() {
        let err = parse_source("x").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { position: 0, .. }));
    }

    #[test]
    fn clear_requires_a_variable() {
        let err = parse_source("clear 5").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { position: 1, .. }));
    }

    #[test]
    fn stray_end_is_trailing() {
        let err = parse_source("clear x end").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedTrailingTokens { token:    "'end'".into(),
                                                          position: 2, });
    }

    #[test]
    fn missing_semicolon_is_trailing() {
        let err = parse_source("clear x clear y").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedTrailingTokens { position: 2, .. }));
    }

    #[test]
    fn empty_source_is_an_error() {
        let err = parse_source("").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { position: 0, .. }));
    }

    #[test]
    fn desynchronized_lexemes_are_an_error() {
        let (tokens, _) = tokenize("clear x").unwrap();
        let err = parse(&tokens, &[]).unwrap_err();
        assert_eq!(err, ParseError::MissingLexeme { position: 1 });
    }
}
