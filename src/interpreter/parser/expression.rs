use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, TokenCursor},
    },
};

const OPERAND: &str = "variable or number";

/// Parses a loop test.
///
/// The language has exactly one expression form at this position, the
/// inequality test.
///
/// Grammar: `expr := "not" operand operand`
///
/// # Errors
/// Returns a `ParseError` if `not` or either operand is missing.
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    cursor.expect(Token::Not)?;
    let lhs = parse_operand(cursor)?;
    let rhs = parse_operand(cursor)?;

    Ok(Expr::inequality(lhs, rhs))
}

/// Parses a variable reference or an integer literal.
///
/// Grammar: `operand := Var | Number`
///
/// # Errors
/// - `UnexpectedToken` for any other token.
/// - `LiteralTooLarge` if a number does not fit in an `i64`.
fn parse_operand(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let position = cursor.position();

    match cursor.advance(OPERAND)? {
        (Token::Var, Some(name)) => Ok(Expr::variable(name)),
        (Token::Number, Some(digits)) => {
            let value = digits.parse::<i64>()
                              .map_err(|_| ParseError::LiteralTooLarge { literal:
                                                                             digits.to_string(),
                                                                         position })?;
            Ok(Expr::integer(value))
        },
        (tok, _) => Err(ParseError::UnexpectedToken { expected: OPERAND.to_string(),
                                                      found: tok.describe().to_string(),
                                                      position }),
    }
}
