//! The expression grammar, built from the combinators in this crate.
//!
//! ```text
//! expression = boolean | number | call
//! boolean    = "true" | "false"
//! number     = [+-]? [0-9]+ ( "." [0-9]* )?
//! identifier = [a-zA-Z_] [a-zA-Z0-9_]*
//! call       = identifier "(" ( expression ( "," expression )* )? ")"
//! ```
//!
//! Alternatives are tried in the order written. `boolean` comes first so
//! `true` and `false` are never read as the start of a call.

use crate::and::AndExt;
use crate::bracket::bracket;
use crate::choice::choice;
use crate::config::{ParseOptions, ParsingMode};
use crate::cursor::Cursor;
use crate::error::{Failure, ParseError};
use crate::expression::{Call, Expression};
use crate::literal::literal;
use crate::map::MapExt;
use crate::nested::nested;
use crate::parser::{BoxExt, ParseResult, Parser};
use crate::pattern::{Pattern, pattern};
use crate::separated_list::separated_list;
use once_cell::sync::Lazy;

static NUMBER: Lazy<Pattern> = Lazy::new(|| pattern(r"[+\-]?[0-9]+(\.[0-9]*)?", "number"));

static IDENTIFIER: Lazy<Pattern> =
    Lazy::new(|| pattern(r"[a-zA-Z_][a-zA-Z0-9_]*", "identifier"));

/// Parser for the literals `true` and `false`
pub fn boolean<'code>() -> impl Parser<'code, Output = bool> {
    choice(vec![literal("true"), literal("false")]).map(|matched| matched == "true")
}

/// Parser for signed integer literals
///
/// Text with a fractional part is recognised as a number but rejected, so
/// `1.5` is an error rather than `1`.
pub fn number<'code>() -> impl Parser<'code, Output = i64> {
    IntParser
}

struct IntParser;

impl<'code> Parser<'code> for IntParser {
    type Output = i64;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (text, next) = NUMBER.parse(cursor)?;

        if let Some(dot) = text.find('.') {
            return Err(Failure::new(
                "integer without fractional part",
                cursor.position() + dot,
            ));
        }

        match text.parse::<i64>() {
            Ok(value) => Ok((value, next)),
            Err(err) => Err(Failure::new(
                format!("integer in i64 range, found {} ({})", text, err),
                next.position(),
            )),
        }
    }
}

/// Parser for identifiers: a letter or underscore followed by letters, digits and underscores
pub fn identifier<'code>() -> impl Parser<'code, Output = &'code str> {
    |cursor: Cursor<'code>| IDENTIFIER.parse(cursor)
}

/// Parser for call expressions such as `Foo(1,true,Bar())`
pub fn call<'code>() -> impl Parser<'code, Output = Call> {
    let arguments = separated_list(literal(","), expression);

    identifier()
        .and(nested(bracket(literal("("), arguments, literal(")"))))
        .map(|(target, arguments)| Call::new(target, arguments))
}

/// Parse one expression at the cursor
pub fn expression(cursor: Cursor<'_>) -> ParseResult<'_, Expression> {
    choice(vec![
        boolean().map(Expression::Boolean).boxed(),
        number().map(Expression::Number).boxed(),
        call().map(Expression::Call).boxed(),
    ])
    .parse(cursor)
}

/// Parse an expression from the start of `text`
///
/// Text following the expression is ignored; use [`parse_complete`] to
/// reject it.
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    parse_with(text, &ParseOptions::default())
}

/// Parse an expression that must span all of `text`
pub fn parse_complete(text: &str) -> Result<Expression, ParseError> {
    parse_with(text, &ParseOptions::strict())
}

/// Parse an expression from `text` under the given options
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Expression, ParseError> {
    let cursor = Cursor::with_max_depth(text, options.max_depth);

    let result = expression(cursor).and_then(|(expr, cursor)| match options.mode {
        ParsingMode::Strict if !cursor.is_at_end() => {
            Err(Failure::new("end of input", cursor.position()))
        }
        _ => {
            if !cursor.is_at_end() {
                log::debug!("ignoring {} trailing bytes", cursor.remaining().len());
            }
            Ok(expr)
        }
    });

    match result {
        Ok(expr) => {
            log::debug!("parsed {:?} as {}", text, expr);
            Ok(expr)
        }
        Err(failure) => {
            log::debug!("failed to parse {:?}: {}", text, failure);
            Err(ParseError::from_failure(text, failure))
        }
    }
}
