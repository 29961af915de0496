use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// Any failure aborts the whole sequence and is reported with a
/// `Bracket: ` prefix.
///
/// # Examples
/// - `"(value)"` → `"value"`
/// - `"[content]"` → `"content"`
pub struct Bracket<L, P, R> {
    open: L,
    content: P,
    close: R,
}

impl<L, P, R> Bracket<L, P, R> {
    pub fn new(open: L, content: P, close: R) -> Self {
        Bracket {
            open,
            content,
            close,
        }
    }
}

impl<'code, L, P, R> Parser<'code> for Bracket<L, P, R>
where
    L: Parser<'code>,
    P: Parser<'code>,
    R: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self
            .open
            .parse(cursor)
            .map_err(|failure| failure.prefixed("Bracket"))?;
        let (content_val, cursor) = self
            .content
            .parse(cursor)
            .map_err(|failure| failure.prefixed("Bracket"))?;
        let (_, cursor) = self
            .close
            .parse(cursor)
            .map_err(|failure| failure.prefixed("Bracket"))?;

        Ok((content_val, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn bracket<'code, L, P, R>(open: L, content: P, close: R) -> Bracket<L, P, R>
where
    L: Parser<'code>,
    P: Parser<'code>,
    R: Parser<'code>,
{
    Bracket::new(open, content, close)
}
