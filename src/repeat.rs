use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Succeeds unless the parser fails fatally. Stops at the first failure, or
/// after a success that consumed nothing, since repeating that would never
/// make progress.
pub struct Repeat<P> {
    parser: P,
}

impl<P> Repeat<P> {
    pub fn new(parser: P) -> Self {
        Repeat { parser }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    if next_cursor.position() == cursor.position() {
                        log::trace!("repeat stopped on zero-width match at {}", cursor.position());
                        cursor = next_cursor;
                        break;
                    }
                    cursor = next_cursor;
                }
                Err(failure) if failure.is_fatal() => return Err(failure),
                // Repeat matches zero or more, so the failure is not propagated
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser)
}
