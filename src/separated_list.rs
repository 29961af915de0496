use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses zero or more items, every item after the first preceded by the
/// separator. It returns a vector of all items and only fails when an
/// item or separator fails fatally.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `""` → `vec![]`
///
/// # Note
/// - A separator that is not followed by an item is left unconsumed
/// - Leading separators are not consumed
/// - Does not handle whitespace automatically
/// - Holds no state between calls: the same instance can be reused, and
///   shared across threads, with identical results
pub struct SeparatedList<S, P> {
    separator: S,
    parser: P,
}

impl<S, P> SeparatedList<S, P> {
    pub fn new(separator: S, parser: P) -> Self {
        SeparatedList { separator, parser }
    }
}

impl<S, P> SeparatedList<S, P> {
    fn element<'code>(
        &self,
        cursor: Cursor<'code>,
        first: bool,
    ) -> ParseResult<'code, <P as Parser<'code>>::Output>
    where
        S: Parser<'code>,
        P: Parser<'code>,
    {
        let cursor = if first {
            cursor
        } else {
            self.separator.parse(cursor)?.1
        };
        self.parser.parse(cursor)
    }
}

impl<'code, S, P> Parser<'code> for SeparatedList<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.element(cursor, results.is_empty()) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    if next_cursor.position() == cursor.position() {
                        cursor = next_cursor;
                        break;
                    }
                    cursor = next_cursor;
                }
                Err(failure) if failure.is_fatal() => return Err(failure),
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<'code, S, P>(separator: S, parser: P) -> SeparatedList<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    SeparatedList::new(separator, parser)
}
