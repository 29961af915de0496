use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Failures of either parser are passed through unchanged.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `((a, b), c)` rather than flat tuples like `(a, b, c)`.
///
/// Example:
/// ```
/// use exprcomb::{AndExt, Cursor, Parser, literal};
///
/// let cursor = Cursor::new("Foo(");
/// let ((name, open), cursor) = literal("Foo").and(literal("(")).parse(cursor).unwrap();
/// assert_eq!(name, "Foo");
/// assert_eq!(open, "(");
/// assert!(cursor.is_at_end());
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
