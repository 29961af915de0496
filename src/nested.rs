use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs its parser one nesting level deeper
///
/// Fails without running the inner parser once the cursor's depth limit is
/// reached, which bounds recursion in self-referential grammars.
pub struct Nested<P> {
    parser: P,
}

impl<P> Nested<P> {
    pub fn new(parser: P) -> Self {
        Nested { parser }
    }
}

impl<'code, P> Parser<'code> for Nested<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let ((), inner) = cursor.descend()?;
        let (value, cursor) = self.parser.parse(inner)?;
        Ok((value, cursor.ascend()))
    }
}

/// Convenience function to create a Nested parser
pub fn nested<'code, P>(parser: P) -> Nested<P>
where
    P: Parser<'code>,
{
    Nested::new(parser)
}
