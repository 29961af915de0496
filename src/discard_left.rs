use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that runs `left` then `main`, keeping only `main`'s value
///
/// A failure of either part is reported with a `DiscardLeft: ` prefix.
pub struct DiscardLeft<L, P> {
    left: L,
    main: P,
}

impl<L, P> DiscardLeft<L, P> {
    pub fn new(left: L, main: P) -> Self {
        DiscardLeft { left, main }
    }
}

impl<'code, L, P> Parser<'code> for DiscardLeft<L, P>
where
    L: Parser<'code>,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (_, cursor) = self
            .left
            .parse(cursor)
            .map_err(|failure| failure.prefixed("DiscardLeft"))?;
        self.main
            .parse(cursor)
            .map_err(|failure| failure.prefixed("DiscardLeft"))
    }
}

/// Creates a parser that matches `left` followed by `main` and returns `main`'s value
pub fn discard_left<'code, L, P>(left: L, main: P) -> DiscardLeft<L, P>
where
    L: Parser<'code>,
    P: Parser<'code>,
{
    DiscardLeft::new(left, main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_discard_left_success() {
        let parser = discard_left(literal(","), literal("abc"));
        let (value, cursor) = parser.parse(Cursor::new(",abc")).unwrap();
        assert_eq!(value, "abc");
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_left_fails() {
        let parser = discard_left(literal(","), literal("abc"));
        let failure = parser.parse(Cursor::new("abc")).unwrap_err();
        assert_eq!(failure.expected, "DiscardLeft: ,");
        assert_eq!(failure.position, 0);
    }

    #[test]
    fn test_main_fails_after_left() {
        let parser = discard_left(literal(","), literal("abc"));
        let failure = parser.parse(Cursor::new(",xyz")).unwrap_err();
        assert_eq!(failure.expected, "DiscardLeft: abc");
        // The failure happened after the separator was consumed
        assert_eq!(failure.position, 1);
    }

    #[test]
    fn test_with_remaining_content() {
        let parser = discard_left(literal("::"), literal("x"));
        let (value, cursor) = parser.parse(Cursor::new("::xy")).unwrap();
        assert_eq!(value, "x");
        assert_eq!(cursor.remaining(), "y");
    }
}
