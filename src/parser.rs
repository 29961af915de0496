use crate::cursor::Cursor;
use crate::error::Failure;

/// Outcome of a parse attempt
///
/// On success the value and the advanced cursor; on failure only the
/// [`Failure`], so the caller keeps the cursor it started from.
pub type ParseResult<'code, T> = Result<(T, Cursor<'code>), Failure>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures do not consume input.
    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;
}

/// Plain functions and closures are parsers
///
/// This is how a grammar refers to itself recursively: a production written
/// as an `fn` can be handed to a combinator by name.
impl<'code, F, T> Parser<'code> for F
where
    F: Fn(Cursor<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        self(cursor)
    }
}

/// A type-erased parser, used where alternatives of different types must
/// share one collection
pub type BoxedParser<'p, 'code, T> = Box<dyn Parser<'code, Output = T> + Send + Sync + 'p>;

impl<'p, 'code, T> Parser<'code> for Box<dyn Parser<'code, Output = T> + Send + Sync + 'p> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, T> {
        (**self).parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxExt<'code>: Parser<'code> + Sized {
    fn boxed<'p>(self) -> BoxedParser<'p, 'code, Self::Output>
    where
        Self: Send + Sync + 'p,
    {
        Box::new(self)
    }
}

/// Implement BoxExt for all parsers
impl<'code, P> BoxExt<'code> for P where P: Parser<'code> {}
