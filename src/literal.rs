use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        cursor.match_literal(&self.expected)
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let cursor = Cursor::new("hello");
        let (result, cursor) = literal("hello").parse(cursor).unwrap();
        assert_eq!(result, "hello");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let cursor = Cursor::new("hello world");
        let (result, cursor) = literal("hello").parse(cursor).unwrap();
        assert_eq!(result, "hello");
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.remaining(), " world");
    }

    #[test]
    fn test_unicode_string() {
        let cursor = Cursor::new("こんにちは世界");
        let (result, cursor) = literal("こんにちは").parse(cursor).unwrap();
        assert_eq!(result, "こんにちは");
        assert_eq!(cursor.remaining(), "世界");
    }

    #[test]
    fn test_empty_string() {
        let cursor = Cursor::new("hello");
        let (result, after) = literal("").parse(cursor).unwrap();
        assert_eq!(result, "");
        // Cursor should not advance for empty string
        assert_eq!(after.position(), cursor.position());
    }

    #[test]
    fn test_mismatch_leaves_position() {
        let cursor = Cursor::new("xabc").advance(1);
        let failure = literal("abd").parse(cursor).unwrap_err();
        assert_eq!(failure.expected, "abd");
        assert_eq!(failure.position, 1);
    }

    #[test]
    fn test_end_of_input() {
        let cursor = Cursor::new("ab").advance(2);
        let failure = literal("abc").parse(cursor).unwrap_err();
        assert_eq!(failure.expected, "abc");
        assert_eq!(failure.position, 2);
    }

    #[test]
    fn test_owned_literal() {
        let expected = String::from("dyn");
        let parser = literal(expected);
        let (result, _) = parser.parse(Cursor::new("dynamic")).unwrap();
        assert_eq!(result, "dyn");
    }
}
