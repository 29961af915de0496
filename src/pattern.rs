use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};
use regex::Regex;
use std::borrow::Cow;

/// Parser that matches a regular expression anchored at the cursor
///
/// The expression is compiled once, when the parser is built. A compile error
/// does not panic; it is kept and reported as the failure of every parse.
///
/// Alternations are matched leftmost-first, not longest: `a|ab` on `"ab"`
/// matches `"a"`. Put the longer alternative first when both can apply.
pub struct Pattern {
    regex: Result<Regex, String>,
    label: Cow<'static, str>,
}

impl Pattern {
    pub fn new(source: &str, label: impl Into<Cow<'static, str>>) -> Self {
        let regex = Regex::new(&format!("^(?:{})", source))
            .map_err(|err| format!("valid pattern ({})", err));
        Pattern {
            regex,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<'code> Parser<'code> for Pattern {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match &self.regex {
            Ok(regex) => cursor.match_pattern(regex, &self.label),
            Err(message) => Err(Failure::new(message.clone(), cursor.position())),
        }
    }
}

/// Convenience function to create a Pattern parser
pub fn pattern(source: &str, label: impl Into<Cow<'static, str>>) -> Pattern {
    Pattern::new(source, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_match() {
        let parser = pattern("[a-z]+", "word");
        let (value, cursor) = parser.parse(Cursor::new("abc123")).unwrap();
        assert_eq!(value, "abc");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_pattern_takes_whole_greedy_match() {
        let parser = pattern("[0-9]+", "digits");
        let (value, cursor) = parser.parse(Cursor::new("12345x")).unwrap();
        assert_eq!(value, "12345");
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_pattern_is_anchored_at_cursor() {
        let parser = pattern("[0-9]+", "digits");
        let failure = parser.parse(Cursor::new("ab12")).unwrap_err();
        assert_eq!(failure.expected, "digits");
        assert_eq!(failure.position, 0);

        // Matching resumes from the cursor, not from the start of the text
        let (value, _) = parser.parse(Cursor::new("ab12").advance(2)).unwrap();
        assert_eq!(value, "12");
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        // Without grouping, "^a|b" would let "b" match anywhere
        let parser = pattern("a|b", "a or b");
        assert!(parser.parse(Cursor::new("xb")).is_err());
        assert!(parser.parse(Cursor::new("bx")).is_ok());
    }

    #[test]
    fn test_alternation_is_leftmost_first() {
        let (value, cursor) = pattern("a|ab", "a").parse(Cursor::new("ab")).unwrap();
        assert_eq!(value, "a");
        assert_eq!(cursor.position(), 1);

        let (value, _) = pattern("ab|a", "a").parse(Cursor::new("ab")).unwrap();
        assert_eq!(value, "ab");
    }

    #[test]
    fn test_compile_error_is_failure() {
        let parser = pattern("[unclosed", "broken");
        let failure = parser.parse(Cursor::new("[unclosed")).unwrap_err();
        assert!(failure.expected.starts_with("valid pattern ("));
        assert_eq!(failure.position, 0);
        assert_eq!(parser.label(), "broken");
    }
}
