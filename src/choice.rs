use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries each alternative in order from the same cursor
///
/// The first success is returned as is. When every alternative fails, the
/// failure that got furthest into the input is reported; on a tie the
/// earlier alternative wins.
///
/// A fatal failure is returned at once and the remaining alternatives are
/// not tried.
pub struct Choice<P> {
    alternatives: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(alternatives: Vec<P>) -> Self {
        Choice { alternatives }
    }
}

impl<'code, P> Parser<'code> for Choice<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut furthest: Option<Failure> = None;

        for alternative in &self.alternatives {
            match alternative.parse(cursor) {
                Ok(success) => return Ok(success),
                Err(failure) if failure.is_fatal() => return Err(failure),
                Err(failure) => {
                    if furthest
                        .as_ref()
                        .is_none_or(|best| failure.position > best.position)
                    {
                        furthest = Some(failure);
                    }
                }
            }
        }

        let failure = furthest
            .unwrap_or_else(|| Failure::new("Choice: no alternatives", cursor.position()));
        log::trace!(
            "choice of {} exhausted at {}, reporting {:?} at {}",
            self.alternatives.len(),
            cursor.position(),
            failure.expected,
            failure.position
        );
        Err(failure)
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code, P>(alternatives: Vec<P>) -> Choice<P>
where
    P: Parser<'code>,
{
    Choice::new(alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::literal::{Literal, literal};
    use crate::map::MapExt;
    use crate::nested::nested;
    use crate::parser::BoxExt;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_first_succeeds() {
        let parser = choice(vec![literal("a"), literal("b"), literal("c")]);
        let (value, cursor) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(value, "a");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_later_succeeds() {
        let parser = choice(vec![literal("a"), literal("b"), literal("c")]);
        let (value, cursor) = parser.parse(Cursor::new("bxy")).unwrap();
        assert_eq!(value, "b");
        assert_eq!(cursor.position(), 1);

        let (value, _) = parser.parse(Cursor::new("cxy")).unwrap();
        assert_eq!(value, "c");
    }

    #[test]
    fn test_all_fail_reports_first_on_tie() {
        let parser = choice(vec![literal("a"), literal("b"), literal("c")]);
        let failure = parser.parse(Cursor::new("xyz")).unwrap_err();
        assert_eq!(failure.expected, "a");
        assert_eq!(failure.position, 0);
    }

    #[test]
    fn test_all_fail_reports_furthest() {
        init_logger();
        let parser = choice(vec![
            literal("x").boxed(),
            literal("a").and(literal("c")).map(|(a, _)| a).boxed(),
            literal("a").and(literal("b")).and(literal("c")).map(|((a, _), _)| a).boxed(),
        ]);

        // Second and third alternatives both stop at offset 1, second was first
        let failure = parser.parse(Cursor::new("aX")).unwrap_err();
        assert_eq!(failure.expected, "c");
        assert_eq!(failure.position, 1);

        // Third alternative gets to offset 2
        let failure = parser.parse(Cursor::new("abX")).unwrap_err();
        assert_eq!(failure.expected, "c");
        assert_eq!(failure.position, 2);
    }

    #[test]
    fn test_furthest_failure_deeper_alternative() {
        let parser = choice(vec![
            literal("ab").and(literal("X")).map(|(a, _)| a).boxed(),
            literal("abc").and(literal("Y")).map(|(a, _)| a).boxed(),
        ]);
        let failure = parser.parse(Cursor::new("abcZ")).unwrap_err();
        assert_eq!(failure.expected, "Y");
        assert_eq!(failure.position, 3);
    }

    #[test]
    fn test_empty_alternatives() {
        init_logger();
        let parser: Choice<Literal> = choice(vec![]);
        let failure = parser.parse(Cursor::new("abc").advance(1)).unwrap_err();
        assert_eq!(failure.expected, "Choice: no alternatives");
        assert_eq!(failure.position, 1);
    }

    #[test]
    fn test_only_last_matches() {
        let parser = choice(vec![literal("true"), literal("false"), literal("nil")]);
        let (value, cursor) = parser.parse(Cursor::new("nil")).unwrap();
        assert_eq!(value, "nil");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_fatal_failure_stops_choice() {
        init_logger();
        let parser = choice(vec![nested(literal("a")).boxed(), literal("b").boxed()]);

        let failure = parser.parse(Cursor::with_max_depth("b", 0)).unwrap_err();
        assert!(failure.is_fatal());
        assert_eq!(failure.expected, "nesting depth of at most 0");
        assert_eq!(failure.position, 0);

        let (value, _) = parser.parse(Cursor::with_max_depth("b", 1)).unwrap();
        assert_eq!(value, "b");
    }
}
