//! # ExprComb - Parser Combinator Library
//!
//! A small parser combinator library together with the expression grammar
//! built on top of it.
//!
//! Parsers are stateless values implementing [`Parser`]. They read from an
//! immutable [`Cursor`] and hand back a new cursor on success, so one parser
//! can be reused for any number of inputs and shared between threads. The
//! library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Useful errors**: A failed parse names what was expected at the furthest offset reached
//! - **Composability**: Small parsers combine into larger ones using combinators
//!
//! ## Examples
//! ```
//! use exprcomb::parse;
//!
//! let expr = parse("Foo(1,true,Bar())").unwrap();
//! assert_eq!(expr.to_string(), "Foo([Number(1), Boolean(true), Bar([])])");
//!
//! let err = parse("Foo(1,").unwrap_err();
//! assert_eq!(err.expected, "Bracket: )");
//! assert_eq!(err.offset, 5);
//! ```

pub mod and;
pub mod bracket;
pub mod choice;
pub mod config;
pub mod cursor;
pub mod discard_left;
pub mod error;
pub mod expression;
pub mod grammar;
pub mod literal;
pub mod map;
pub mod nested;
pub mod parser;
pub mod pattern;
pub mod repeat;
pub mod separated_list;

pub use and::{And, AndExt, and};
pub use bracket::{Bracket, bracket};
pub use choice::{Choice, choice};
pub use config::{DEFAULT_MAX_DEPTH, ParseOptions, ParsingMode};
pub use cursor::Cursor;
pub use discard_left::{DiscardLeft, discard_left};
pub use error::{CodeLoc, Failure, ParseError, ReadablePosition};
pub use expression::{Call, Expression};
pub use grammar::{
    boolean, call, expression, identifier, number, parse, parse_complete, parse_with,
};
pub use literal::{Literal, literal};
pub use map::{Map, MapExt, map};
pub use nested::{Nested, nested};
pub use parser::{BoxExt, BoxedParser, ParseResult, Parser};
pub use pattern::{Pattern, pattern};
pub use repeat::{Repeat, repeat};
pub use separated_list::{SeparatedList, separated_list};
