//! Configure how the top-level parse functions treat their input.
//!
//! `ParseOptions` is a plain value handed to [`crate::parse_with`]. The
//! defaults match [`crate::parse`]: trailing input is accepted and calls may
//! nest up to [`DEFAULT_MAX_DEPTH`] levels deep.
//!
//! ## Examples
//! ```
//! # use exprcomb::{ParseOptions, ParsingMode, parse_with};
//! let opts = ParseOptions {
//!     mode: ParsingMode::Strict,
//!     ..Default::default()
//! };
//! assert!(parse_with("Foo() trailing", &opts).is_err());
//! assert!(parse_with("Foo()", &opts).is_ok());
//! ```

pub use crate::cursor::DEFAULT_MAX_DEPTH;

/// Parsing mode configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsingMode {
    /// Succeed as soon as one expression is recognised; text after it is ignored
    #[default]
    Lenient,
    /// The expression must span the whole input
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Parsing mode (strict vs lenient)
    pub mode: ParsingMode,
    /// Maximum nesting of call arguments before the parse is rejected
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParsingMode::Lenient,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            mode: ParsingMode::Strict,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let opts = ParseOptions::default();
        assert_eq!(opts.mode, ParsingMode::Lenient);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_strict_keeps_default_depth() {
        let opts = ParseOptions::strict();
        assert_eq!(opts.mode, ParsingMode::Strict);
        assert_eq!(opts.max_depth, DEFAULT_MAX_DEPTH);
    }
}
