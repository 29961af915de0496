use crate::error::Failure;
use crate::parser::ParseResult;
use regex::Regex;

/// Nesting limit used by [`Cursor::new`]
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Immutable read position over a piece of source text
///
/// Every operation returns a new cursor and leaves `self` untouched, so a
/// cursor can be saved and reused freely to retry a different alternative
/// from the same position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    text: &'code str,
    /// Byte offset into `text`, never greater than `text.len()`
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(text: &'code str) -> Self {
        Self::with_max_depth(text, DEFAULT_MAX_DEPTH)
    }

    /// Create a cursor that allows at most `max_depth` nested levels
    pub fn with_max_depth(text: &'code str, max_depth: usize) -> Self {
        Cursor {
            text,
            position: 0,
            depth: 0,
            max_depth,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source(&self) -> &'code str {
        self.text
    }

    /// The unconsumed part of the source
    pub fn remaining(&self) -> &'code str {
        &self.text[self.position..]
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.text.len()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Move forward by `count` bytes, clamping at the end of the text
    ///
    /// A target inside a multi-byte character is moved back to the start of
    /// that character, so the position always stays on a char boundary.
    pub fn advance(self, count: usize) -> Self {
        let mut position = self.position.saturating_add(count).min(self.text.len());
        while !self.text.is_char_boundary(position) {
            position -= 1;
        }
        Cursor { position, ..self }
    }

    /// Match `expected` exactly at the current position
    pub fn match_literal(self, expected: &str) -> ParseResult<'code, &'code str> {
        match self.remaining().get(..expected.len()) {
            Some(found) if found == expected => Ok((found, self.advance(expected.len()))),
            _ => Err(Failure::new(expected.to_string(), self.position)),
        }
    }

    /// Match `regex` anchored at the current position
    ///
    /// A match that starts later in the remaining text does not count.
    pub fn match_pattern(
        self,
        regex: &Regex,
        label: &str,
    ) -> ParseResult<'code, &'code str> {
        match regex.find(self.remaining()) {
            Some(found) if found.start() == 0 => {
                let matched = found.as_str();
                Ok((matched, self.advance(matched.len())))
            }
            _ => Err(Failure::new(label.to_owned(), self.position)),
        }
    }

    /// Enter one nesting level
    ///
    /// Once the limit is reached this fails with a fatal failure.
    pub fn descend(self) -> ParseResult<'code, ()> {
        if self.depth >= self.max_depth {
            return Err(Failure::fatal(
                format!("nesting depth of at most {}", self.max_depth),
                self.position,
            ));
        }
        Ok((
            (),
            Cursor {
                depth: self.depth + 1,
                ..self
            },
        ))
    }

    /// Leave one nesting level
    pub fn ascend(self) -> Self {
        Cursor {
            depth: self.depth.saturating_sub(1),
            ..self
        }
    }
}
