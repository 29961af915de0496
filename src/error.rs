use std::borrow::Cow;
use thiserror::Error;

/// A failed match attempt
///
/// Carries what was expected and the offset where that expectation was not
/// met. The offset may lie beyond the cursor the attempt started from when a
/// sequence failed part way through, which is what lets [`crate::choice`]
/// pick the alternative that progressed furthest.
///
/// A fatal failure ends the whole parse: combinators that would otherwise
/// recover from a failure, by trying another alternative or by ending a
/// list, pass it through unchanged instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} at offset {position}")]
pub struct Failure {
    pub expected: Cow<'static, str>,
    pub position: usize,
    fatal: bool,
}

impl Failure {
    pub fn new(expected: impl Into<Cow<'static, str>>, position: usize) -> Self {
        Failure {
            expected: expected.into(),
            position,
            fatal: false,
        }
    }

    /// A failure that no enclosing combinator recovers from
    pub fn fatal(expected: impl Into<Cow<'static, str>>, position: usize) -> Self {
        Failure {
            fatal: true,
            ..Failure::new(expected, position)
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Prefix the expectation with the name of an enclosing combinator
    ///
    /// Fatal failures keep their expectation as is.
    pub fn prefixed(self, context: &str) -> Self {
        if self.fatal {
            return self;
        }
        Failure {
            expected: format!("{}: {}", context, self.expected).into(),
            ..self
        }
    }
}

#[derive(Debug)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The offset in `code` where parsing stopped
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        let mut loc = loc.min(code.len());
        while !code.is_char_boundary(loc) {
            loc -= 1;
        }
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Note: We return byte offset instead of column number because column
    /// calculation depends on encoding and on how tabs and wide characters
    /// are rendered. The byte offset within the line is unambiguous.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.code[..self.loc];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // split keeps a trailing empty line so an error right after a final
        // newline still gets a line to point at
        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// Error returned by the top-level parse functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} at offset {offset} (line {line}, byte offset {column})")]
pub struct ParseError {
    /// What the parser expected to find
    pub expected: String,
    /// 0-based byte offset of the unmet expectation
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// Byte offset within `line`
    pub column: usize,
}

impl ParseError {
    pub fn from_failure(source: &str, failure: Failure) -> Self {
        let loc = CodeLoc::new(source, failure.position);
        let pos = loc.readable_position();
        ParseError {
            expected: failure.expected.into_owned(),
            offset: loc.position(),
            line: pos.line,
            column: pos.byte_offset,
        }
    }

    /// Render the error together with the surrounding lines of `source`
    ///
    /// `source` must be the text this error was produced from.
    pub fn report(&self, source: &str) -> String {
        let mut out = format!(
            "Syntax error at line {}, byte offset {}: expected {}\n\n",
            self.line, self.column, self.expected
        );
        for line in CodeLoc::new(source, self.offset).context_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
