//! Sequential line access for text table dumps
//!
//! The cursor always sits on a line. `next` moves forward one line and
//! reports `None` once the end has been passed, which callers treat as
//! ordinary termination rather than as an error.

/// Forward-only, resettable reader over the lines of one source file
#[derive(Debug, Clone)]
pub struct LineCursor {
    lines: Vec<String>,
    source: String,
    pos: usize,
}

impl LineCursor {
    pub fn new(lines: Vec<String>, source: impl Into<String>) -> Self {
        Self {
            lines,
            source: source.into(),
            pos: 0,
        }
    }

    /// Split text on line endings (`\n` or `\r\n`)
    pub fn from_text(text: &str, source: impl Into<String>) -> Self {
        Self::new(text.lines().map(str::to_string).collect(), source)
    }

    /// Name of the file (or other source) the lines came from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line under the cursor, or `None` once past the end
    pub fn current(&self) -> Option<&str> {
        self.get(self.pos)
    }

    /// Line at an absolute index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Advance one line and return the new current line
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
        self.current()
    }

    /// Move forward until the current line satisfies `pred`.
    ///
    /// The current line is tested first. Returns false (with the cursor past
    /// the end) when no line matches.
    pub fn seek(&mut self, mut pred: impl FnMut(&str) -> bool) -> bool {
        while let Some(line) = self.current() {
            if pred(line) {
                return true;
            }
            self.pos += 1;
        }
        false
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Zero-based index of the current line
    pub fn position(&self) -> usize {
        self.pos
    }

    /// One-based line number for messages
    pub fn line_number(&self) -> usize {
        self.pos + 1
    }

    pub fn is_end_of_file_or_last_line(&self) -> bool {
        self.pos + 1 >= self.lines.len()
    }

    /// `source:line` of the current position
    pub fn location(&self) -> String {
        format!("{}:{}", self.source, self.line_number())
    }
}
