//! Forward-only cursor over the lines of a document.
//!
//! Block recognition needs lookahead: a list or table swallows every
//! following line that continues it. The cursor makes that consumption
//! explicit; it never moves backwards.

/// Cursor over an ordered sequence of lines.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Split `text` into lines (`\n` or `\r\n` terminated).
    pub fn new(text: &'a str) -> Self {
        Self::from_lines(text.lines().collect())
    }

    pub fn from_lines(lines: Vec<&'a str>) -> Self {
        Self { lines, pos: 0 }
    }

    /// The current line, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Consume and return the current line.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consume lines while `pred` holds, stopping at the first line that
    /// fails it (which is left unconsumed).
    pub fn consume_while<P>(&mut self, mut pred: P) -> Vec<&'a str>
    where
        P: FnMut(&str) -> bool,
    {
        let start = self.pos;
        while let Some(line) = self.peek() {
            if !pred(line) {
                break;
            }
            self.pos += 1;
        }
        self.lines[start..self.pos].to_vec()
    }

    /// Index of the current line.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.lines.len()
    }
}
