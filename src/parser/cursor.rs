/// A line as seen by the grammars, or the end-of-input sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Text(&'a str),
    End,
}

impl<'a> Line<'a> {
    /// Text of the line, `None` at end of input
    pub fn text(self) -> Option<&'a str> {
        match self {
            Line::Text(text) => Some(text),
            Line::End => None,
        }
    }
}

/// Forward-only reader over captured tool output
///
/// Moving past the last line is not an error: the cursor parks on
/// [`Line::End`] and stays there.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: &'a [String],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, pos: 0 }
    }

    /// The line under the cursor
    pub fn current(&self) -> Line<'a> {
        self.lines
            .get(self.pos)
            .map_or(Line::End, |line| Line::Text(line.as_str()))
    }

    /// Step to the next line and return it
    pub fn advance(&mut self) -> Line<'a> {
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
        self.current()
    }

    /// Index of the current line
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Lines not yet consumed, starting with the current one
    pub fn remaining(&self) -> &'a [String] {
        &self.lines[self.pos..]
    }
}

/// Split captured output into lines, keeping each line terminator
///
/// Concatenating the result gives back the input unchanged.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}
