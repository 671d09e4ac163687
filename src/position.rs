use super::*;

/// A zero-based location in the input.
///
/// `column` counts every character consumed since the start of the input
/// and is never reset. `line_column` restarts at zero after every newline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
  pub line: usize,
  pub column: usize,
  pub line_column: usize,
}

impl Position {
  pub fn new() -> Self {
    Position {
      line: 0,
      column: 0,
      line_column: 0,
    }
  }

  pub fn advance(&mut self, c: char) {
    self.column += 1;

    if c == '\n' {
      self.line += 1;
      self.line_column = 0;
    } else {
      self.line_column += 1;
    }
  }
}

impl Display for Position {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "line {}, column {}", self.line, self.column)
  }
}
