use super::*;

/// A classified lexeme.
///
/// `text` is the matched source text, except for string literals where it
/// is the body between the quotes with escapes left undecoded. `column` is
/// the character offset from the start of the input, `line_column` the
/// offset within `line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  pub text: String,
  pub line: usize,
  pub column: usize,
  pub line_column: usize,
}

impl Token {
  pub(crate) fn new(kind: TokenKind, text: String, start: Position) -> Self {
    Token {
      kind,
      text,
      line: start.line,
      column: start.column,
      line_column: start.line_column,
    }
  }

  pub fn is_eof(&self) -> bool {
    self.kind == TokenKind::Eof
  }

  pub fn position(&self) -> Position {
    Position {
      line: self.line,
      column: self.column,
      line_column: self.line_column,
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} {}:{} {:?}",
      self.kind, self.line, self.column, self.text
    )
  }
}
