use super::*;

#[derive(Debug, Clone)]
pub(crate) struct Cursor {
  chars: Vec<char>,
  index: usize,
  position: Position,
}

impl Cursor {
  pub(crate) fn new(chars: impl IntoIterator<Item = char>) -> Self {
    Cursor {
      chars: chars.into_iter().collect(),
      index: 0,
      position: Position::new(),
    }
  }

  pub(crate) fn advance(&mut self) -> Option<char> {
    let c = self.peek()?;

    self.index += 1;
    self.position.advance(c);

    Some(c)
  }

  pub(crate) fn at_end(&self) -> bool {
    self.index >= self.chars.len()
  }

  pub(crate) fn advance_to_end(&mut self) {
    while !self.at_end() {
      self.advance();
    }
  }

  pub(crate) fn peek(&self) -> Option<char> {
    self.peek_nth(0)
  }

  pub(crate) fn peek_next(&self) -> Option<char> {
    self.peek_nth(1)
  }

  pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
    self.chars.get(self.index + n).copied()
  }

  pub(crate) fn position(&self) -> Position {
    self.position
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn peek_does_not_consume() {
    let cursor = Cursor::new("ab".chars());

    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.peek(), Some('a'));
    assert_eq!(cursor.peek_next(), Some('b'));
    assert_eq!(cursor.position(), Position::new());
  }

  #[test]
  fn advance_tracks_lines() {
    let mut cursor = Cursor::new("a\nb".chars());

    assert_eq!(cursor.advance(), Some('a'));
    assert_eq!(cursor.advance(), Some('\n'));

    let position = cursor.position();

    assert_eq!(
      (position.line, position.column, position.line_column),
      (1, 2, 0)
    );
  }

  #[test]
  fn end_of_input_is_sticky() {
    let mut cursor = Cursor::new("x".chars());

    cursor.advance();

    assert!(cursor.at_end());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.position().column, 1);
  }

  #[test]
  fn advance_to_end_keeps_position() {
    let mut cursor = Cursor::new("ab\ncd".chars());

    cursor.advance_to_end();

    let position = cursor.position();

    assert!(cursor.at_end());
    assert_eq!(
      (position.line, position.column, position.line_column),
      (1, 5, 2)
    );
  }
}
