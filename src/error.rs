use super::*;

/// A recoverable lexical error. The scanner has already moved past the
/// offending input when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
  #[error("invalid start of identifier or number {character:?} at {position}")]
  InvalidStart { character: char, position: Position },
  #[error("unexpected character {character:?} at {position}")]
  UnexpectedCharacter { character: char, position: Position },
  #[error("unterminated string literal starting at {position}")]
  UnterminatedString { position: Position },
}

impl LexError {
  pub fn position(&self) -> Position {
    match self {
      LexError::InvalidStart { position, .. }
      | LexError::UnexpectedCharacter { position, .. }
      | LexError::UnterminatedString { position } => *position,
    }
  }
}

/// Failures of the command-line driver.
#[derive(Error, Debug)]
pub enum Error {
  #[error("failed to read `{}`: {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("failed to read standard input: {0}")]
  Stdin(#[source] io::Error),
  #[error("failed to write output: {0}")]
  Write(#[source] io::Error),
  #[error("failed to initialize logging: {0}")]
  Logging(String),
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn messages() {
    let position = Position {
      line: 0,
      column: 4,
      line_column: 4,
    };

    assert_eq!(
      LexError::UnexpectedCharacter {
        character: '!',
        position
      }
      .to_string(),
      "unexpected character '!' at line 0, column 4"
    );

    assert_eq!(
      LexError::UnterminatedString { position }.to_string(),
      "unterminated string literal starting at line 0, column 4"
    );

    assert_eq!(
      LexError::InvalidStart {
        character: '_',
        position
      }
      .to_string(),
      "invalid start of identifier or number '_' at line 0, column 4"
    );
  }

  #[test]
  fn position_accessor() {
    let position = Position {
      line: 5,
      column: 30,
      line_column: 1,
    };

    assert_eq!(LexError::UnterminatedString { position }.position(), position);
  }
}
