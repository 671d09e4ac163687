use super::*;

/// Pull-based scanner over a character stream.
///
/// Every call to [`Lexer::next_token`] either yields a token or reports one
/// lexical error, and always moves the cursor forward unless it is already
/// at end of input, so repeated calls reach `Eof`.
#[derive(Debug, Clone)]
pub struct Lexer {
  cursor: Cursor,
  finished: bool,
  lexeme: String,
  malformed_run: bool,
  start: Position,
}

impl Lexer {
  pub fn new(src: &str) -> Self {
    Self::from_chars(src.chars())
  }

  pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
    Lexer {
      cursor: Cursor::new(chars),
      finished: false,
      lexeme: String::new(),
      malformed_run: false,
      start: Position::new(),
    }
  }

  pub fn position(&self) -> Position {
    self.cursor.position()
  }

  pub fn next_token(&mut self) -> Result<Token, LexError> {
    self.lexeme.clear();

    if self.malformed_run {
      if let Some(c) = self.cursor.peek().filter(|c| is_word(*c)) {
        self.start = self.cursor.position();
        return report(Err(self.invalid_start(c)));
      }

      self.malformed_run = false;
    }

    self.skip_whitespace();

    self.start = self.cursor.position();

    let Some(c) = self.cursor.peek() else {
      return report(Ok(self.token(TokenKind::Eof)));
    };

    let result = match CharClass::of(c) {
      CharClass::Letter => Ok(self.identifier()),
      CharClass::Digit => self.number(c),
      CharClass::Operator if self.at_signed_number(c) => self.number(c),
      CharClass::Operator | CharClass::Punctuation => self.operator(c),
      CharClass::Quote => self.string(),
      CharClass::Underscore => Err(self.malformed(c)),
      CharClass::Unrecognized | CharClass::Whitespace => {
        Err(self.unexpected(c))
      }
    };

    report(result)
  }

  fn at_signed_number(&self, c: char) -> bool {
    is_sign(c) && self.cursor.peek_next().is_some_and(is_digit)
  }

  fn bump(&mut self) -> Option<char> {
    let c = self.cursor.advance()?;
    self.lexeme.push(c);
    Some(c)
  }

  fn bump_while(&mut self, predicate: fn(char) -> bool) {
    while self.cursor.peek().is_some_and(predicate) {
      self.bump();
    }
  }

  fn expect(&mut self, expected: char) -> bool {
    if self.cursor.peek() == Some(expected) {
      self.bump();
      true
    } else {
      false
    }
  }

  fn identifier(&mut self) -> Token {
    self.bump_while(is_word);

    let kind = keyword(&self.lexeme).unwrap_or(TokenKind::Id);

    self.token(kind)
  }

  fn invalid_start(&mut self, character: char) -> LexError {
    self.cursor.advance();

    LexError::InvalidStart {
      character,
      position: self.start,
    }
  }

  // Every further word character of the run is reported on later calls.
  fn malformed(&mut self, character: char) -> LexError {
    self.malformed_run = true;
    self.invalid_start(character)
  }

  fn number(&mut self, first: char) -> Result<Token, LexError> {
    let mut end = usize::from(is_sign(first));

    while self.cursor.peek_nth(end).is_some_and(is_digit) {
      end += 1;
    }

    if self.cursor.peek_nth(end).is_some_and(is_word) {
      return Err(self.malformed(first));
    }

    if is_sign(first) {
      self.bump();
    }

    self.bump_while(is_digit);

    Ok(self.token(TokenKind::IntLiteral))
  }

  fn operator(&mut self, c: char) -> Result<Token, LexError> {
    self.bump();

    let kind = match c {
      ',' => TokenKind::Comma,
      '[' => TokenKind::LBracket,
      ']' => TokenKind::RBracket,
      '{' => TokenKind::LCurly,
      '}' => TokenKind::RCurly,
      '(' => TokenKind::LParen,
      ')' => TokenKind::RParen,
      ';' => TokenKind::Semicolon,
      '+' => TokenKind::Plus,
      '-' => TokenKind::Minus,
      '*' => TokenKind::Times,
      '/' => TokenKind::Div,
      '>' if self.expect('=') => TokenKind::Geq,
      '>' => TokenKind::Gt,
      '<' if self.expect('=') => TokenKind::Leq,
      '<' => TokenKind::Lt,
      '=' if self.expect('=') => TokenKind::EqEq,
      '=' => TokenKind::Eql,
      '!' if self.expect('=') => TokenKind::Neq,
      character => {
        return Err(LexError::UnexpectedCharacter {
          character,
          position: self.start,
        });
      }
    };

    Ok(self.token(kind))
  }

  fn skip_whitespace(&mut self) {
    while self.cursor.peek().is_some_and(is_whitespace) {
      self.cursor.advance();
    }
  }

  fn string(&mut self) -> Result<Token, LexError> {
    self.cursor.advance();

    loop {
      match self.cursor.peek() {
        Some('"') => {
          self.cursor.advance();
          return Ok(self.token(TokenKind::StringLiteral));
        }
        Some('\\') => {
          self.bump();

          if self.bump().is_none() {
            return Err(self.unterminated_string());
          }
        }
        Some('\n') | None => return Err(self.unterminated_string()),
        Some(_) => {
          self.bump();
        }
      }
    }
  }

  fn token(&mut self, kind: TokenKind) -> Token {
    Token::new(kind, mem::take(&mut self.lexeme), self.start)
  }

  fn unexpected(&mut self, character: char) -> LexError {
    self.cursor.advance();

    LexError::UnexpectedCharacter {
      character,
      position: self.start,
    }
  }

  fn unterminated_string(&mut self) -> LexError {
    debug!(
      line = self.start.line,
      column = self.start.column,
      "skipping to end of input after unterminated string"
    );

    self.cursor.advance_to_end();

    LexError::UnterminatedString {
      position: self.start,
    }
  }
}

fn report(result: Result<Token, LexError>) -> Result<Token, LexError> {
  match &result {
    Ok(token) => trace!(
      kind = %token.kind,
      line = token.line,
      column = token.column,
      text = ?token.text,
      "token"
    ),
    Err(error) => debug!(%error, "lexical error"),
  }

  result
}

impl Iterator for Lexer {
  type Item = Result<Token, LexError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.finished {
      return None;
    }

    let result = self.next_token();

    if matches!(&result, Ok(token) if token.is_eof()) {
      self.finished = true;
    }

    Some(result)
  }
}

/// Scans all of `src`, splitting tokens from errors. The token list always
/// ends with the end-of-input token.
pub fn tokenize(src: &str) -> (Vec<Token>, Vec<LexError>) {
  let mut tokens = Vec::new();
  let mut errors = Vec::new();

  for result in Lexer::new(src) {
    match result {
      Ok(token) => tokens.push(token),
      Err(error) => errors.push(error),
    }
  }

  (tokens, errors)
}
