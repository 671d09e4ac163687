use super::*;

#[derive(Debug, PartialEq, Clone, Copy, Ord, PartialOrd, Eq, Hash)]
pub enum TokenKind {
  Comma,
  Div,
  Eof,
  EqEq,
  Eql,
  False,
  Geq,
  Gt,
  Id,
  IntLiteral,
  LBracket,
  LCurly,
  Leq,
  LParen,
  Lt,
  Minus,
  Module,
  Neq,
  Plus,
  RBracket,
  RCurly,
  Return,
  RParen,
  Semicolon,
  StringLiteral,
  Times,
  While,
}

impl TokenKind {
  /// The upper-case spelling parsers and diagnostics refer to.
  pub fn name(self) -> &'static str {
    match self {
      TokenKind::Comma => "COMMA",
      TokenKind::Div => "DIV",
      TokenKind::Eof => "EOF",
      TokenKind::EqEq => "EQEQ",
      TokenKind::Eql => "EQL",
      TokenKind::False => "FALSE",
      TokenKind::Geq => "GEQ",
      TokenKind::Gt => "GT",
      TokenKind::Id => "ID",
      TokenKind::IntLiteral => "INT_LITERAL",
      TokenKind::LBracket => "LBRACKET",
      TokenKind::LCurly => "LCURLY",
      TokenKind::Leq => "LEQ",
      TokenKind::LParen => "LPAREN",
      TokenKind::Lt => "LT",
      TokenKind::Minus => "MINUS",
      TokenKind::Module => "MODULE",
      TokenKind::Neq => "NEQ",
      TokenKind::Plus => "PLUS",
      TokenKind::RBracket => "RBRACKET",
      TokenKind::RCurly => "RCURLY",
      TokenKind::Return => "RETURN",
      TokenKind::RParen => "RPAREN",
      TokenKind::Semicolon => "SEMICOLON",
      TokenKind::StringLiteral => "STRING_LITERAL",
      TokenKind::Times => "TIMES",
      TokenKind::While => "WHILE",
    }
  }

  pub fn is_keyword(self) -> bool {
    matches!(
      self,
      TokenKind::Module
        | TokenKind::False
        | TokenKind::Return
        | TokenKind::While
    )
  }
}

impl Display for TokenKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
