use super::*;

#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub(crate) enum CharClass {
  Digit,
  Letter,
  Operator,
  Punctuation,
  Quote,
  Underscore,
  Unrecognized,
  Whitespace,
}

impl CharClass {
  pub(crate) fn of(c: char) -> Self {
    match c {
      c if is_letter(c) => CharClass::Letter,
      c if is_digit(c) => CharClass::Digit,
      '_' => CharClass::Underscore,
      '"' => CharClass::Quote,
      c if is_whitespace(c) => CharClass::Whitespace,
      c if is_punctuation(c) => CharClass::Punctuation,
      c if is_operator_start(c) => CharClass::Operator,
      _ => CharClass::Unrecognized,
    }
  }
}

pub(crate) fn is_letter(c: char) -> bool {
  c.is_ascii_alphabetic()
}

pub(crate) fn is_digit(c: char) -> bool {
  c.is_ascii_digit()
}

pub(crate) fn is_sign(c: char) -> bool {
  c == '+' || c == '-'
}

pub(crate) fn is_word(c: char) -> bool {
  is_letter(c) || is_digit(c) || c == '_'
}

pub(crate) fn is_whitespace(c: char) -> bool {
  matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub(crate) fn is_punctuation(c: char) -> bool {
  matches!(c, ',' | '[' | ']' | '{' | '}' | '(' | ')' | ';')
}

pub(crate) fn is_operator_start(c: char) -> bool {
  matches!(c, '+' | '-' | '*' | '/' | '>' | '<' | '=' | '!')
}
