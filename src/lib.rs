//! A maximal-munch lexical scanner.
//!
//! [`Lexer`] turns a character stream into positioned [`Token`]s one pull
//! at a time. Malformed input is reported as a [`LexError`] for the
//! offending span while the scanner keeps going, so every input ends in a
//! single, repeatable end-of-input token.
//!
//! ```
//! use tokscan::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("while x >= -1");
//!
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::While);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Id);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Geq);
//! assert_eq!(lexer.next_token().unwrap().text, "-1");
//! assert!(lexer.next_token().unwrap().is_eof());
//! ```

use {
  char_class::{CharClass, is_digit, is_sign, is_whitespace, is_word},
  clap::Parser,
  cursor::Cursor,
  keyword::keyword,
  lazy_static::lazy_static,
  std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, Read, Write},
    mem,
    path::{Path, PathBuf},
  },
  thiserror::Error,
  tracing::{debug, trace},
  tracing_subscriber::EnvFilter,
};

pub use {
  arguments::Arguments,
  error::{Error, LexError},
  lexer::{Lexer, tokenize},
  position::Position,
  token::Token,
  token_kind::TokenKind,
};

mod arguments;
mod char_class;
mod cursor;
mod error;
mod keyword;
mod lexer;
mod position;
mod token;
mod token_kind;
