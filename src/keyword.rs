use super::*;

lazy_static! {
  static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
    let mut map = HashMap::new();
    map.insert("false", TokenKind::False);
    map.insert("module", TokenKind::Module);
    map.insert("return", TokenKind::Return);
    map.insert("while", TokenKind::While);
    map
  };
}

pub(crate) fn keyword(text: &str) -> Option<TokenKind> {
  KEYWORDS.get(text).copied()
}
