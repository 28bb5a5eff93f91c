#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
  Number, // 0, 12, 340282366920938463463374607431768211456
  Symbol, // +, *, ^, (, )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
  pub str: &'a str,
  pub ty: TokenType,
  // byte offset into the input
  pub pos: usize,
}

impl<'a> Token<'a> {
  pub fn is_symbol(&self, s: &str) -> bool {
    self.ty == TokenType::Symbol && self.str == s
  }
}
