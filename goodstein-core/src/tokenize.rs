use crate::error::{Error, Result};
use crate::types::token::*;
use core::iter::Peekable;

#[derive(Debug, Clone, PartialEq, Eq)]
enum CharType {
  Number,
  Symbol, // +*^()
  Space,
  Other,
}

fn get_char_type(c: char) -> CharType {
  match c {
    '0'..='9' => CharType::Number,
    '+' | '*' | '^' | '(' | ')' => CharType::Symbol,
    _ if c.is_whitespace() => CharType::Space,
    _ => CharType::Other,
  }
}

pub struct Tokenizer<'a> {
  input: &'a str,
  char_indices: Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
  pub fn new(input: &'a str) -> Self {
    Tokenizer {
      input,
      char_indices: input.char_indices().peekable(),
    }
  }

  fn skip_space(&mut self) {
    while let Some((_, c)) = self.char_indices.peek() {
      if get_char_type(*c) == CharType::Space {
        self.char_indices.next();
      } else {
        break;
      }
    }
  }

  fn make_token(&self, ty: TokenType, i0: usize, i1: usize) -> Token<'a> {
    Token {
      str: &self.input[i0..i1],
      ty,
      pos: i0,
    }
  }

  fn number_literal(&mut self, i0: usize) -> Token<'a> {
    let mut i1 = self.input.len();
    while let Some((i, c)) = self.char_indices.peek() {
      if get_char_type(*c) != CharType::Number {
        i1 = *i;
        break;
      }
      self.char_indices.next();
    }
    self.make_token(TokenType::Number, i0, i1)
  }
}

impl<'a> Iterator for Tokenizer<'a> {
  type Item = Result<Token<'a>>;

  fn next(&mut self) -> Option<Self::Item> {
    self.skip_space();
    let (i0, c0) = *self.char_indices.peek()?;
    match get_char_type(c0) {
      CharType::Number => Some(Ok(self.number_literal(i0))),
      CharType::Symbol => {
        self.char_indices.next();
        Some(Ok(self.make_token(TokenType::Symbol, i0, i0 + 1)))
      }
      CharType::Space => unreachable!(),
      CharType::Other => {
        // stop here; the rest of the input is not tokenized
        while self.char_indices.next().is_some() {}
        Some(Err(Error::Malformed {
          pos: i0,
          msg: format!("unexpected character {:?}", c0),
        }))
      }
    }
  }
}

pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>> {
  Tokenizer::new(input).collect()
}

#[cfg(test)]
#[test]
fn test_tokenizer() {
  let input = "2^(2^2+2) + 12*3";
  let tokens = tokenize(input).unwrap();
  let strs: Vec<&str> = tokens.iter().map(|t| t.str).collect();
  assert_eq!(
    strs,
    vec!["2", "^", "(", "2", "^", "2", "+", "2", ")", "+", "12", "*", "3"]
  );
  assert_eq!(tokens[10].ty, TokenType::Number);
  assert_eq!(tokens[10].pos, 12);
  assert!(tokens[9].is_symbol("+"));
}

#[cfg(test)]
#[test]
fn test_tokenizer_errors() {
  match tokenize("2+b") {
    Err(Error::Malformed { pos, .. }) => assert_eq!(pos, 2),
    r => panic!("unexpected {:?}", r),
  }
  assert!(tokenize("3-1").is_err());
  assert_eq!(tokenize("   ").unwrap(), vec![]);
}
