use crate::error::{Error, Result};
use crate::tokenize::*;
use crate::types::token::*;
use crate::types::tree::*;
use crate::types::Nat;

/*

e = t ('+' t)*
t = p ('*' p)*
p = a ('^' p)?
a = number
  | (e)

*/

// Parentheses and exponents nest on the call stack; hereditary forms stay
// far below this.
const MAX_DEPTH: usize = 256;

struct Parser<'a> {
  tokens: Vec<Token<'a>>,
  index: usize,
  end: usize,
  depth: usize,
}

impl<'a> Parser<'a> {
  fn new(tokens: Vec<Token<'a>>, end: usize) -> Self {
    Parser {
      tokens,
      index: 0,
      end,
      depth: 0,
    }
  }

  fn peek(&self) -> Option<&Token<'a>> {
    self.tokens.get(self.index)
  }

  fn next_is_symbol(&self, s: &str) -> bool {
    self.peek().map(|t| t.is_symbol(s)).unwrap_or(false)
  }

  fn advance(&mut self) {
    if self.index < self.tokens.len() {
      self.index += 1;
    }
  }

  fn parse_error<T>(&self, msg: &str) -> Result<T> {
    let pos = self.peek().map(|t| t.pos).unwrap_or(self.end);
    Err(Error::Malformed {
      pos,
      msg: msg.to_string(),
    })
  }

  fn enter(&mut self) -> Result<()> {
    if self.depth >= MAX_DEPTH {
      return self.parse_error("nesting too deep");
    }
    self.depth += 1;
    Ok(())
  }

  fn leave(&mut self) {
    self.depth -= 1;
  }

  fn atom(&mut self) -> Result<Expr> {
    let t = match self.peek() {
      Some(t) => t.clone(),
      None => return self.parse_error("missing expression"),
    };
    if t.ty == TokenType::Number {
      let n = match Nat::parse_bytes(t.str.as_bytes(), 10) {
        Some(n) => n,
        None => return self.parse_error("invalid number literal"),
      };
      self.advance();
      return Ok(Expr::Num(n));
    }
    if t.is_symbol("(") {
      self.enter()?;
      self.advance();
      let e = self.expr()?;
      self.leave();
      if !self.next_is_symbol(")") {
        return self.parse_error("missing ')'");
      }
      self.advance();
      return Ok(e);
    }
    self.parse_error("missing expression")
  }

  // `^` is right associative
  fn power(&mut self) -> Result<Expr> {
    let e = self.atom()?;
    if self.next_is_symbol("^") {
      self.advance();
      self.enter()?;
      let e2 = self.power()?;
      self.leave();
      return Ok(Expr::pow(e, e2));
    }
    Ok(e)
  }

  fn product(&mut self) -> Result<Expr> {
    let mut es = vec![self.power()?];
    while self.next_is_symbol("*") {
      self.advance();
      es.push(self.power()?);
    }
    Ok(Expr::product(es))
  }

  fn expr(&mut self) -> Result<Expr> {
    let mut es = vec![self.product()?];
    while self.next_is_symbol("+") {
      self.advance();
      es.push(self.product()?);
    }
    Ok(Expr::sum(es))
  }

  fn program(&mut self) -> Result<Expr> {
    let e = self.expr()?;
    if self.peek().is_some() {
      return self.parse_error("unexpected token");
    }
    Ok(e)
  }
}

/// Parse an arithmetic expression over `+ * ^ ( )` and decimal literals.
///
/// Every numeral becomes a plain `Num`; a base is never inferred from text.
pub fn parse(code: &str) -> Result<Expr> {
  let tokens = tokenize(code)?;
  let mut parser = Parser::new(tokens, code.len());
  parser.program()
}

#[cfg(test)]
fn num(n: u32) -> Expr {
  Expr::Num(Nat::from(n))
}

#[cfg(test)]
#[test]
fn test_parse_precedence() {
  assert_eq!(
    parse("2+3*4^2").unwrap(),
    Expr::add(num(2), Expr::mul(num(3), Expr::pow(num(4), num(2))))
  );
  assert_eq!(
    parse("2^3^2").unwrap(),
    Expr::pow(num(2), Expr::pow(num(3), num(2)))
  );
  assert_eq!(
    parse("(2+3)*4").unwrap(),
    Expr::mul(Expr::add(num(2), num(3)), num(4))
  );
  assert_eq!(
    parse("1+2+3").unwrap(),
    Expr::Add(vec![num(1), num(2), num(3)])
  );
  assert_eq!(
    parse("(1+2)+3").unwrap(),
    Expr::add(Expr::add(num(1), num(2)), num(3))
  );
  assert_eq!(parse(" ( ( 7 ) ) ").unwrap(), num(7));
}

#[cfg(test)]
#[test]
fn test_parse_pretty_agree() {
  for s in ["2^(2^2+2)+2^(2^2+1)+2^2", "2*3^2+2*3+2", "(1+2)*3", "2^(2^(2+1))"] {
    assert_eq!(parse(s).unwrap().to_string(), s);
  }
}

#[cfg(test)]
#[test]
fn test_parse_errors() {
  let pos = |s: &str| match parse(s) {
    Err(Error::Malformed { pos, .. }) => pos,
    r => panic!("{:?} parsed as {:?}", s, r),
  };
  assert_eq!(pos(""), 0);
  assert_eq!(pos("2+"), 2);
  assert_eq!(pos("(2"), 2);
  assert_eq!(pos("2)"), 1);
  assert_eq!(pos("2 3"), 2);
  assert_eq!(pos("*2"), 0);
  assert_eq!(pos("2^^2"), 2);
  assert!(parse("2+x").unwrap_err().is_internal());
}

#[cfg(test)]
#[test]
fn test_parse_nesting_limit() {
  let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
  assert_eq!(parse(&nested(MAX_DEPTH)).unwrap(), num(1));
  match parse(&nested(100_000)) {
    Err(Error::Malformed { pos, msg }) => {
      assert_eq!(pos, MAX_DEPTH);
      assert_eq!(msg, "nesting too deep");
    }
    r => panic!("unexpected {:?}", r),
  }

  let tower = |n: usize| vec!["1"; n + 1].join("^");
  assert!(parse(&tower(MAX_DEPTH)).is_ok());
  assert!(matches!(
    parse(&tower(100_000)),
    Err(Error::Malformed { .. })
  ));
}
