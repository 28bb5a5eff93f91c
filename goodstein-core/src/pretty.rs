use crate::types::tree::*;
use crate::types::Nat;
use std::fmt::Write;

// binding strength, loosest first
const SUM: u8 = 0;
const PRODUCT: u8 = 1;
const POWER: u8 = 2;
const ATOM: u8 = 3;

fn level(e: &Expr) -> u8 {
  match e {
    Expr::Add(_) => SUM,
    Expr::Mul(_) => PRODUCT,
    Expr::Pow(_, _) => POWER,
    Expr::Num(_) | Expr::Base => ATOM,
  }
}

struct Pretty<'a> {
  base: Option<&'a Nat>,
  out: String,
}

impl<'a> Pretty<'a> {
  fn new(base: Option<&'a Nat>) -> Self {
    Pretty {
      base,
      out: String::new(),
    }
  }

  fn s(&mut self, s: &str) -> &mut Self {
    self.out.push_str(s);
    self
  }

  fn n(&mut self, n: &Nat) -> &mut Self {
    // writing into a String cannot fail
    let _ = write!(self.out, "{}", n);
    self
  }

  fn base(&mut self) -> &mut Self {
    match self.base {
      Some(b) => self.n(b),
      None => self.s("b"),
    }
  }

  // render `e`, parenthesized when it binds looser than `min`
  fn at(&mut self, e: &Expr, min: u8) -> &mut Self {
    if level(e) < min {
      self.s("(").e(e).s(")")
    } else {
      self.e(e)
    }
  }

  // `first` binds at `min`, every later operand one level tighter
  fn chain(&mut self, es: &[Expr], op: &str, min: u8) -> &mut Self {
    for (i, e) in es.iter().enumerate() {
      if i == 0 {
        self.at(e, min);
      } else {
        self.s(op).at(e, min + 1);
      }
    }
    self
  }

  fn e(&mut self, e: &Expr) -> &mut Self {
    match e {
      Expr::Num(n) => self.n(n),
      Expr::Base => self.base(),
      Expr::Add(es) => self.chain(es, "+", SUM),
      Expr::Mul(es) => self.chain(es, "*", PRODUCT),
      // exponents are always atoms or parenthesized, never a bare chain
      Expr::Pow(l, r) => self.at(l, ATOM).s("^").at(r, ATOM),
    }
  }

  fn finish(&mut self) -> String {
    std::mem::take(&mut self.out)
  }
}

/// Render `e` with every base marker written as the numeral `base`.
pub fn pretty(e: &Expr, base: &Nat) -> String {
  Pretty::new(Some(base)).e(e).finish()
}

impl std::fmt::Display for Expr {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&Pretty::new(None).e(self).finish())
  }
}

#[cfg(test)]
fn num(n: u32) -> Expr {
  Expr::Num(Nat::from(n))
}

#[cfg(test)]
#[test]
fn test_pretty_parens() {
  let e = Expr::pow(Expr::Base, Expr::add(Expr::Base, num(1)));
  assert_eq!(e.to_string(), "b^(b+1)");
  assert_eq!(pretty(&e, &Nat::from(3u32)), "3^(3+1)");

  let e = Expr::pow(Expr::Base, Expr::pow(Expr::Base, Expr::Base));
  assert_eq!(pretty(&e, &Nat::from(2u32)), "2^(2^2)");

  let e = Expr::mul(Expr::add(num(1), num(2)), num(3));
  assert_eq!(e.to_string(), "(1+2)*3");

  let e = Expr::add(num(1), Expr::add(num(2), num(3)));
  assert_eq!(e.to_string(), "1+(2+3)");

  let e = Expr::mul(num(2), Expr::mul(num(3), num(4)));
  assert_eq!(e.to_string(), "2*(3*4)");

  let e = Expr::pow(Expr::pow(num(2), num(3)), num(2));
  assert_eq!(e.to_string(), "(2^3)^2");
}

#[cfg(test)]
#[test]
fn test_pretty_term() {
  let e = Expr::add(
    Expr::mul(num(2), Expr::pow(Expr::Base, num(2))),
    Expr::mul(num(2), Expr::Base),
  );
  assert_eq!(pretty(&e, &Nat::from(3u32)), "2*3^2+2*3");

  let e = Expr::Add(vec![num(1), num(2), Expr::mul(num(3), num(4)), num(5)]);
  assert_eq!(e.to_string(), "1+2+3*4+5");
  let e = Expr::Mul(vec![num(2), Expr::add(num(3), num(4)), num(5)]);
  assert_eq!(e.to_string(), "2*(3+4)*5");
}

#[cfg(test)]
#[test]
fn test_pretty_long_sum() {
  let e = Expr::sum((0..200_000).map(|_| Expr::pow(Expr::Base, num(2))).collect());
  let s = pretty(&e, &Nat::from(7u32));
  assert_eq!(s.len(), 200_000 * 4 - 1);
  assert!(s.starts_with("7^2+7^2+"));
}
