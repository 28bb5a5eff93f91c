use crate::types::Nat;

/// Arithmetic tree over `+ * ^`.
///
/// Sums and products are flat lists, so a long chain of terms never nests.
/// `Base` marks a place where the base of a hereditary expansion stands.
/// It is the only node touched by [`Expr::bump`] and has no value of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  Num(Nat),
  Base,
  Add(Vec<Expr>),
  Mul(Vec<Expr>),
  Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
  pub fn add(l: Expr, r: Expr) -> Expr {
    Expr::Add(vec![l, r])
  }
  pub fn mul(l: Expr, r: Expr) -> Expr {
    Expr::Mul(vec![l, r])
  }
  pub fn pow(l: Expr, r: Expr) -> Expr {
    Expr::Pow(Box::new(l), Box::new(r))
  }

  /// Replace every `Base` node by the literal `to`.
  pub fn bump(&self, to: &Nat) -> Expr {
    match self {
      Expr::Num(n) => Expr::Num(n.clone()),
      Expr::Base => Expr::Num(to.clone()),
      Expr::Add(es) => Expr::Add(es.iter().map(|e| e.bump(to)).collect()),
      Expr::Mul(es) => Expr::Mul(es.iter().map(|e| e.bump(to)).collect()),
      Expr::Pow(l, r) => Expr::pow(l.bump(to), r.bump(to)),
    }
  }

  /// A sum of the given terms; the empty sum is `0`.
  pub fn sum(mut terms: Vec<Expr>) -> Expr {
    match terms.len() {
      0 => Expr::Num(Nat::from(0u32)),
      1 => terms.remove(0),
      _ => Expr::Add(terms),
    }
  }

  /// A product of the given factors; the empty product is `1`.
  pub fn product(mut factors: Vec<Expr>) -> Expr {
    match factors.len() {
      0 => Expr::Num(Nat::from(1u32)),
      1 => factors.remove(0),
      _ => Expr::Mul(factors),
    }
  }
}

/// One nonzero positional digit: `coef * base^power`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digit {
  pub coef: Nat,
  pub power: Nat,
}

/// Plain positional expansion, most significant digit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
  pub base: Nat,
  pub digits: Vec<Digit>,
}

/// A summand of a hereditary expansion. `coef` is a digit in `[1, base)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
  pub coef: Nat,
  pub power: Hereditary,
}

/// Hereditary base-b notation (Cantor normal form to base b).
///
/// `Lit` holds a numeral below the base. A value at or above the base is a
/// `Sum` of terms with strictly decreasing powers, and every power at or
/// above the base is expanded again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hereditary {
  Lit(Nat),
  Sum(Vec<Term>),
}

/// A hereditary expansion together with the base it was taken in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cantor {
  pub base: Nat,
  pub form: Hereditary,
}
