use crate::error::Result;
use crate::expand::{expand, term_expr, Place};
use crate::pretty::pretty;
use crate::types::tree::*;
use crate::types::*;
use num_traits::{ToPrimitive, Zero};
use tracing::trace;

// Expand `n`, then every power that is not below the base, recursively.
// Digits are already below the base. A power p of a value n >= b >= 2
// satisfies p < n, so the recursion bottoms out.
pub(crate) fn hereditary(n: &Nat, base: u64) -> Hereditary {
  if matches!(n.to_u64(), Some(v) if v < base) {
    return Hereditary::Lit(n.clone());
  }
  let terms = expand(n, base)
    .digits
    .into_iter()
    .map(|d| Term {
      power: hereditary(&d.power, base),
      coef: d.coef,
    })
    .collect();
  Hereditary::Sum(terms)
}

/// Write `n` in hereditary base-`base` notation.
pub fn cantor_normal_form(n: &Nat, base: u64) -> Result<Cantor> {
  let b = check_base(base)?;
  let form = hereditary(n, base);
  trace!(base, bits = n.bits(), "normalized");
  Ok(Cantor { base: b, form })
}

impl Hereditary {
  pub fn is_zero(&self) -> bool {
    match self {
      Hereditary::Lit(n) => n.is_zero(),
      Hereditary::Sum(terms) => terms.is_empty(),
    }
  }

  fn place(&self) -> Place {
    match self {
      Hereditary::Lit(p) => Place::of_literal(p),
      Hereditary::Sum(_) => Place::Power(self.to_expr()),
    }
  }

  /// The expression tree, with the base left as a marker.
  pub fn to_expr(&self) -> Expr {
    match self {
      Hereditary::Lit(n) => Expr::Num(n.clone()),
      Hereditary::Sum(terms) => Expr::sum(
        terms
          .iter()
          .map(|t| term_expr(&t.coef, t.power.place()))
          .collect(),
      ),
    }
  }

  /// Largest numeral written anywhere in the expansion, counting the base.
  pub fn max_numeral(&self, base: &Nat) -> Nat {
    match self {
      Hereditary::Lit(n) => n.clone(),
      Hereditary::Sum(terms) => terms
        .iter()
        .map(|t| t.power.max_numeral(base).max(t.coef.clone()))
        .fold(base.clone(), Nat::max),
    }
  }
}

impl Cantor {
  /// Value of the expansion read in its own base.
  pub fn value(&self) -> Result<Nat> {
    self.form.to_expr().bump(&self.base).eval()
  }

  /// The expansion with its base replaced by `to`, unevaluated.
  pub fn bumped(&self, to: &Nat) -> Expr {
    self.form.to_expr().bump(to)
  }
}

impl std::fmt::Display for Cantor {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", pretty(&self.form.to_expr(), &self.base))
  }
}

#[cfg(test)]
fn cnf_str(n: u64, b: u64) -> String {
  cantor_normal_form(&Nat::from(n), b).unwrap().to_string()
}

#[cfg(test)]
#[test]
fn test_cantor_small() {
  assert_eq!(cnf_str(0, 2), "0");
  assert_eq!(cnf_str(1, 2), "1");
  assert_eq!(cnf_str(2, 2), "2");
  assert_eq!(cnf_str(3, 2), "2+1");
  assert_eq!(cnf_str(4, 2), "2^2");
  assert_eq!(cnf_str(16, 2), "2^(2^2)");
  assert_eq!(cnf_str(27, 3), "3^3");
  assert_eq!(cnf_str(28, 3), "3^3+1");
  assert_eq!(cnf_str(81, 3), "3^(3+1)");
  assert_eq!(cnf_str(26, 3), "2*3^2+2*3+2");
}

#[cfg(test)]
#[test]
fn test_cantor_nested() {
  assert_eq!(cnf_str(100, 2), "2^(2^2+2)+2^(2^2+1)+2^2");
  assert_eq!(cnf_str(266, 2), "2^(2^(2+1))+2^(2+1)+2");
  assert_eq!(cnf_str(4096, 2), "2^(2^(2+1)+2^2)");
  assert_eq!(cnf_str(1_000_000_000_000, 10), "10^(10+2)");
}

#[cfg(test)]
#[test]
fn test_cantor_value() {
  for n in [0u64, 1, 5, 100, 266, 4096, 123_456_789] {
    for b in 2..12 {
      let c = cantor_normal_form(&Nat::from(n), b).unwrap();
      assert_eq!(c.value().unwrap(), Nat::from(n));
      assert!(c.form.max_numeral(&c.base) <= c.base);
    }
  }
}

#[cfg(test)]
#[test]
fn test_cantor_invalid_base() {
  use crate::error::Error;
  assert!(matches!(
    cantor_normal_form(&Nat::from(3u32), 1),
    Err(Error::InvalidArgument(_))
  ));
}

#[cfg(test)]
#[test]
fn test_cantor_long_sum() {
  use num_traits::One;
  let n = (Nat::one() << 200_000) - 1u32;
  let c = cantor_normal_form(&n, 2).unwrap();
  match &c.form {
    Hereditary::Sum(terms) => assert_eq!(terms.len(), 200_000),
    f => panic!("unexpected {:?}", f),
  }
  assert_eq!(c.form.max_numeral(&c.base), Nat::from(2u32));
  let s = c.to_string();
  assert!(s.starts_with("2^(2^(2^(2^2)+1)+2^(2^(2^2))+"));
  assert!(s.ends_with("+2^(2+1)+2^2+2+1"));
}
