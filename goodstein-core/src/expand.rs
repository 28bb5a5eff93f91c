use crate::error::Result;
use crate::pretty::pretty;
use crate::types::tree::*;
use crate::types::*;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

// Where a digit sits: the units place, the base itself, or a higher power.
pub(crate) enum Place {
  Units,
  Base,
  Power(Expr),
}

impl Place {
  pub(crate) fn of_literal(p: &Nat) -> Place {
    if p.is_zero() {
      Place::Units
    } else if p.is_one() {
      Place::Base
    } else {
      Place::Power(Expr::Num(p.clone()))
    }
  }
}

// coef * base^power, eliding a unit coefficient and the exponents 0 and 1
pub(crate) fn term_expr(coef: &Nat, place: Place) -> Expr {
  let unit = match place {
    Place::Units => return Expr::Num(coef.clone()),
    Place::Base => Expr::Base,
    Place::Power(e) => Expr::pow(Expr::Base, e),
  };
  if coef.is_one() {
    unit
  } else {
    Expr::mul(Expr::Num(coef.clone()), unit)
  }
}

// Largest power of `base` that fits a u64, and its exponent.
fn chunk_of(base: u64) -> (u64, u32) {
  let mut chunk = base;
  let mut k = 1;
  while let Some(c) = chunk.checked_mul(base) {
    chunk = c;
    k += 1;
  }
  (chunk, k)
}

// Peel off `k` digits per big division so the bignum is walked
// len / k times instead of once per digit.
pub(crate) fn expand(n: &Nat, base: u64) -> Expansion {
  let (chunk, k) = chunk_of(base);
  let chunk = Nat::from(chunk);
  let mut rest = n.clone();
  let mut power: u64 = 0;
  let mut digits = Vec::new();
  while !rest.is_zero() {
    let (q, r) = rest.div_rem(&chunk);
    // r < chunk, which fits a u64
    let mut r = r.to_u64().unwrap_or(0);
    for _ in 0..k {
      if r == 0 && q.is_zero() {
        break;
      }
      let d = r % base;
      if d != 0 {
        digits.push(Digit {
          coef: Nat::from(d),
          power: Nat::from(power),
        });
      }
      r /= base;
      power += 1;
    }
    rest = q;
  }
  digits.reverse();
  Expansion {
    base: Nat::from(base),
    digits,
  }
}

/// Write `n` in positional base `base`, dropping zero digits.
pub fn expand_in_base(n: &Nat, base: u64) -> Result<Expansion> {
  check_base(base)?;
  Ok(expand(n, base))
}

impl Expansion {
  pub fn is_zero(&self) -> bool {
    self.digits.is_empty()
  }

  pub fn to_expr(&self) -> Expr {
    let terms = self
      .digits
      .iter()
      .map(|d| term_expr(&d.coef, Place::of_literal(&d.power)))
      .collect();
    Expr::sum(terms)
  }

  /// Sum of `coef * base^power` over all digits.
  pub fn value(&self) -> Result<Nat> {
    self.to_expr().bump(&self.base).eval()
  }
}

impl std::fmt::Display for Expansion {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", pretty(&self.to_expr(), &self.base))
  }
}

#[cfg(test)]
fn expand_str(n: u64, b: u64) -> String {
  expand_in_base(&Nat::from(n), b).unwrap().to_string()
}

#[cfg(test)]
#[test]
fn test_expand_render() {
  assert_eq!(expand_str(100, 2), "2^6+2^5+2^2");
  assert_eq!(expand_str(1, 2), "1");
  assert_eq!(expand_str(2, 2), "2");
  assert_eq!(expand_str(3, 2), "2+1");
  assert_eq!(expand_str(7, 3), "2*3+1");
  assert_eq!(expand_str(18, 3), "2*3^2");
  assert_eq!(expand_str(10, 10), "10");
  assert_eq!(expand_str(100, 10), "10^2");
  assert_eq!(expand_str(45, 10), "4*10+5");
  assert_eq!(expand_str(4096, 2), "2^12");
}

#[cfg(test)]
#[test]
fn test_expand_zero() {
  for b in 2..10 {
    let e = expand_in_base(&Nat::zero(), b).unwrap();
    assert!(e.is_zero());
    assert_eq!(e.to_string(), "0");
    assert_eq!(e.value().unwrap(), Nat::zero());
  }
}

#[cfg(test)]
#[test]
fn test_expand_digits() {
  let e = expand_in_base(&Nat::from(1_000_003u64), 7).unwrap();
  let seven = Nat::from(7u32);
  for d in &e.digits {
    assert!(!d.coef.is_zero() && d.coef < seven);
  }
  for w in e.digits.windows(2) {
    assert!(w[0].power > w[1].power);
  }
  assert_eq!(e.value().unwrap(), Nat::from(1_000_003u64));
}

#[cfg(test)]
#[test]
fn test_expand_wide_bases() {
  // bases whose chunk holds a single digit, or several
  for base in [2u64, 3, 10, 1 << 32, u64::MAX] {
    let n = (Nat::from(base) + 7u32).pow(5) + 1u32;
    let e = expand_in_base(&n, base).unwrap();
    assert_eq!(e.value().unwrap(), n);
  }
  let e = expand_in_base(&Nat::from(u64::MAX), u64::MAX).unwrap();
  assert_eq!(e.to_string(), u64::MAX.to_string());
}

#[cfg(test)]
#[test]
fn test_expand_long() {
  let n = (Nat::one() << 200_000) - 1u32;
  let e = expand_in_base(&n, 2).unwrap();
  assert_eq!(e.digits.len(), 200_000);
  assert_eq!(e.digits[0].power, Nat::from(199_999u32));
  assert!(e.to_string().starts_with("2^199999+2^199998+"));
}

#[cfg(test)]
#[test]
fn test_expand_invalid_base() {
  use crate::error::Error;
  assert!(matches!(
    expand_in_base(&Nat::from(5u32), 1),
    Err(Error::InvalidArgument(_))
  ));
  assert!(matches!(
    expand_in_base(&Nat::from(5u32), 0),
    Err(Error::InvalidArgument(_))
  ));
}
