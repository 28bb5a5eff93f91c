use crate::error::{Error, Result};
use crate::parse::parse;
use crate::types::tree::*;
use crate::types::Nat;
use num_traits::{One, ToPrimitive, Zero};

fn power(x: Nat, e: Nat) -> Result<Nat> {
  if e.is_zero() {
    return Ok(Nat::one());
  }
  if x.is_zero() || x.is_one() {
    return Ok(x);
  }
  match e.to_u32() {
    Some(e) => Ok(x.pow(e)),
    None => Err(Error::ExponentTooLarge(e)),
  }
}

impl Expr {
  /// Exact value of a base-free expression.
  pub fn eval(&self) -> Result<Nat> {
    match self {
      Expr::Num(n) => Ok(n.clone()),
      Expr::Base => Err(Error::InvariantViolation(
        "base marker left in expression".to_string(),
      )),
      Expr::Add(es) => {
        let mut n = Nat::zero();
        for e in es {
          n += e.eval()?;
        }
        Ok(n)
      }
      Expr::Mul(es) => {
        let mut n = Nat::one();
        for e in es {
          n *= e.eval()?;
        }
        Ok(n)
      }
      Expr::Pow(l, r) => power(l.eval()?, r.eval()?),
    }
  }
}

pub fn eval_str(code: &str) -> Result<Nat> {
  parse(code)?.eval()
}

#[cfg(test)]
fn ev(s: &str) -> Nat {
  eval_str(s).unwrap()
}

#[cfg(test)]
#[test]
fn test_eval() {
  assert_eq!(ev("2+3*4^2"), Nat::from(50u32));
  assert_eq!(ev("2^3^2"), Nat::from(512u32));
  assert_eq!(ev("(2+3)*4"), Nat::from(20u32));
  assert_eq!(ev("0^0"), Nat::one());
  assert_eq!(ev("3^(3^3)"), Nat::from(7_625_597_484_987u64));
  assert_eq!(
    ev("2^128"),
    "340282366920938463463374607431768211456"
      .parse::<Nat>()
      .unwrap()
  );
}

#[cfg(test)]
#[test]
fn test_eval_huge_exponent() {
  assert_eq!(ev("1^(2^40)"), Nat::one());
  assert_eq!(ev("0^(2^40)"), Nat::zero());
  assert_eq!(
    eval_str("2^(2^40)"),
    Err(Error::ExponentTooLarge(Nat::one() << 40))
  );
}

#[cfg(test)]
#[test]
fn test_eval_base_marker() {
  let e = Expr::add(Expr::Base, Expr::Num(Nat::one()));
  let err = e.eval().unwrap_err();
  assert!(err.is_internal());
  assert_eq!(e.bump(&Nat::from(5u32)).eval().unwrap(), Nat::from(6u32));
}

#[cfg(test)]
#[test]
fn test_eval_long_chains() {
  let ones = vec!["1"; 200_000];
  assert_eq!(ev(&ones.join("+")), Nat::from(200_000u32));
  assert_eq!(ev(&ones.join("*")), Nat::one());

  let e = Expr::sum((0..200_000).map(|_| Expr::Base).collect());
  let bumped = e.bump(&Nat::from(3u32));
  assert_eq!(bumped.eval().unwrap(), Nat::from(600_000u32));
}
