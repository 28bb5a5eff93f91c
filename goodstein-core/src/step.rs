use crate::cantor::cantor_normal_form;
use crate::error::Result;
use crate::types::tree::*;
use crate::types::*;
use num_traits::Zero;
use tracing::debug;

/// Bump the base of an expansion by one, evaluate, and subtract one.
pub fn step_form(cnf: &Cantor) -> Result<Nat> {
  let next_base = &cnf.base + 1u32;
  let v = cnf.bumped(&next_base).eval()?;
  if v.is_zero() {
    return Ok(v);
  }
  Ok(v - 1u32)
}

/// One Goodstein step: `G(n, b) = eval(CNF_b(n) with b -> b+1) - 1`.
pub fn goodstein_step(n: &Nat, base: u64) -> Result<Nat> {
  check_base(base)?;
  if n.is_zero() {
    return Ok(Nat::zero());
  }
  let next = step_form(&cantor_normal_form(n, base)?)?;
  debug!(base, bits = next.bits(), "goodstein step");
  Ok(next)
}

#[cfg(test)]
fn step(n: u64, b: u64) -> Nat {
  goodstein_step(&Nat::from(n), b).unwrap()
}

#[cfg(test)]
#[test]
fn test_step() {
  assert_eq!(step(3, 2), Nat::from(3u32));
  assert_eq!(step(3, 3), Nat::from(3u32));
  assert_eq!(step(3, 4), Nat::from(2u32));
  assert_eq!(step(4, 2), Nat::from(26u32));
  assert_eq!(step(26, 3), Nat::from(41u32));
  assert_eq!(step(16, 2), Nat::from(7_625_597_484_986u64));
  assert_eq!(step(1, 9), Nat::zero());
  assert_eq!(step(0, 7), Nat::zero());
}

#[cfg(test)]
#[test]
fn test_step_invalid_base() {
  use crate::error::Error;
  assert!(matches!(
    goodstein_step(&Nat::from(5u32), 1),
    Err(Error::InvalidArgument(_))
  ));
  assert!(matches!(
    goodstein_step(&Nat::zero(), 0),
    Err(Error::InvalidArgument(_))
  ));
}

#[cfg(test)]
#[test]
fn test_step_too_large() {
  use crate::error::Error;
  // 2^2^2^2 bumps to 3^3^3^3, whose top exponent 3^27 no longer fits
  let n = Nat::from(65536u32);
  assert!(matches!(
    goodstein_step(&n, 2),
    Err(Error::ExponentTooLarge(_))
  ));
}

#[cfg(test)]
#[test]
fn test_step_long_sum() {
  use crate::error::Error;
  use num_traits::One;
  // 2^200000-1 has 200000 terms; the top exponent bumps to 3^(3^(3^3)+1)+...
  let n = (Nat::one() << 200_000) - 1u32;
  assert!(matches!(
    goodstein_step(&n, 2),
    Err(Error::ExponentTooLarge(_))
  ));
}
