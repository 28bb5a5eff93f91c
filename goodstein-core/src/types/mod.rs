pub mod token;
pub mod tree;

pub type Nat = num_bigint::BigUint;

use crate::error::{Error, Result};

// Every public operation takes its base as a plain integer.
pub(crate) fn check_base(base: u64) -> Result<Nat> {
  if base < 2 {
    return Err(Error::InvalidArgument(format!(
      "base must be at least 2 (got {})",
      base
    )));
  }
  Ok(Nat::from(base))
}
