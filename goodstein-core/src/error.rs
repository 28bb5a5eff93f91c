use crate::types::Nat;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("malformed expression at byte {pos}: {msg}")]
  Malformed { pos: usize, msg: String },

  #[error("internal invariant violated: {0}")]
  InvariantViolation(String),

  #[error("exponent {0} is too large to evaluate")]
  ExponentTooLarge(Nat),
}

impl Error {
  /// Whether the error points at a bug in expansion or evaluation rather
  /// than at bad input.
  pub fn is_internal(&self) -> bool {
    matches!(self, Error::Malformed { .. } | Error::InvariantViolation(_))
  }
}

pub type Result<T> = std::result::Result<T, Error>;
