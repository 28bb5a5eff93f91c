use crate::cantor::cantor_normal_form;
use crate::error::{Error, Result};
use crate::step::step_form;
use crate::types::tree::*;
use crate::types::*;
use num_traits::Zero;
use tracing::debug;

/// One printed term of a Goodstein sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqTerm {
  /// 1-based term number.
  pub index: u64,
  /// Base the value is written in, `index + 1`.
  pub base: u64,
  pub value: Nat,
  pub cnf: Cantor,
}

/// Lazily computed Goodstein sequence of at most `len` terms.
///
/// The iterator ends early right after yielding a zero term. A failing step
/// is yielded once as an error, after which the iterator is exhausted.
pub struct Sequence {
  value: Nat,
  last: Option<Cantor>,
  index: u64,
  len: u64,
  done: bool,
}

impl Sequence {
  pub fn new(initial: Nat, len: u64) -> Result<Self> {
    if len == 0 {
      return Err(Error::InvalidArgument(
        "sequence length must be at least 1".to_string(),
      ));
    }
    if len == u64::MAX {
      return Err(Error::InvalidArgument(format!(
        "sequence length must be below {}",
        u64::MAX
      )));
    }
    Ok(Sequence {
      value: initial,
      last: None,
      index: 0,
      len,
      done: false,
    })
  }

  fn advance(&mut self) -> Result<SeqTerm> {
    if let Some(cnf) = self.last.take() {
      self.value = step_form(&cnf)?;
    }
    self.index += 1;
    let base = self.index + 1;
    let cnf = cantor_normal_form(&self.value, base)?;
    debug!(term = self.index, base, bits = self.value.bits(), "term");
    self.last = Some(cnf.clone());
    Ok(SeqTerm {
      index: self.index,
      base,
      value: self.value.clone(),
      cnf,
    })
  }
}

impl Iterator for Sequence {
  type Item = Result<SeqTerm>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done || self.index >= self.len {
      return None;
    }
    let term = self.advance();
    match &term {
      Ok(t) if t.value.is_zero() => self.done = true,
      Ok(_) => {}
      Err(_) => self.done = true,
    }
    Some(term)
  }
}

/// Collect the first `len` terms of the sequence starting at `n`.
pub fn goodstein(n: &Nat, len: u64) -> Result<Vec<SeqTerm>> {
  Sequence::new(n.clone(), len)?.collect()
}

#[cfg(test)]
#[test]
fn test_sequence_three() {
  let terms = goodstein(&Nat::from(3u32), 6).unwrap();
  let values: Vec<Nat> = terms.iter().map(|t| t.value.clone()).collect();
  let expected: Vec<Nat> = [3u32, 3, 3, 2, 1, 0].iter().map(|&v| Nat::from(v)).collect();
  assert_eq!(values, expected);
  let bases: Vec<u64> = terms.iter().map(|t| t.base).collect();
  assert_eq!(bases, vec![2, 3, 4, 5, 6, 7]);
  let forms: Vec<String> = terms.iter().map(|t| t.cnf.to_string()).collect();
  assert_eq!(forms, vec!["2+1", "3", "3", "2", "1", "0"]);
}

#[cfg(test)]
#[test]
fn test_sequence_stops_at_zero() {
  let terms = goodstein(&Nat::from(3u32), 100).unwrap();
  assert_eq!(terms.len(), 6);
  assert_eq!(terms.last().unwrap().index, 6);

  let terms = goodstein(&Nat::zero(), 5).unwrap();
  assert_eq!(terms.len(), 1);
  assert_eq!(terms[0].cnf.to_string(), "0");
}

#[cfg(test)]
#[test]
fn test_sequence_four() {
  let terms = goodstein(&Nat::from(4u32), 5).unwrap();
  let values: Vec<Nat> = terms.iter().map(|t| t.value.clone()).collect();
  let expected: Vec<Nat> = [4u32, 26, 41, 60, 83].iter().map(|&v| Nat::from(v)).collect();
  assert_eq!(values, expected);
  assert_eq!(terms[1].cnf.to_string(), "2*3^2+2*3+2");
}

#[cfg(test)]
#[test]
fn test_sequence_growth() {
  let terms = goodstein(&Nat::from(19u32), 4).unwrap();
  assert_eq!(terms[1].value, Nat::from(7_625_597_484_990u64));
  assert_eq!(terms[2].cnf.to_string(), "4^(4^4)+3");
  let last = &terms[3];
  assert_eq!(last.value, Nat::from(5u32).pow(3125) + 2u32);
  assert_eq!(last.value.to_string().len(), 2185);
  assert_eq!(last.cnf.to_string(), "5^(5^5)+2");
}

#[cfg(test)]
#[test]
fn test_sequence_invalid_length() {
  assert!(matches!(
    Sequence::new(Nat::from(3u32), 0),
    Err(Error::InvalidArgument(_))
  ));
}

#[cfg(test)]
#[test]
fn test_sequence_error_ends_iteration() {
  let mut seq = Sequence::new(Nat::from(65536u32), 3).unwrap();
  assert!(seq.next().unwrap().is_ok());
  assert!(matches!(seq.next(), Some(Err(Error::ExponentTooLarge(_)))));
  assert!(seq.next().is_none());
}
