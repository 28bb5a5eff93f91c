use goodstein_core::tokenize::tokenize;
use goodstein_core::types::token::TokenType;
use goodstein_core::{cantor_normal_form, eval_str, expand_in_base, goodstein_step, Nat};
use proptest::prelude::*;

fn nat() -> impl Strategy<Value = Nat> {
  prop::collection::vec(any::<u32>(), 0..5).prop_map(Nat::new)
}

proptest! {
  /// Summing `coef * base^power` over the expansion gives back `n`.
  #[test]
  fn prop_expansion_reconstructs(n in nat(), b in 2u64..40) {
    let e = expand_in_base(&n, b).unwrap();
    let mut sum = Nat::from(0u32);
    for d in &e.digits {
      let p: u32 = (&d.power).try_into().unwrap();
      sum += &d.coef * Nat::from(b).pow(p);
    }
    prop_assert_eq!(&sum, &n);
    prop_assert_eq!(eval_str(&e.to_string()).unwrap(), n);
  }

  #[test]
  fn prop_cantor_evaluates_to_n(n in nat(), b in 2u64..40) {
    let c = cantor_normal_form(&n, b).unwrap();
    prop_assert_eq!(eval_str(&c.to_string()).unwrap(), n);
  }

  /// No numeral in the rendered form exceeds the base.
  #[test]
  fn prop_cantor_fully_normalized(n in nat(), b in 2u64..40) {
    let c = cantor_normal_form(&n, b).unwrap();
    prop_assert!(c.form.max_numeral(&c.base) <= c.base);
    let s = c.to_string();
    for t in tokenize(&s).unwrap() {
      if t.ty == TokenType::Number {
        prop_assert!(t.str.parse::<Nat>().unwrap() <= Nat::from(b));
      }
    }
  }

  #[test]
  fn prop_cantor_idempotent(n in nat(), b in 2u64..40) {
    let s = cantor_normal_form(&n, b).unwrap().to_string();
    let again = cantor_normal_form(&eval_str(&s).unwrap(), b).unwrap().to_string();
    prop_assert_eq!(again, s);
  }

  /// Re-reading the printed form and bumping it through the tree agrees
  /// with the step, and the bump itself never shrinks the value.
  #[test]
  fn prop_step_from_printed_form(n in 1u64..1_000_000, b in 2u64..20) {
    let n = Nat::from(n);
    let next = goodstein_step(&n, b).unwrap();
    let c = cantor_normal_form(&n, b).unwrap();
    prop_assert_eq!(c.value().unwrap(), eval_str(&c.to_string()).unwrap());
    prop_assert_eq!(&next + 1u32, c.bumped(&Nat::from(b + 1)).eval().unwrap());
    prop_assert!(&next + 1u32 >= n);
  }
}
