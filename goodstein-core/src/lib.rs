pub mod error;
pub mod types;

pub mod cantor;
pub mod eval;
pub mod expand;
pub mod parse;
pub mod pretty;
pub mod sequence;
pub mod step;
pub mod tokenize;

pub use cantor::cantor_normal_form;
pub use error::{Error, Result};
pub use eval::eval_str;
pub use expand::expand_in_base;
pub use parse::parse;
pub use sequence::{goodstein, SeqTerm, Sequence};
pub use step::goodstein_step;
pub use types::tree::{Cantor, Digit, Expansion, Expr, Hereditary, Term};
pub use types::Nat;
