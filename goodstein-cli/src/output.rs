use colored::Colorize;
use goodstein_core::SeqTerm;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Text { colorize: bool },
  Json,
}

#[derive(Serialize)]
struct TermRecord {
  term: u64,
  base: u64,
  value: String,
  cantor_normal_form: String,
}

fn text(term: &SeqTerm, colorize: bool) -> String {
  let value = term.value.to_string();
  let cnf = term.cnf.to_string();
  let (value, cnf) = if colorize {
    (value.green().to_string(), cnf.magenta().to_string())
  } else {
    (value, cnf)
  };
  format!(
    "\nTerm number: {}\nSequence value: {}\nCantor normal form: {}",
    term.index, value, cnf
  )
}

fn json(term: &SeqTerm) -> serde_json::Result<String> {
  serde_json::to_string(&TermRecord {
    term: term.index,
    base: term.base,
    value: term.value.to_string(),
    cantor_normal_form: term.cnf.to_string(),
  })
}

pub fn render(term: &SeqTerm, format: Format) -> serde_json::Result<String> {
  match format {
    Format::Text { colorize } => Ok(text(term, colorize)),
    Format::Json => json(term),
  }
}

/// Trailer printed after the zero term, if any.
pub fn terminated(index: u64, format: Format) -> Option<String> {
  match format {
    Format::Text { .. } => Some(format!("\nSequence terminated at term {}.", index)),
    Format::Json => None,
  }
}

#[cfg(test)]
fn terms(n: u32, len: u64) -> Vec<SeqTerm> {
  goodstein_core::goodstein(&goodstein_core::Nat::from(n), len).unwrap()
}

#[cfg(test)]
#[test]
fn test_render_text() {
  let ts = terms(3, 2);
  let plain = Format::Text { colorize: false };
  assert_eq!(
    render(&ts[0], plain).unwrap(),
    "\nTerm number: 1\nSequence value: 3\nCantor normal form: 2+1"
  );
  assert_eq!(
    render(&ts[1], plain).unwrap(),
    "\nTerm number: 2\nSequence value: 3\nCantor normal form: 3"
  );
  assert_eq!(
    terminated(6, plain).unwrap(),
    "\nSequence terminated at term 6."
  );
}

#[cfg(test)]
#[test]
fn test_render_colorized() {
  colored::control::set_override(true);
  let ts = terms(4, 1);
  let s = render(&ts[0], Format::Text { colorize: true }).unwrap();
  assert!(s.contains("\u{1b}[32m4\u{1b}[0m"));
  assert!(s.contains("\u{1b}[35m2^2\u{1b}[0m"));
}

#[cfg(test)]
#[test]
fn test_render_json() {
  let ts = terms(4, 2);
  assert_eq!(
    render(&ts[1], Format::Json).unwrap(),
    r#"{"term":2,"base":3,"value":"26","cantor_normal_form":"2*3^2+2*3+2"}"#
  );
  assert_eq!(terminated(2, Format::Json), None);
}
