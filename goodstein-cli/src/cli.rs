use clap::Parser;
use goodstein_core::Nat;

#[derive(Parser, Debug)]
#[command(name = "goodstein")]
#[command(
  version,
  about = "Generate a Goodstein sequence started from an initial value"
)]
pub struct Cli {
  /// The initial value of the Goodstein sequence
  #[arg(value_parser = parse_nat)]
  pub initial_value: Nat,

  /// The number of terms to compute
  #[arg(value_parser = clap::value_parser!(u64).range(1..u64::MAX))]
  pub sequence_length: u64,

  /// Colorize terminal output
  #[arg(long, env = "GOODSTEIN_COLORIZE")]
  pub colorize: bool,

  /// Print one JSON object per term (colors are never applied)
  #[arg(long)]
  pub json: bool,
}

fn parse_nat(s: &str) -> Result<Nat, String> {
  if !s.bytes().all(|c| c.is_ascii_digit()) || s.is_empty() {
    return Err(format!("{:?} is not a non-negative integer", s));
  }
  s.parse::<Nat>().map_err(|e| e.to_string())
}

#[cfg(test)]
#[test]
fn test_cli_args() {
  let cli = Cli::try_parse_from(["goodstein", "19", "4", "--colorize"]).unwrap();
  assert_eq!(cli.initial_value, Nat::from(19u32));
  assert_eq!(cli.sequence_length, 4);
  assert!(cli.colorize);
  assert!(!cli.json);

  let big = "123456789012345678901234567890";
  let cli = Cli::try_parse_from(["goodstein", big, "1"]).unwrap();
  assert_eq!(cli.initial_value.to_string(), big);
}

#[cfg(test)]
#[test]
fn test_cli_rejects() {
  assert!(Cli::try_parse_from(["goodstein", "3", "0"]).is_err());
  assert!(Cli::try_parse_from(["goodstein", "3.5", "2"]).is_err());
  assert!(Cli::try_parse_from(["goodstein", "--", "-3", "2"]).is_err());
  assert!(Cli::try_parse_from(["goodstein", "+3", "2"]).is_err());
  assert!(Cli::try_parse_from(["goodstein", "3", "-1"]).is_err());
  assert!(Cli::try_parse_from(["goodstein", "3"]).is_err());
}
