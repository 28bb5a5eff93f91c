use anyhow::{Context, Result};
use clap::Parser;
use goodstein_core::Sequence;
use num_traits::Zero;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod output;

use cli::Cli;
use output::Format;

fn main() -> Result<()> {
  // GOODSTEIN_LOG=debug shows per-step sizes on stderr
  let filter = EnvFilter::try_from_env("GOODSTEIN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();

  let cli = Cli::parse();
  let format = if cli.json {
    Format::Json
  } else {
    Format::Text {
      colorize: cli.colorize,
    }
  };
  if cli.colorize && !cli.json {
    colored::control::set_override(true);
  }
  info!(
    initial = %cli.initial_value,
    len = cli.sequence_length,
    "generating sequence"
  );

  let sequence = Sequence::new(cli.initial_value, cli.sequence_length)?;
  let mut index = 0;
  for term in sequence {
    let term = term.with_context(|| format!("failed to compute term {}", index + 1))?;
    index = term.index;
    println!("{}", output::render(&term, format)?);
    if term.value.is_zero() {
      if let Some(s) = output::terminated(term.index, format) {
        println!("{}", s);
      }
    }
  }
  Ok(())
}
