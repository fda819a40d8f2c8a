mod cli;
mod logging;

use std::fs;
use std::process;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use cycle::CycleTable;
use cycle::TABLE;
use cycle::format::Target;

use crate::cli::Cli;
use crate::cli::Format;

fn main() {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  if let Err(e) = run(&cli) {
    eprintln!("Error: {e:#}");
    process::exit(1);
  }
}

fn run(cli: &Cli) -> Result<()> {
  TABLE.verify().context("cycle table failed verification")?;
  let source = render(&TABLE, cli.format)?;
  fs::write(&cli.output, &source)
    .with_context(|| format!("failed to write {}", cli.output.display()))?;
  log::info!(
    "wrote {} tables to {} ({} bytes)",
    cli.format,
    cli.output.display(),
    source.len()
  );
  Ok(())
}

/// Render the table in the requested format.
fn render(table: &CycleTable, format: Format) -> Result<String> {
  Ok(match format {
    Format::C => table.format(Target::C).to_string(),
    Format::Rust => table.format(Target::Rust).to_string(),
    Format::Json => {
      let mut json = serde_json::to_string_pretty(table).context("failed to serialize table")?;
      json.push('\n');
      json
    },
  })
}
