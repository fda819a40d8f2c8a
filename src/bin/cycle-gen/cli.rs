use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

/// Generate the year-start and year-type tables for the 400-year Gregorian cycle.
#[derive(Debug, Parser)]
#[command(name = "cycle-gen", version, about = "Generate Gregorian cycle tables")]
pub struct Cli {
  /// Increase verbosity (-v info, -vv debug, -vvv trace).
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Language of the generated tables.
  #[arg(short, long, value_enum, default_value_t = Format::C)]
  pub format: Format,

  /// Path of the file to write.
  pub output: PathBuf,
}

/// Output formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
  /// C source exporting `tz64_year_starts` and `tz64_year_types`.
  C,
  /// Rust source defining `YEAR_STARTS` and `YEAR_TYPES`.
  Rust,
  /// JSON object holding both padded tables.
  Json,
}

impl fmt::Display for Format {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::C => "c",
      Self::Rust => "rust",
      Self::Json => "json",
    })
  }
}
