use tracing_subscriber::EnvFilter;

/// Crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["cycle", "cycle_gen"];

/// Initialize logging based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set. Records emitted through the `log` facade
/// are forwarded to the subscriber.
pub fn init(verbosity: u8) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// The filter directives used when `RUST_LOG` is not set.
fn default_filter(verbosity: u8) -> String {
  let level = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  CRATE_TARGETS.iter().map(|t| format!("{t}={level}")).collect::<Vec<_>>().join(",")
}
