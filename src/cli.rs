//! Shared command-line plumbing for the `hgps` and `hsensor` binaries

use clap::{Arg, ArgAction, ArgMatches};
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Git commit the binaries were built from, when available
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// Version string shown by `--version`
pub fn long_version() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), GIT_SHA)
}

/// Positional input file argument
pub fn input_arg(help: &'static str) -> Arg {
    Arg::new("input").help(help).required(true).index(1)
}

/// Positional averaging window argument
pub fn avg_secs_arg() -> Arg {
    Arg::new("avg_secs")
        .help("Seconds per averaging window; zero or negative for no averaging")
        .required(true)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f32))
        .index(2)
}

/// `--debug` flag raising the log level
pub fn debug_arg() -> Arg {
    Arg::new("debug")
        .long("debug")
        .help("Enable debug output (window flushes and a run summary) on stderr")
        .action(ArgAction::SetTrue)
}

/// Install the stderr tracing subscriber.
///
/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to warnings.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Raw text of positional arguments as typed, for the invocation echo
pub fn raw_values(matches: &ArgMatches, ids: &[&str]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| matches.get_raw(id))
        .flatten()
        .map(|v| v.to_string_lossy().into_owned())
        .collect()
}

/// Write the `# prog args...` header line
pub fn write_invocation<W: Write>(
    out: &mut W,
    program: &str,
    values: &[String],
) -> std::io::Result<()> {
    let mut args = Vec::with_capacity(values.len() + 1);
    args.push(program.to_string());
    args.extend(values.iter().cloned());
    writeln!(out, "{}", crate::format::format_invocation(&args))
}
