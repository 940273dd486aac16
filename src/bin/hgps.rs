//! Convert Harbor GPS CSV data into fixed-width columns.
//!
//! Use: `hgps input.csv avg_secs min_sats > output.txt`

use anyhow::Result;
use clap::{Arg, Command};
use harbor_columns::cli::{
    avg_secs_arg, debug_arg, init_logging, input_arg, long_version, raw_values, write_invocation,
};
use harbor_columns::{convert_gps, open_input, ConvertOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

fn build_command() -> Command {
    Command::new("hgps")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version())
        .about("Convert Harbor GPS CSV data into space-separated columns, optionally averaged over time windows. Records with too few satellites are written as comments.")
        .arg(input_arg("Harbor GPS CSV data file to process"))
        .arg(avg_secs_arg())
        .arg(
            Arg::new("min_sats")
                .help("Minimum number of satellites for a valid record")
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i32))
                .index(3),
        )
        .arg(debug_arg())
}

fn main() -> Result<()> {
    let program = std::env::args().next().unwrap_or_else(|| "hgps".to_string());
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    init_logging(debug);

    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let options = ConvertOptions {
        window_secs: *matches.get_one::<f32>("avg_secs").unwrap_or(&0.0),
        min_sats: matches.get_one::<i32>("min_sats").copied(),
    };

    let reader = match open_input(Path::new(input)) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("{input}: {e}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_invocation(
        &mut out,
        &program,
        &raw_values(&matches, &["input", "avg_secs", "min_sats"]),
    )?;

    let stats = convert_gps(reader, &mut out, &options)?;
    out.flush()?;

    debug!(?stats, "GPS conversion summary");
    Ok(())
}
