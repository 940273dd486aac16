//! Convert Harbor sensor CSV data into fixed-width columns.
//!
//! Use: `hsensor input.csv avg_secs > output.txt`

use anyhow::Result;
use clap::Command;
use harbor_columns::cli::{
    avg_secs_arg, debug_arg, init_logging, input_arg, long_version, raw_values, write_invocation,
};
use harbor_columns::{convert_sensor, open_input, ConvertOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

fn build_command() -> Command {
    Command::new("hsensor")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version())
        .about("Convert Harbor sensor CSV data into space-separated columns, optionally averaged over time windows. Values are raw ADC counts.")
        .arg(input_arg("Harbor sensor CSV data file to process"))
        .arg(avg_secs_arg())
        .arg(debug_arg())
}

fn main() -> Result<()> {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "hsensor".to_string());
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    init_logging(debug);

    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let options = ConvertOptions {
        window_secs: *matches.get_one::<f32>("avg_secs").unwrap_or(&0.0),
        min_sats: None,
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
    write_invocation(&mut out, &program, &raw_values(&matches, &["input", "avg_secs"]))?;

    let stats = convert_sensor(reader, &mut out, &options)?;
    out.flush()?;

    debug!(?stats, "sensor conversion summary");
    Ok(())
}
