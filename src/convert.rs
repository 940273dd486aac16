//! Line-by-line conversion pipelines
//!
//! Contains the GPS and sensor drivers that read a Harbor CSV stream,
//! classify and parse each line, run records through a [`WindowAverager`]
//! and write fixed-width columns to the output.

use crate::average::{
    Accumulator, GpsAccumulator, SensorAccumulator, WindowAverage, WindowAverager, WindowOutput,
};
use crate::format::{format_gps_average, format_gps_record, format_sensor_record, COMMENT_PREFIX};
use crate::parser::{classify_line, parse_gps_line, parse_sensor_line, LineKind};
use crate::types::ConversionStats;
use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Options controlling a conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Averaging window in seconds; zero or negative writes every record unaveraged
    pub window_secs: f32,
    /// Minimum satellites for a GPS record to count; ignored by the sensor pipeline
    pub min_sats: Option<i32>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            window_secs: 0.0,
            min_sats: None,
        }
    }
}

/// Result of parsing one data line
enum Parsed<T> {
    Record(T),
    Malformed,
    Filtered,
}

/// Open an input file for buffered line reading.
///
/// Returns the bare OS error so callers can report it against the path.
pub fn open_input(path: &Path) -> std::io::Result<BufReader<File>> {
    File::open(path).map(BufReader::new)
}

/// Convert a Harbor GPS CSV stream
///
/// Records with fewer than `options.min_sats` satellites are written as
/// comments and never reach the averager.
pub fn convert_gps<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let min_sats = options.min_sats;
    let mut averager = WindowAverager::<GpsAccumulator>::new(options.window_secs);

    run_pipeline(
        reader,
        writer,
        &mut averager,
        |line| match parse_gps_line(line) {
            Some(record) if min_sats.map_or(false, |min| record.num_sats < min) => {
                Parsed::Filtered
            }
            Some(record) => Parsed::Record(record),
            None => Parsed::Malformed,
        },
        format_gps_record,
        format_gps_average,
    )
}

/// Convert a Harbor sensor CSV stream
pub fn convert_sensor<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let mut averager = WindowAverager::<SensorAccumulator>::new(options.window_secs);

    run_pipeline(
        reader,
        writer,
        &mut averager,
        |line| parse_sensor_line(line).map_or(Parsed::Malformed, Parsed::Record),
        format_sensor_record,
        format_sensor_record,
    )
}

/// Convert a GPS CSV file on disk
pub fn convert_gps_file<W: Write>(
    path: &Path,
    writer: &mut W,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let reader = open_input(path)?;
    convert_gps(reader, writer, options)
}

/// Convert a sensor CSV file on disk
pub fn convert_sensor_file<W: Write>(
    path: &Path,
    writer: &mut W,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let reader = open_input(path)?;
    convert_sensor(reader, writer, options)
}

fn run_pipeline<R, W, A, P, F, G>(
    mut reader: R,
    writer: &mut W,
    averager: &mut WindowAverager<A>,
    parse: P,
    format_raw: F,
    format_average: G,
) -> Result<ConversionStats>
where
    R: BufRead,
    W: Write,
    A: Accumulator,
    P: Fn(&str) -> Parsed<A::Record>,
    F: Fn(&A::Record) -> String,
    G: Fn(&A::Average) -> String,
{
    let mut out = BufWriter::new(writer);
    let mut stats = ConversionStats::default();
    let mut line = Vec::new();

    while reader.read_until(b'\n', &mut line)? > 0 {
        stats.lines_read += 1;

        let parsed = match classify_line(&line) {
            LineKind::Comment => {
                stats.comment_lines += 1;
                None
            }
            LineKind::Data => match std::str::from_utf8(&line).map(&parse) {
                Ok(Parsed::Record(record)) => Some(record),
                Ok(Parsed::Filtered) => {
                    stats.filtered_records += 1;
                    None
                }
                Ok(Parsed::Malformed) | Err(_) => {
                    stats.malformed_lines += 1;
                    None
                }
            },
        };

        match parsed {
            None => {
                out.write_all(COMMENT_PREFIX)?;
                out.write_all(&line)?;
            }
            Some(record) => {
                stats.records += 1;
                match averager.observe(record) {
                    Some(WindowOutput::Raw(record)) => {
                        stats.raw_lines += 1;
                        writeln!(out, "{}", format_raw(&record))?;
                    }
                    Some(WindowOutput::Average(window)) => {
                        write_window(&mut out, &window, &format_average, &mut stats)?;
                    }
                    None => {}
                }
            }
        }

        line.clear();
    }

    if let Some(window) = averager.finish() {
        write_window(&mut out, &window, &format_average, &mut stats)?;
    }

    out.flush()?;
    info!(
        lines = stats.lines_read,
        records = stats.records,
        passthrough = stats.passthrough_lines(),
        windows = stats.windows,
        "conversion finished"
    );
    Ok(stats)
}

fn write_window<W: Write, T>(
    out: &mut W,
    window: &WindowAverage<T>,
    format_average: impl Fn(&T) -> String,
    stats: &mut ConversionStats,
) -> Result<()> {
    debug!(count = window.count, "window flushed");
    stats.windows += 1;
    stats.averaged_records += window.count as u64;
    writeln!(out, "{}", format_average(&window.average))?;
    Ok(())
}
