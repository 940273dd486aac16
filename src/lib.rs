//! Harbor Columns Library
//!
//! Converts Harbor GPS and Harbor sensor CSV logs into fixed-width,
//! space-separated column text, optionally averaging records over time
//! windows.
//!
//! # Features
//!
//! - **`cli`** (default): Build the `hgps` and `hsensor` command-line binaries
//! - **`serde`**: Enable serialization/deserialization of record and stats types
//!
//! # Quick Start
//!
//! Convert a GPS log, averaging over 10 second windows and dropping fixes
//! with fewer than 4 satellites:
//! ```rust,no_run
//! use harbor_columns::{convert_gps_file, ConvertOptions};
//! use std::path::Path;
//!
//! let options = ConvertOptions {
//!     window_secs: 10.0,
//!     min_sats: Some(4),
//! };
//! let mut out = std::io::stdout();
//! let stats = convert_gps_file(Path::new("harbor_gps.csv"), &mut out, &options).unwrap();
//! eprintln!("{} windows from {} records", stats.windows, stats.records);
//! ```
//!
//! Averaging works on any record shape that implements [`Accumulator`]:
//! ```rust
//! use harbor_columns::{SensorAccumulator, SensorRecord, WindowAverager, WindowOutput};
//!
//! let mut averager = WindowAverager::<SensorAccumulator>::new(1.0);
//! assert!(averager.observe(SensorRecord { elapsed_seconds: 0.0, ..Default::default() }).is_none());
//! let closed = averager.observe(SensorRecord { elapsed_seconds: 2.0, ..Default::default() });
//! assert!(matches!(closed, Some(WindowOutput::Average(w)) if w.count == 1));
//! ```
//!
//! # Public API
//!
//! ## Conversion
//! - [`convert_gps`] / [`convert_gps_file`] - GPS pipeline with satellite filtering
//! - [`convert_sensor`] / [`convert_sensor_file`] - Sensor pipeline
//! - [`ConvertOptions`] - Window length and satellite threshold
//! - [`ConversionStats`] - Per-run line and window counters
//!
//! ## Averaging
//! - [`WindowAverager`] - Window trigger and flush protocol
//! - [`GpsAccumulator`] / [`SensorAccumulator`] - Per-shape running sums
//!
//! ## Parsing and formatting
//! - [`classify_line`] - Data vs comment line
//! - [`parse_gps_line`] / [`parse_sensor_line`] - CSV line to record
//! - [`format_gps_record`], [`format_gps_average`], [`format_sensor_record`] - Column output

pub mod average;
#[cfg(feature = "cli")]
pub mod cli;
pub mod convert;
pub mod error;
pub mod format;
pub mod parser;
pub mod types;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use average::*;
pub use convert::*;
pub use error::*;
pub use format::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;
