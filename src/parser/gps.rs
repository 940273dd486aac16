//! Harbor GPS line parser
//!
//! Data lines look like `tsecs,DD/MM/YY,hh:mm:ss,lat,lon,alt,nsats`. Anything
//! after the satellite count is ignored.

use crate::parser::fields::{parse_required, required_field, split_ints, tokenize_line};
use crate::types::{GpsDate, GpsRecord, GpsTime};
use crate::Result;
use tracing::trace;

/// Two-digit years in the log are offset from this century
pub const YEAR_BASE: i32 = 2000;

/// Parse a GPS data line, returning the reason when it is malformed
pub fn try_parse_gps_line(line: &str) -> Result<GpsRecord> {
    let fields = tokenize_line(line)?;

    let elapsed_seconds = parse_required(&fields, 0, "elapsed seconds")?;
    let [mday, month, year] = split_ints::<3>(required_field(&fields, 1, "date")?, '/', "date")?;
    let [hour, minute, second] =
        split_ints::<3>(required_field(&fields, 2, "time")?, ':', "time")?;
    let latitude = parse_required(&fields, 3, "latitude")?;
    let longitude = parse_required(&fields, 4, "longitude")?;
    let altitude = parse_required(&fields, 5, "altitude")?;
    let num_sats = parse_required(&fields, 6, "satellite count")?;

    Ok(GpsRecord {
        elapsed_seconds,
        date: GpsDate {
            mday,
            month,
            year: year + YEAR_BASE,
        },
        time: GpsTime {
            hour,
            minute,
            second,
        },
        latitude,
        longitude,
        altitude,
        num_sats,
    })
}

/// Parse a GPS data line; `None` means the line should be passed through as a comment
pub fn parse_gps_line(line: &str) -> Option<GpsRecord> {
    match try_parse_gps_line(line) {
        Ok(record) => Some(record),
        Err(e) => {
            trace!("malformed GPS line: {e}");
            None
        }
    }
}
