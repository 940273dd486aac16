//! Fixed-width column formatting
//!
//! Column widths are a compatibility contract with downstream tools that
//! read this output by position, so they must not drift.

use crate::types::{GpsAverage, GpsDate, GpsRecord, GpsTime, SensorRecord};

/// Prefix written before every passthrough line
pub const COMMENT_PREFIX: &[u8] = b"# ";

/// Echo of the invocation, written as the first output line
pub fn format_invocation<S: AsRef<str>>(args: &[S]) -> String {
    let joined: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
    format!("# {}", joined.join(" "))
}

#[allow(clippy::too_many_arguments)]
fn gps_columns(
    elapsed_seconds: f32,
    date: &GpsDate,
    time: &GpsTime,
    latitude: f32,
    longitude: f32,
    altitude: f32,
    num_sats: i32,
) -> String {
    format!(
        "{:6.1} {:2} {:2} {:4} {:2} {:2} {:2} {:11.7} {:12.7} {:8.1} {:2}",
        elapsed_seconds,
        date.mday,
        date.month,
        date.year,
        time.hour,
        time.minute,
        time.second,
        latitude,
        longitude,
        altitude,
        num_sats
    )
}

/// Unaveraged GPS record
pub fn format_gps_record(record: &GpsRecord) -> String {
    gps_columns(
        record.elapsed_seconds,
        &record.date,
        &record.time,
        record.latitude,
        record.longitude,
        record.altitude,
        record.num_sats,
    )
}

/// Averaged GPS window: the record columns plus the member count
pub fn format_gps_average(average: &GpsAverage) -> String {
    let columns = gps_columns(
        average.elapsed_seconds,
        &average.date,
        &average.time,
        average.latitude,
        average.longitude,
        average.altitude,
        average.num_sats,
    );
    format!("{} {:3}", columns, average.count)
}

/// Sensor record, raw or averaged (both share one layout)
pub fn format_sensor_record(record: &SensorRecord) -> String {
    let channels = record.channels();
    let mut line = format!("{:6.1} {:5.1}", record.elapsed_seconds, channels[0]);
    for value in &channels[1..] {
        line.push_str(&format!(" {:.6}", value));
    }
    line
}
