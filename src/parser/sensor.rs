//! Harbor sensor line parser
//!
//! Data lines carry 18 comma-separated floats: elapsed seconds followed by
//! the 17 channels in column order.

use crate::parser::fields::{parse_required, tokenize_line};
use crate::types::{SensorRecord, SENSOR_CHANNELS};
use crate::Result;
use tracing::trace;

/// Fields expected on a sensor data line
pub const SENSOR_FIELDS: usize = SENSOR_CHANNELS + 1;

/// Parse a sensor data line, returning the reason when it is malformed
pub fn try_parse_sensor_line(line: &str) -> Result<SensorRecord> {
    let fields = tokenize_line(line)?;

    let elapsed_seconds = parse_required(&fields, 0, "elapsed seconds")?;
    let mut channels = [0.0f32; SENSOR_CHANNELS];
    for (i, channel) in channels.iter_mut().enumerate() {
        *channel = parse_required(&fields, i + 1, "channel")?;
    }

    Ok(SensorRecord::from_channels(elapsed_seconds, channels))
}

/// Parse a sensor data line; `None` means the line should be passed through as a comment
pub fn parse_sensor_line(line: &str) -> Option<SensorRecord> {
    match try_parse_sensor_line(line) {
        Ok(record) => Some(record),
        Err(e) => {
            trace!("malformed sensor line: {e}");
            None
        }
    }
}
