#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seconds in one day, used for midnight rollover arithmetic
pub const SECONDS_PER_DAY: i32 = 86_400;

/// Calendar date of a GPS fix (UT)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsDate {
    /// Day of month, 1-31
    pub mday: i32,
    /// Month, 1-12
    pub month: i32,
    /// Full year, e.g. 2024
    pub year: i32,
}

/// Time of day of a GPS fix (UT)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsTime {
    /// Hour, 0-23
    pub hour: i32,
    /// Minute, 0-59
    pub minute: i32,
    /// Second, 0-59
    pub second: i32,
}

impl GpsTime {
    /// Seconds since midnight, 0-86399
    pub fn seconds_since_midnight(&self) -> i32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Split a seconds-of-day total back into hour/minute/second.
    ///
    /// The hour is not wrapped, so totals past midnight yield `hour >= 24`.
    pub fn from_seconds(total: i32) -> Self {
        let hour = total / 3600;
        let minute = (total - hour * 3600) / 60;
        let second = total % 60;
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// One fix record from a Harbor GPS CSV file
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsRecord {
    /// Seconds since start of dataset
    pub elapsed_seconds: f32,
    pub date: GpsDate,
    pub time: GpsTime,
    /// Latitude, deg north
    pub latitude: f32,
    /// Longitude, deg east
    pub longitude: f32,
    /// Altitude, m above MSL
    pub altitude: f32,
    /// Number of GPS satellites in view
    pub num_sats: i32,
}

impl GpsRecord {
    pub fn seconds_since_midnight(&self) -> i32 {
        self.time.seconds_since_midnight()
    }
}

/// Averaged output of one GPS window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsAverage {
    pub elapsed_seconds: f32,
    pub date: GpsDate,
    pub time: GpsTime,
    pub latitude: f32,
    pub longitude: f32,
    pub altitude: f32,
    /// Mean satellite count, rounded down
    pub num_sats: i32,
    /// Number of records in the window
    pub count: usize,
}
