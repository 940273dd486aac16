//! GPS window accumulator
//!
//! Positions are averaged with float division, satellite count and time of
//! day with integer division. Time of day is summed as seconds since the
//! window's first midnight: a record whose hour is below the hour of the
//! window's first record is taken to have rolled past midnight and gains
//! 24 hours.
//! When the averaged time lands at or past 24:00 the window reports the
//! date of the latest record instead of the first.

use super::Accumulator;
use crate::types::{GpsAverage, GpsDate, GpsRecord, GpsTime, SECONDS_PER_DAY};

#[derive(Debug, Default)]
pub struct GpsAccumulator {
    count: usize,
    /// Date of the first record in the window
    first_date: Option<GpsDate>,
    /// Hour of the first record in the window
    reference_hour: i32,
    elapsed_sum: f32,
    latitude_sum: f32,
    longitude_sum: f32,
    altitude_sum: f32,
    sats_sum: i64,
    time_of_day_sum: i64,
}

impl GpsAccumulator {
    /// Seconds of day for `record`, corrected for midnight rollover
    fn corrected_seconds(&self, record: &GpsRecord) -> i64 {
        let seconds = i64::from(record.seconds_since_midnight());
        if self.count == 0 {
            return seconds;
        }
        let rollover = if record.time.hour < self.reference_hour {
            SECONDS_PER_DAY
        } else {
            0
        };
        seconds + i64::from(rollover)
    }
}

impl Accumulator for GpsAccumulator {
    type Record = GpsRecord;
    type Average = GpsAverage;

    fn elapsed_seconds(record: &GpsRecord) -> f32 {
        record.elapsed_seconds
    }

    fn add(&mut self, record: &GpsRecord) {
        self.time_of_day_sum += self.corrected_seconds(record);
        if self.count == 0 {
            self.first_date = Some(record.date);
            self.reference_hour = record.time.hour;
        }

        self.elapsed_sum += record.elapsed_seconds;
        self.latitude_sum += record.latitude;
        self.longitude_sum += record.longitude;
        self.altitude_sum += record.altitude;
        self.sats_sum += i64::from(record.num_sats);
        self.count += 1;
    }

    fn count(&self) -> usize {
        self.count
    }

    fn average(&self, latest: &GpsRecord) -> Option<GpsAverage> {
        if self.count == 0 {
            return None;
        }
        let first_date = self.first_date?;

        let n = self.count as f32;
        let count = self.count as i64;
        let mut time = GpsTime::from_seconds((self.time_of_day_sum / count) as i32);
        let date = if time.hour >= 24 {
            time.hour -= 24;
            latest.date
        } else {
            first_date
        };

        Some(GpsAverage {
            elapsed_seconds: self.elapsed_sum / n,
            date,
            time,
            latitude: self.latitude_sum / n,
            longitude: self.longitude_sum / n,
            altitude: self.altitude_sum / n,
            num_sats: (self.sats_sum / count) as i32,
            count: self.count,
        })
    }
}
