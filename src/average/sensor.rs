//! Sensor window accumulator: every channel is summed and float-divided

use super::Accumulator;
use crate::types::{SensorRecord, SENSOR_CHANNELS};

#[derive(Debug, Default)]
pub struct SensorAccumulator {
    count: usize,
    elapsed_sum: f32,
    channel_sums: [f32; SENSOR_CHANNELS],
}

impl Accumulator for SensorAccumulator {
    type Record = SensorRecord;
    type Average = SensorRecord;

    fn elapsed_seconds(record: &SensorRecord) -> f32 {
        record.elapsed_seconds
    }

    fn add(&mut self, record: &SensorRecord) {
        self.elapsed_sum += record.elapsed_seconds;
        for (sum, value) in self.channel_sums.iter_mut().zip(record.channels()) {
            *sum += value;
        }
        self.count += 1;
    }

    fn count(&self) -> usize {
        self.count
    }

    fn average(&self, _latest: &SensorRecord) -> Option<SensorRecord> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f32;
        Some(SensorRecord::from_channels(
            self.elapsed_sum / n,
            self.channel_sums.map(|sum| sum / n),
        ))
    }
}
