#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of channels carried by a sensor record, excluding the time axis
pub const SENSOR_CHANNELS: usize = 17;

/// One record from a Harbor sensor CSV file.
///
/// Channel values are raw ADC counts; no unit conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorRecord {
    /// Seconds since start of dataset
    pub elapsed_seconds: f32,
    /// Internal temperature
    pub temp_internal: f32,
    /// Accelerometer 1, x/y/z
    pub accel1: [f32; 3],
    /// Accelerometer 2, x/y/z
    pub accel2: [f32; 3],
    /// Magnetometer, x/y/z
    pub mag: [f32; 3],
    /// Gyroscope, x/y/z
    pub gyro: [f32; 3],
    pub humidity: f32,
    pub pressure: f32,
    /// External temperature
    pub temp_external: f32,
    /// Battery voltage
    pub battery: f32,
}

impl SensorRecord {
    /// Channels in file column order
    pub fn channels(&self) -> [f32; SENSOR_CHANNELS] {
        [
            self.temp_internal,
            self.accel1[0],
            self.accel1[1],
            self.accel1[2],
            self.accel2[0],
            self.accel2[1],
            self.accel2[2],
            self.mag[0],
            self.mag[1],
            self.mag[2],
            self.gyro[0],
            self.gyro[1],
            self.gyro[2],
            self.humidity,
            self.pressure,
            self.temp_external,
            self.battery,
        ]
    }

    /// Build a record from the time axis and channels in file column order
    pub fn from_channels(elapsed_seconds: f32, c: [f32; SENSOR_CHANNELS]) -> Self {
        Self {
            elapsed_seconds,
            temp_internal: c[0],
            accel1: [c[1], c[2], c[3]],
            accel2: [c[4], c[5], c[6]],
            mag: [c[7], c[8], c[9]],
            gyro: [c[10], c[11], c[12]],
            humidity: c[13],
            pressure: c[14],
            temp_external: c[15],
            battery: c[16],
        }
    }
}
