pub mod gps;
pub mod sensor;
pub mod stats;

pub use gps::*;
pub use sensor::*;
pub use stats::*;
