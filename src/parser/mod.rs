pub mod fields;
pub mod gps;
pub mod line;
pub mod sensor;

pub use gps::*;
pub use line::*;
pub use sensor::*;
