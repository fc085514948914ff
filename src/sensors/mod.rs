//! Sensor types and unit conversion
//!
//! Full-scale ranges and converted data types for the LSM6DSOX's two
//! sensing paths.

pub mod accelerometer;
pub mod gyroscope;

pub use accelerometer::{AccelDataG, AccelFullScale};
pub use gyroscope::{GyroDataDps, GyroFullScale};
