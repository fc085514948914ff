#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use device::{AccelData, GyroData, Lsm6dsoxDriver};
pub use interface::{I2cInterface, SpiInterface, Teardown, SPI_MAX_CLOCK_HZ, SPI_MODE};
pub use sensors::{AccelDataG, AccelFullScale, GyroDataDps, GyroFullScale};

/// LSM6DSOX I2C address when the SA0 pin is low (default: 0x6A)
///
/// This is the most common configuration. The SA0 pin is typically pulled
/// low or left floating on breakout boards. Use [`I2cInterface::default()`]
/// for this configuration.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x6A;

/// LSM6DSOX I2C address when the SA0 pin is high (alternative: 0x6B)
///
/// Use this address when the SA0 pin is explicitly pulled high to VDD.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x6B;

/// Expected value of `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0x6C;

/// Output data rate both sensing paths are configured for by
/// [`Lsm6dsoxDriver::init`], in Hz.
///
/// A property of the fixed operating point, not a device read.
pub const SAMPLE_RATE_HZ: f32 = 104.0;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
