//! High-level driver API for the LSM6DSOX
//!
//! This module provides a user-friendly interface to the LSM6DSOX sensor,
//! handling initialization, data-ready polling, and sample reading over
//! either transport binding.

use crate::interface::Teardown;
use crate::registers::Lsm6dsox as RegisterDevice;
use crate::sensors::{AccelDataG, AccelFullScale, GyroDataDps, GyroFullScale};
use crate::{Error, SAMPLE_RATE_HZ, WHO_AM_I_VALUE};

use device_driver::RegisterInterface;

/// Full-scale range written to `CTRL1_XL` by [`Lsm6dsoxDriver::init`].
///
/// The g conversion in [`Lsm6dsoxDriver::read_acceleration`] is derived from
/// this value; the two must change together.
const ACCEL_FULL_SCALE: AccelFullScale = AccelFullScale::G4;

/// Full-scale range written to `CTRL2_G` by [`Lsm6dsoxDriver::init`].
///
/// The dps conversion in [`Lsm6dsoxDriver::read_gyroscope`] is derived from
/// this value; the two must change together.
const GYRO_FULL_SCALE: GyroFullScale = GyroFullScale::Dps2000;

/// ODR field encoding for 104 Hz, used for both sensing paths
const ODR_104_HZ: u8 = 0b0100;

/// ODR field encoding for power-down
const ODR_POWER_DOWN: u8 = 0b0000;

/// Accelerometer data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis acceleration (raw)
    pub x: i16,
    /// Y-axis acceleration (raw)
    pub y: i16,
    /// Z-axis acceleration (raw)
    pub z: i16,
}

/// Gyroscope data (raw 16-bit values)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroData {
    /// X-axis rotation (raw)
    pub x: i16,
    /// Y-axis rotation (raw)
    pub y: i16,
    /// Z-axis rotation (raw)
    pub z: i16,
}

/// Main driver for the LSM6DSOX
///
/// Generic over the transport binding: construct with an
/// [`I2cInterface`](crate::I2cInterface) or an
/// [`SpiInterface`](crate::SpiInterface). The binding is fixed for the
/// lifetime of the driver.
pub struct Lsm6dsoxDriver<I> {
    device: RegisterDevice<I>,
}

impl<I> Lsm6dsoxDriver<I> {
    /// Create a new LSM6DSOX driver instance
    ///
    /// No communication happens here; call [`init()`](Self::init) to verify
    /// the device identity and configure it.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
        }
    }

    /// Consume the driver and return the transport binding
    pub fn release(self) -> I {
        self.device.interface
    }
}

impl<I> Lsm6dsoxDriver<I>
where
    I: RegisterInterface<AddressType = u8> + Teardown,
{
    /// Initialize the device into the fixed operating point
    ///
    /// Verifies the `WHO_AM_I` register, then configures both sensing paths
    /// for 104 Hz output: gyroscope at ±2000 dps, accelerometer at ±4 g with
    /// the ODR/4 low-pass filter path enabled, gyroscope in high-performance
    /// mode.
    ///
    /// The four configuration writes are issued best-effort, in a fixed
    /// order, without individual error checks: a write that fails on the
    /// wire leaves the device partially configured and is not reported.
    /// Only the identity check gates the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bus`] if the identity read fails, or
    /// [`Error::InvalidDevice`] if a device responded with an unexpected ID.
    /// In the latter case the driver shuts the transport binding down again
    /// and the device is left unconfigured; `init()` may be retried.
    pub fn init(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.who_am_i()?;
        if who_am_i != WHO_AM_I_VALUE {
            self.shutdown();
            return Err(Error::InvalidDevice(who_am_i));
        }

        let _ = self.device.ctrl_2_g().write(|w| {
            w.set_odr_g(ODR_104_HZ);
            w.set_fs_g(GYRO_FULL_SCALE as u8);
        });

        let _ = self.device.ctrl_1_xl().write(|w| {
            w.set_odr_xl(ODR_104_HZ);
            w.set_fs_xl(ACCEL_FULL_SCALE as u8);
            w.set_lpf2_xl_en(true);
        });

        let _ = self.device.ctrl_7_g().write(|w| {
            w.set_g_hm_mode(false);
            w.set_hp_en_g(false);
        });

        let _ = self.device.ctrl_8_xl().write(|w| {
            w.set_hpcf_xl(0b000);
            w.set_fastsettl_mode_xl(true);
            w.set_low_pass_on_6d(true);
        });

        Ok(())
    }

    /// Shut the driver down
    ///
    /// Over I2C this powers both sensing paths down (best-effort, since the
    /// device keeps listening on the shared bus). Over SPI no registers are
    /// touched and the device is left in its configured state; tearing down
    /// the SPI device itself is the host's job.
    ///
    /// The driver remains usable afterwards: [`init()`](Self::init) brings
    /// the device back up.
    pub fn shutdown(&mut self) {
        if I::POWER_DOWN {
            let _ = self.device.ctrl_2_g().write(|w| {
                w.set_odr_g(ODR_POWER_DOWN);
            });
            let _ = self.device.ctrl_1_xl().write(|w| {
                w.set_odr_xl(ODR_POWER_DOWN);
            });
        }
    }

    /// Read the `WHO_AM_I` register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn who_am_i(&mut self) -> Result<u8, Error<I::Error>> {
        Ok(self.device.who_am_i().read()?.who_am_i())
    }

    /// Check whether a new accelerometer sample is available
    ///
    /// Issues one status register read; the result reflects the XLDA bit
    /// only, independent of the gyroscope's state.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn acceleration_available(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.status_reg().read()?.xlda())
    }

    /// Check whether a new gyroscope sample is available
    ///
    /// Issues one status register read; the result reflects the GDA bit
    /// only, independent of the accelerometer's state.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn gyroscope_available(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.status_reg().read()?.gda())
    }

    /// Read raw accelerometer data (16-bit signed values)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_accel_raw(&mut self) -> Result<AccelData, Error<I::Error>> {
        // Read all 6 bytes in one burst so the triple cannot tear mid-sample
        // Register addresses: OUTX_L_XL (0x28) through OUTZ_H_XL (0x2D)
        const OUTX_L_XL: u8 = 0x28;
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(OUTX_L_XL, 48, &mut buffer)?;

        let x = i16::from_le_bytes([buffer[0], buffer[1]]);
        let y = i16::from_le_bytes([buffer[2], buffer[3]]);
        let z = i16::from_le_bytes([buffer[4], buffer[5]]);

        Ok(AccelData { x, y, z })
    }

    /// Read raw gyroscope data (16-bit signed values)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_gyro_raw(&mut self) -> Result<GyroData, Error<I::Error>> {
        // Read all 6 bytes in one burst so the triple cannot tear mid-sample
        // Register addresses: OUTX_L_G (0x22) through OUTZ_H_G (0x27)
        const OUTX_L_G: u8 = 0x22;
        let mut buffer = [0u8; 6];
        self.device
            .interface
            .read_register(OUTX_L_G, 48, &mut buffer)?;

        let x = i16::from_le_bytes([buffer[0], buffer[1]]);
        let y = i16::from_le_bytes([buffer[2], buffer[3]]);
        let z = i16::from_le_bytes([buffer[4], buffer[5]]);

        Ok(GyroData { x, y, z })
    }

    /// Read acceleration in g
    ///
    /// Scaled for the ±4 g full-scale range [`init()`](Self::init)
    /// configures.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails; no sample
    /// is produced in that case.
    pub fn read_acceleration(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = self.read_accel_raw()?;
        Ok(AccelDataG::from_raw(raw, ACCEL_FULL_SCALE))
    }

    /// Read angular rate in degrees/second
    ///
    /// Scaled for the ±2000 dps full-scale range [`init()`](Self::init)
    /// configures.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails; no sample
    /// is produced in that case.
    pub fn read_gyroscope(&mut self) -> Result<GyroDataDps, Error<I::Error>> {
        let raw = self.read_gyro_raw()?;
        Ok(GyroDataDps::from_raw(raw, GYRO_FULL_SCALE))
    }

    /// Accelerometer output data rate in Hz
    ///
    /// Always [`SAMPLE_RATE_HZ`] (104 Hz); this reflects the configured
    /// operating point and is never read from the device.
    #[must_use]
    pub const fn acceleration_sample_rate(&self) -> f32 {
        SAMPLE_RATE_HZ
    }

    /// Gyroscope output data rate in Hz
    ///
    /// Always [`SAMPLE_RATE_HZ`] (104 Hz); this reflects the configured
    /// operating point and is never read from the device.
    #[must_use]
    pub const fn gyroscope_sample_rate(&self) -> f32 {
        SAMPLE_RATE_HZ
    }

    /// Read a single register byte
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_register(&mut self, address: u8) -> Result<u8, Error<I::Error>> {
        let mut buffer = [0u8; 1];
        self.read_registers(address, &mut buffer)?;
        Ok(buffer[0])
    }

    /// Read consecutive registers into `buffer`
    ///
    /// The device auto-increments the register address, so `buffer.len()`
    /// bytes starting at `address` are read in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_registers(
        &mut self,
        address: u8,
        buffer: &mut [u8],
    ) -> Result<(), Error<I::Error>> {
        self.device
            .interface
            .read_register(address, buffer.len() as u32 * 8, buffer)?;
        Ok(())
    }

    /// Write a single register byte
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.device.interface.write_register(address, 8, &[value])?;
        Ok(())
    }
}
