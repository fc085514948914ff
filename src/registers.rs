//! Register definitions for the LSM6DSOX
//!
//! The LSM6DSOX exposes a flat 8-bit register map shared by the I2C and SPI
//! interfaces. Only the registers the driver touches are modeled here; the
//! remainder of the map (FIFO, interrupt routing, embedded functions) is
//! reachable through the raw register accessors on the driver.
//!
//! Multi-byte output data is little-endian: each axis is a signed 16-bit
//! value stored low byte first.

device_driver::create_device!(
    device_name: Lsm6dsox,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// WHO_AM_I - Device ID Register (0x0F)
        /// Expected value: 0x6C
        register WhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x6C)
            who_am_i: uint = 0..8,
        },

        /// CTRL1_XL - Accelerometer Control (0x10)
        register Ctrl1Xl {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// LPF2 low-pass filter path enable
            lpf2_xl_en: bool = 1,
            /// Accelerometer full-scale select (00=±2g, 01=±16g, 10=±4g, 11=±8g)
            fs_xl: uint = 2..4,
            /// Accelerometer output data rate (0 = power-down, 0b0100 = 104 Hz)
            odr_xl: uint = 4..8,
        },

        /// CTRL2_G - Gyroscope Control (0x11)
        register Ctrl2G {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// ±125 dps full-scale override
            fs_125: bool = 1,
            /// Gyroscope full-scale select (00=±250, 01=±500, 10=±1000, 11=±2000 dps)
            fs_g: uint = 2..4,
            /// Gyroscope output data rate (0 = power-down, 0b0100 = 104 Hz)
            odr_g: uint = 4..8,
        },

        /// CTRL7_G - Gyroscope Power / High-Pass Control (0x16)
        register Ctrl7G {
            const ADDRESS = 0x16;
            const SIZE_BITS = 8;

            /// OIS chain enable from the primary interface
            ois_on: bool = 0,
            /// Accelerometer user offset output enable
            usr_off_on_out: bool = 1,
            /// OIS chain enable from the OIS interface
            ois_on_en: bool = 2,
            reserved_3: uint = 3..4,
            /// Gyroscope high-pass filter cutoff
            hpm_g: uint = 4..6,
            /// Gyroscope high-pass filter enable
            hp_en_g: bool = 6,
            /// Gyroscope high-performance mode disable (0 = high-performance)
            g_hm_mode: bool = 7,
        },

        /// CTRL8_XL - Accelerometer Filter Control (0x17)
        register Ctrl8Xl {
            const ADDRESS = 0x17;
            const SIZE_BITS = 8;

            /// Low-pass filter on the 6D orientation path
            low_pass_on_6d: bool = 0,
            /// Full-scale mode for the new filtering chain
            xl_fs_mode: bool = 1,
            /// Accelerometer slope/high-pass path enable
            hp_slope_xl_en: bool = 2,
            /// Fast-settling mode on the LPF2 path
            fastsettl_mode_xl: bool = 3,
            /// High-pass reference mode
            hp_ref_mode_xl: bool = 4,
            /// Accelerometer LPF2/HP cutoff (000 = ODR/4 on the low-pass path)
            hpcf_xl: uint = 5..8,
        },

        /// STATUS_REG - Data Ready Status (0x1E)
        register StatusReg {
            const ADDRESS = 0x1E;
            const SIZE_BITS = 8;

            /// New accelerometer sample available
            xlda: bool = 0,
            /// New gyroscope sample available
            gda: bool = 1,
            /// New temperature sample available
            tda: bool = 2,
            reserved_7_3: uint = 3..8,
        },

        /// OUTX_L_G - Gyroscope X-axis Low Byte (0x22)
        register OutxLG {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            /// Gyroscope X-axis data low byte
            outx_l_g: uint = 0..8,
        },

        /// OUTX_H_G - Gyroscope X-axis High Byte (0x23)
        register OutxHG {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;

            /// Gyroscope X-axis data high byte
            outx_h_g: uint = 0..8,
        },

        /// OUTY_L_G - Gyroscope Y-axis Low Byte (0x24)
        register OutyLG {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;

            /// Gyroscope Y-axis data low byte
            outy_l_g: uint = 0..8,
        },

        /// OUTY_H_G - Gyroscope Y-axis High Byte (0x25)
        register OutyHG {
            const ADDRESS = 0x25;
            const SIZE_BITS = 8;

            /// Gyroscope Y-axis data high byte
            outy_h_g: uint = 0..8,
        },

        /// OUTZ_L_G - Gyroscope Z-axis Low Byte (0x26)
        register OutzLG {
            const ADDRESS = 0x26;
            const SIZE_BITS = 8;

            /// Gyroscope Z-axis data low byte
            outz_l_g: uint = 0..8,
        },

        /// OUTZ_H_G - Gyroscope Z-axis High Byte (0x27)
        register OutzHG {
            const ADDRESS = 0x27;
            const SIZE_BITS = 8;

            /// Gyroscope Z-axis data high byte
            outz_h_g: uint = 0..8,
        },

        /// OUTX_L_XL - Accelerometer X-axis Low Byte (0x28)
        register OutxLXl {
            const ADDRESS = 0x28;
            const SIZE_BITS = 8;

            /// Accelerometer X-axis data low byte
            outx_l_xl: uint = 0..8,
        },

        /// OUTX_H_XL - Accelerometer X-axis High Byte (0x29)
        register OutxHXl {
            const ADDRESS = 0x29;
            const SIZE_BITS = 8;

            /// Accelerometer X-axis data high byte
            outx_h_xl: uint = 0..8,
        },

        /// OUTY_L_XL - Accelerometer Y-axis Low Byte (0x2A)
        register OutyLXl {
            const ADDRESS = 0x2A;
            const SIZE_BITS = 8;

            /// Accelerometer Y-axis data low byte
            outy_l_xl: uint = 0..8,
        },

        /// OUTY_H_XL - Accelerometer Y-axis High Byte (0x2B)
        register OutyHXl {
            const ADDRESS = 0x2B;
            const SIZE_BITS = 8;

            /// Accelerometer Y-axis data high byte
            outy_h_xl: uint = 0..8,
        },

        /// OUTZ_L_XL - Accelerometer Z-axis Low Byte (0x2C)
        register OutzLXl {
            const ADDRESS = 0x2C;
            const SIZE_BITS = 8;

            /// Accelerometer Z-axis data low byte
            outz_l_xl: uint = 0..8,
        },

        /// OUTZ_H_XL - Accelerometer Z-axis High Byte (0x2D)
        register OutzHXl {
            const ADDRESS = 0x2D;
            const SIZE_BITS = 8;

            /// Accelerometer Z-axis data high byte
            outz_h_xl: uint = 0..8,
        }
    }
);

// Re-export for convenience
pub use Lsm6dsox as RegisterDevice;
