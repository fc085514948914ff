//! Unit tests for transport-level register framing
//!
//! These tests drive the real `I2cInterface` and `SpiInterface` bindings
//! against hand-rolled `embedded-hal` peripherals that record every wire
//! transaction, verifying the byte-level protocol each transport uses.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use embedded_hal::i2c::{self, I2c, SevenBitAddress};
use embedded_hal::spi::{self, SpiDevice};
use lsm6dsox::{I2cInterface, Lsm6dsoxDriver, SpiInterface, I2C_ADDRESS_SA0_LOW};

/// Error type shared by both fake peripherals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

impl i2c::Error for BusFault {
    fn kind(&self) -> i2c::ErrorKind {
        i2c::ErrorKind::Other
    }
}

impl spi::Error for BusFault {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

/// One operation observed on the wire
#[derive(Debug, Clone, PartialEq)]
enum WireOp {
    /// Bytes the controller sent
    Write(Vec<u8>),
    /// Number of bytes the controller clocked in
    Read(usize),
}

#[derive(Default)]
struct FakeI2cState {
    registers: HashMap<u8, u8>,
    /// (device address, operations) per transaction
    transactions: Vec<(u8, Vec<WireOp>)>,
}

/// Fake I2C bus with an auto-incrementing register file behind it
#[derive(Clone, Default)]
struct FakeI2cBus {
    state: Rc<RefCell<FakeI2cState>>,
}

impl FakeI2cBus {
    fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    fn transactions(&self) -> Vec<(u8, Vec<WireOp>)> {
        self.state.borrow().transactions.clone()
    }
}

impl i2c::ErrorType for FakeI2cBus {
    type Error = BusFault;
}

impl I2c<SevenBitAddress> for FakeI2cBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        let mut pointer: Option<u8> = None;
        let mut ops_log = Vec::new();

        for op in operations.iter_mut() {
            match op {
                i2c::Operation::Write(bytes) => {
                    ops_log.push(WireOp::Write(bytes.to_vec()));
                    if let Some((reg, values)) = bytes.split_first() {
                        pointer = Some(*reg);
                        for (i, value) in values.iter().enumerate() {
                            state.registers.insert(reg.wrapping_add(i as u8), *value);
                        }
                    }
                }
                i2c::Operation::Read(buffer) => {
                    ops_log.push(WireOp::Read(buffer.len()));
                    let base = pointer.take().unwrap_or(0);
                    for (i, slot) in buffer.iter_mut().enumerate() {
                        *slot = state
                            .registers
                            .get(&base.wrapping_add(i as u8))
                            .copied()
                            .unwrap_or(0);
                    }
                }
            }
        }

        state.transactions.push((address, ops_log));
        Ok(())
    }
}

#[derive(Default)]
struct FakeSpiState {
    registers: HashMap<u8, u8>,
    transactions: Vec<Vec<WireOp>>,
}

/// Fake SPI device: first written byte selects a register, bit 7 marks a read
#[derive(Clone, Default)]
struct FakeSpiDevice {
    state: Rc<RefCell<FakeSpiState>>,
}

impl FakeSpiDevice {
    fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    fn transactions(&self) -> Vec<Vec<WireOp>> {
        self.state.borrow().transactions.clone()
    }
}

impl spi::ErrorType for FakeSpiDevice {
    type Error = BusFault;
}

impl SpiDevice<u8> for FakeSpiDevice {
    fn transaction(
        &mut self,
        operations: &mut [spi::Operation<'_, u8>],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        let mut selected: Option<u8> = None;
        let mut ops_log = Vec::new();

        for op in operations.iter_mut() {
            match op {
                spi::Operation::Write(bytes) => {
                    ops_log.push(WireOp::Write(bytes.to_vec()));
                    if let Some((header, values)) = bytes.split_first() {
                        if header & 0x80 != 0 {
                            selected = Some(header & 0x7F);
                        } else {
                            for (i, value) in values.iter().enumerate() {
                                state
                                    .registers
                                    .insert(header.wrapping_add(i as u8), *value);
                            }
                        }
                    }
                }
                spi::Operation::Read(buffer) => {
                    ops_log.push(WireOp::Read(buffer.len()));
                    let base = selected.take().unwrap_or(0);
                    for (i, slot) in buffer.iter_mut().enumerate() {
                        *slot = state
                            .registers
                            .get(&base.wrapping_add(i as u8))
                            .copied()
                            .unwrap_or(0);
                    }
                }
                _ => return Err(BusFault),
            }
        }

        state.transactions.push(ops_log);
        Ok(())
    }
}

#[test]
fn i2c_read_is_a_combined_write_read_at_default_address() {
    let bus = FakeI2cBus::default();
    bus.set_register(0x0F, 0x6C);

    let mut driver = Lsm6dsoxDriver::new(I2cInterface::default(bus.clone()));
    assert_eq!(driver.read_register(0x0F).unwrap(), 0x6C);

    let transactions = bus.transactions();
    assert_eq!(
        transactions,
        vec![(
            I2C_ADDRESS_SA0_LOW,
            vec![WireOp::Write(vec![0x0F]), WireOp::Read(1)]
        )]
    );
}

#[test]
fn i2c_write_frames_register_then_value() {
    let bus = FakeI2cBus::default();

    let mut driver = Lsm6dsoxDriver::new(I2cInterface::default(bus.clone()));
    driver.write_register(0x10, 0x4A).unwrap();

    let transactions = bus.transactions();
    assert_eq!(
        transactions,
        vec![(
            I2C_ADDRESS_SA0_LOW,
            vec![WireOp::Write(vec![0x10, 0x4A])]
        )]
    );
}

#[test]
fn i2c_alternative_address_is_used_on_the_wire() {
    let bus = FakeI2cBus::default();
    bus.set_register(0x0F, 0x6C);

    let mut driver = Lsm6dsoxDriver::new(I2cInterface::alternative(bus.clone()));
    driver.read_register(0x0F).unwrap();

    assert_eq!(bus.transactions()[0].0, 0x6B);
}

#[test]
fn i2c_init_traffic_matches_documented_sequence() {
    let bus = FakeI2cBus::default();
    bus.set_register(0x0F, 0x6C);

    let mut driver = Lsm6dsoxDriver::new(I2cInterface::default(bus.clone()));
    driver.init().unwrap();

    let transactions = bus.transactions();
    assert_eq!(transactions.len(), 5);
    assert_eq!(
        transactions[0].1,
        vec![WireOp::Write(vec![0x0F]), WireOp::Read(1)]
    );
    assert_eq!(transactions[1].1, vec![WireOp::Write(vec![0x11, 0x4C])]);
    assert_eq!(transactions[2].1, vec![WireOp::Write(vec![0x10, 0x4A])]);
    assert_eq!(transactions[3].1, vec![WireOp::Write(vec![0x16, 0x00])]);
    assert_eq!(transactions[4].1, vec![WireOp::Write(vec![0x17, 0x09])]);
}

#[test]
fn spi_read_sets_the_read_bit() {
    let device = FakeSpiDevice::default();
    device.set_register(0x0F, 0x6C);

    let mut driver = Lsm6dsoxDriver::new(SpiInterface::new(device.clone()));
    assert_eq!(driver.read_register(0x0F).unwrap(), 0x6C);

    let transactions = device.transactions();
    assert_eq!(
        transactions,
        vec![vec![WireOp::Write(vec![0x8F]), WireOp::Read(1)]]
    );
}

#[test]
fn spi_write_keeps_the_read_bit_clear() {
    let device = FakeSpiDevice::default();

    let mut driver = Lsm6dsoxDriver::new(SpiInterface::new(device.clone()));
    driver.write_register(0x10, 0x4A).unwrap();

    let transactions = device.transactions();
    assert_eq!(transactions, vec![vec![WireOp::Write(vec![0x10, 0x4A])]]);
    if let WireOp::Write(frame) = &transactions[0][0] {
        assert_eq!(frame[0] & 0x80, 0x00);
    }
}

#[test]
fn spi_sample_burst_is_one_transaction() {
    let device = FakeSpiDevice::default();
    let raw: [i16; 3] = [1000, -2000, 3000];
    for (i, value) in raw.iter().enumerate() {
        let [low, high] = value.to_le_bytes();
        device.set_register(0x22 + (i as u8) * 2, low);
        device.set_register(0x23 + (i as u8) * 2, high);
    }

    let mut driver = Lsm6dsoxDriver::new(SpiInterface::new(device.clone()));
    let sample = driver.read_gyro_raw().unwrap();

    assert_eq!((sample.x, sample.y, sample.z), (1000, -2000, 3000));
    assert_eq!(
        device.transactions(),
        vec![vec![WireOp::Write(vec![0xA2]), WireOp::Read(6)]]
    );
}

#[test]
fn shutdown_powers_down_over_i2c_only() {
    let bus = FakeI2cBus::default();
    let mut i2c_driver = Lsm6dsoxDriver::new(I2cInterface::default(bus.clone()));
    i2c_driver.shutdown();

    let transactions = bus.transactions();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].1, vec![WireOp::Write(vec![0x11, 0x00])]);
    assert_eq!(transactions[1].1, vec![WireOp::Write(vec![0x10, 0x00])]);

    // The SPI binding releases the device without touching it
    let device = FakeSpiDevice::default();
    let mut spi_driver = Lsm6dsoxDriver::new(SpiInterface::new(device.clone()));
    spi_driver.shutdown();

    assert!(device.transactions().is_empty());
}
