//! I2C register channel.
//!
//! Implements [`RegisterChannel`] over any `embedded-hal` I2C bus.  The bus
//! sits behind an `embassy-sync` blocking mutex, so the channel can be
//! shared by reference between the LED driver and the PMIC's other
//! function drivers.  `update_bits` holds the lock across its read and
//! write.
//!
//! Register protocol: write `[reg]` then read one byte; write `[reg, value]`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::i2c::{Error as _, I2c};

use crate::app::ports::{RegisterChannel, merge_bits};
use crate::error::BusFault;
use crate::registers;

/// Register channel to one device on a shared I2C bus.
pub struct I2cRegisterChannel<M: RawMutex, I2C> {
    bus: Mutex<M, RefCell<I2C>>,
    address: u8,
}

impl<M: RawMutex, I2C: I2c> I2cRegisterChannel<M, I2C> {
    /// Channel to the TPS68470 at its fixed address.
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_addr(i2c, registers::I2C_ADDR)
    }

    pub fn new_with_addr(i2c: I2C, address: u8) -> Self {
        Self {
            bus: Mutex::new(RefCell::new(i2c)),
            address,
        }
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.bus.into_inner().into_inner()
    }
}

fn read_reg<I2C: I2c>(bus: &mut I2C, device: u8, reg: u8) -> Result<u8, BusFault> {
    let mut buf = [0u8; 1];
    bus.write_read(device, &[reg], &mut buf)
        .map_err(|e| BusFault::read(e.kind()))?;
    Ok(buf[0])
}

fn write_reg<I2C: I2c>(bus: &mut I2C, device: u8, reg: u8, value: u8) -> Result<(), BusFault> {
    bus.write(device, &[reg, value])
        .map_err(|e| BusFault::write(e.kind()))
}

impl<M: RawMutex, I2C: I2c> RegisterChannel for I2cRegisterChannel<M, I2C> {
    fn read(&self, address: u8) -> Result<u8, BusFault> {
        self.bus
            .lock(|bus| read_reg(&mut *bus.borrow_mut(), self.address, address))
    }

    fn write(&self, address: u8, value: u8) -> Result<(), BusFault> {
        self.bus
            .lock(|bus| write_reg(&mut *bus.borrow_mut(), self.address, address, value))
    }

    fn update_bits(&self, address: u8, mask: u8, value: u8) -> Result<bool, BusFault> {
        self.bus.lock(|bus| {
            let mut bus = bus.borrow_mut();
            let old = read_reg(&mut *bus, self.address, address)?;
            let new = merge_bits(old, mask, value);
            if new == old {
                return Ok(false);
            }
            write_reg(&mut *bus, self.address, address, new)?;
            Ok(true)
        })
    }
}
