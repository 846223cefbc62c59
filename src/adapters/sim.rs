//! Simulated PMIC register file.
//!
//! Used on the host (tests, fuzzing) in place of a real bus.  Records every
//! successful access and can be told to fail specific accesses, so callers
//! can assert on the exact register traffic.

use core::cell::{Cell, RefCell};

use embedded_hal::i2c::ErrorKind;

use crate::app::ports::RegisterChannel;
use crate::error::{BusFault, RegisterOp};

/// One completed register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterAccess {
    pub op: RegisterOp,
    pub address: u8,
    pub value: u8,
}

/// In-memory 256-register channel.  Single-threaded.
pub struct SimRegisterChannel {
    regs: RefCell<[u8; 256]>,
    log: RefCell<Vec<RegisterAccess>>,
    fail_address: Cell<Option<u8>>,
    fail_nth_write: Cell<Option<usize>>,
    write_attempts: Cell<usize>,
}

impl Default for SimRegisterChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl SimRegisterChannel {
    /// All registers zero, no faults armed.
    pub fn new() -> Self {
        Self {
            regs: RefCell::new([0; 256]),
            log: RefCell::new(Vec::new()),
            fail_address: Cell::new(None),
            fail_nth_write: Cell::new(None),
            write_attempts: Cell::new(0),
        }
    }

    /// Start from the given `(address, value)` contents.
    pub fn with_registers(preset: &[(u8, u8)]) -> Self {
        let sim = Self::new();
        for &(address, value) in preset {
            sim.poke(address, value);
        }
        sim
    }

    /// Register contents, bypassing the access log.
    pub fn peek(&self, address: u8) -> u8 {
        self.regs.borrow()[address as usize]
    }

    /// Set register contents, bypassing the access log.
    pub fn poke(&self, address: u8, value: u8) {
        self.regs.borrow_mut()[address as usize] = value;
    }

    pub fn accesses(&self) -> Vec<RegisterAccess> {
        self.log.borrow().clone()
    }

    /// Completed writes as `(address, value)` pairs, oldest first.
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.log
            .borrow()
            .iter()
            .filter(|a| a.op == RegisterOp::Write)
            .map(|a| (a.address, a.value))
            .collect()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }

    /// Fail every read and write of `address`.
    pub fn fail_address(&self, address: u8) {
        self.fail_address.set(Some(address));
    }

    /// Fail the `n`-th write attempt from now (1-based), regardless of address.
    pub fn fail_nth_write(&self, n: usize) {
        self.write_attempts.set(0);
        self.fail_nth_write.set(Some(n));
    }

    pub fn clear_faults(&self) {
        self.fail_address.set(None);
        self.fail_nth_write.set(None);
    }

    fn record(&self, op: RegisterOp, address: u8, value: u8) {
        self.log.borrow_mut().push(RegisterAccess { op, address, value });
    }
}

impl RegisterChannel for SimRegisterChannel {
    fn read(&self, address: u8) -> Result<u8, BusFault> {
        if self.fail_address.get() == Some(address) {
            return Err(BusFault::read(ErrorKind::Other));
        }
        let value = self.peek(address);
        self.record(RegisterOp::Read, address, value);
        Ok(value)
    }

    fn write(&self, address: u8, value: u8) -> Result<(), BusFault> {
        let attempt = self.write_attempts.get() + 1;
        self.write_attempts.set(attempt);
        if self.fail_address.get() == Some(address) || self.fail_nth_write.get() == Some(attempt) {
            return Err(BusFault::write(ErrorKind::Other));
        }
        self.poke(address, value);
        self.record(RegisterOp::Write, address, value);
        Ok(())
    }
}
