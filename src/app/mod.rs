//! Host-facing side of the driver.
//!
//! [`ports`] defines what the host must provide (a register channel and a
//! light registrar); [`bootstrap`] binds the driver to them.

pub mod bootstrap;
pub mod ports;
