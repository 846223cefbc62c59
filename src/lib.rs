//! TPS68470 indicator LED driver.
//!
//! Drives the two current-sink LEDs (ILED_A, ILED_B) and the white LED
//! (WLED) of a TPS68470 camera PMIC through its register channel.  The
//! host supplies the channel and a light registrar; everything else is
//! plain logic, testable on the host with the simulated channel.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod registers;

pub use app::bootstrap::{DRIVER_NAME, probe, remove};
pub use drivers::leds::{Controller, Light, LightId};
pub use error::{Error, Result};
