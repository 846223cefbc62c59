//! One-shot WLED initialisation.
//!
//! Brings the white LED driver to its configured operating point before
//! any brightness request can reach it.  Called once from
//! [`probe`](crate::app::bootstrap::probe) after every light is registered.
//!
//! The writes go out in a fixed order and stop at the first failure.
//! Nothing is rolled back; the next successful run overwrites the same
//! registers with the same values.

use log::{debug, error, info};

use crate::app::ports::RegisterChannel;
use crate::config::LedConfig;
use crate::drivers::leds::Controller;
use crate::error::{DeviceIoError, IoContext, Result};
use crate::registers;

/// One register write in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep {
    pub name: &'static str,
    pub address: u8,
    pub value: u8,
}

/// Number of writes in the sequence.
pub const INIT_STEPS: usize = 5;

/// The ordered writes for `config`: max current, timeout, both
/// calibration registers, then control mode.
pub fn sequence(config: &LedConfig) -> [InitStep; INIT_STEPS] {
    [
        InitStep {
            name: "WLEDMAXF",
            address: registers::WLEDMAXF,
            value: config.wled_max_current,
        },
        InitStep {
            name: "WLEDTO",
            address: registers::WLEDTO,
            value: config.wled_timeout,
        },
        InitStep {
            name: "WLEDC1",
            address: registers::WLEDC1,
            value: config.wled_c1,
        },
        InitStep {
            name: "WLEDC2",
            address: registers::WLEDC2,
            value: config.wled_c2,
        },
        InitStep {
            name: "WLEDCTL",
            address: registers::WLEDCTL,
            value: config.wled_ctl,
        },
    ]
}

/// Write the WLED operating point.
pub fn initialize<C: RegisterChannel + ?Sized>(
    controller: &Controller<'_, C>,
    config: &LedConfig,
) -> Result<()> {
    let channel = controller.channel();
    for step in sequence(config) {
        if let Err(fault) = channel.write(step.address, step.value) {
            let e = DeviceIoError::new(step.address, fault, IoContext::Init(step.name));
            error!("leds: {}", e);
            return Err(e.into());
        }
        debug!("leds: {} (0x{:02x}) <- 0x{:02x}", step.name, step.address, step.value);
    }
    info!("leds: WLED configured");
    Ok(())
}
