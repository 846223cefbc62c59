//! Log-based light registrar adapter.
//!
//! Implements [`LightRegistrar`] for hosts without a light framework:
//! every registration is written to the logger (UART / USB-CDC in
//! production) and the registered set is tracked so the firmware loop
//! knows which lights it may drive.

use heapless::Vec;
use log::info;

use crate::app::ports::LightRegistrar;
use crate::drivers::leds::{Light, LightId, NUM_LEDS};
use crate::error::RegistrationError;

/// Adapter that logs each light and remembers which ones are live.
pub struct LogRegistrar {
    live: Vec<LightId, NUM_LEDS>,
}

impl Default for LogRegistrar {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRegistrar {
    pub fn new() -> Self {
        Self { live: Vec::new() }
    }

    /// Registered lights, in registration order.
    pub fn live(&self) -> &[LightId] {
        &self.live
    }
}

impl LightRegistrar for LogRegistrar {
    fn register(&mut self, light: &Light) -> Result<(), RegistrationError> {
        if self.live.contains(&light.id()) {
            return Err(RegistrationError::NameTaken);
        }
        self.live
            .push(light.id())
            .map_err(|_| RegistrationError::NoMemory)?;
        info!(
            "LED | registered {} id={:?} max_brightness={}",
            light.name(),
            light.id(),
            light.max_brightness()
        );
        Ok(())
    }

    fn unregister(&mut self, id: LightId) {
        self.live.retain(|&l| l != id);
        info!("LED | unregistered {}", id);
    }
}
