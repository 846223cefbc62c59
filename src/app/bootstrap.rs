//! Probe and teardown: binds the driver to its host.
//!
//! ```text
//!  parent channel ──▶ Controller::new ──▶ register ILED_A, ILED_B, WLED ──▶ WLED init ──▶ ready
//! ```
//!
//! Probe is all-or-nothing: if any light is refused or the WLED
//! initialisation fails, the lights registered so far are withdrawn again
//! (newest first) and the error is returned.  The host never sees a
//! partially working module.

use log::{error, info};

use crate::config::LedConfig;
use crate::drivers::leds::{Controller, LightId};
use crate::drivers::wled_init;
use crate::error::{Error, Result};

use super::ports::{LightRegistrar, RegisterChannel};

/// Name the host binds this driver by.
pub const DRIVER_NAME: &str = "tps68470-leds";

/// Bring the module up on `channel`, publishing every light to `registrar`.
///
/// `channel` is whatever the parent device handed over; `None` fails
/// before any light is registered or any register touched.
pub fn probe<'a, C, R>(
    channel: Option<&'a C>,
    registrar: &mut R,
    config: &LedConfig,
) -> Result<Controller<'a, C>>
where
    C: RegisterChannel + ?Sized,
    R: LightRegistrar + ?Sized,
{
    info!("leds: {} probe begins", DRIVER_NAME);

    let controller = Controller::new(channel).inspect_err(|e| error!("leds: {}", e))?;
    config.validate().inspect_err(|e| error!("leds: {}", e))?;

    for (registered, light) in controller.lights().iter().enumerate() {
        if let Err(cause) = registrar.register(light) {
            error!("leds: error registering {}: {}", light.name(), cause);
            unwind(registrar, &LightId::ALL[..registered]);
            return Err(Error::Registration {
                light: light.id(),
                cause,
            });
        }
        info!("leds: registered {} (max {})", light.name(), light.max_brightness());
    }

    if let Err(e) = wled_init::initialize(&controller, config) {
        unwind(registrar, &LightId::ALL);
        return Err(e);
    }

    info!("leds: {} ready", DRIVER_NAME);
    Ok(controller)
}

/// Withdraw every light of a probed module.
pub fn remove<C, R>(controller: Controller<'_, C>, registrar: &mut R)
where
    C: RegisterChannel + ?Sized,
    R: LightRegistrar + ?Sized,
{
    for light in controller.lights().iter().rev() {
        registrar.unregister(light.id());
    }
    info!("leds: {} removed", DRIVER_NAME);
}

fn unwind<R: LightRegistrar + ?Sized>(registrar: &mut R, registered: &[LightId]) {
    for &id in registered.iter().rev() {
        registrar.unregister(id);
    }
}
