//! Port traits: the boundary between the LED driver and its host.
//!
//! ```text
//!   RegisterChannel ──▶ Controller ◀── LightRegistrar
//!   (PMIC registers)                  (host light framework)
//! ```
//!
//! The host supplies both sides.  The [`Controller`](crate::drivers::leds::Controller)
//! consumes them via generics, so the driver core is testable with fakes
//! and never touches a bus directly.

use crate::drivers::leds::{Light, LightId};
use crate::error::{BusFault, RegistrationError};

// ───────────────────────────────────────────────────────────────
// Register channel (driven adapter: driver → PMIC)
// ───────────────────────────────────────────────────────────────

/// Byte-wide register access to the PMIC.
///
/// Methods take `&self`: the channel is shared with the parent device and
/// other function drivers, so implementations serialise access internally.
/// Each [`update_bits`](Self::update_bits) call must appear atomic to every
/// other user of the channel.
pub trait RegisterChannel {
    /// Read one register.
    fn read(&self, address: u8) -> Result<u8, BusFault>;

    /// Overwrite one register.
    fn write(&self, address: u8, value: u8) -> Result<(), BusFault>;

    /// Read-modify-write the bits selected by `mask` to `value & mask`.
    ///
    /// Performs one read and, only if the register changes, one write.
    /// Returns whether a write happened.
    ///
    /// The default implementation is not atomic.  Channels shared between
    /// callers override it to hold their lock across both accesses.
    fn update_bits(&self, address: u8, mask: u8, value: u8) -> Result<bool, BusFault> {
        let old = self.read(address)?;
        let new = merge_bits(old, mask, value);
        if new == old {
            return Ok(false);
        }
        self.write(address, new)?;
        Ok(true)
    }
}

/// `old` with the `mask` bits replaced by the matching bits of `value`.
pub const fn merge_bits(old: u8, mask: u8, value: u8) -> u8 {
    (old & !mask) | (value & mask)
}

// ───────────────────────────────────────────────────────────────
// Light registrar (driving adapter: host framework → driver)
// ───────────────────────────────────────────────────────────────

/// The host's generic light-device registry.
///
/// A registered [`Light`] carries its [`LightId`]; the host routes later
/// brightness requests for that device back through
/// [`Controller::set_brightness`](crate::drivers::leds::Controller::set_brightness)
/// with the same id.
pub trait LightRegistrar {
    /// Publish one light.  A refusal aborts the whole probe.
    fn register(&mut self, light: &Light) -> Result<(), RegistrationError>;

    /// Withdraw a previously registered light.
    fn unregister(&mut self, id: LightId);
}
