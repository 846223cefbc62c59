//! Indicator light controller.
//!
//! Maps the three TPS68470 lights onto their enable bits:
//!
//! | Light  | Register | Mask   |
//! |--------|----------|--------|
//! | ILED_A | ILEDCTL  | bit 2  |
//! | ILED_B | ILEDCTL  | bit 6  |
//! | WLED   | WLEDCTL  | bit 0  |
//!
//! ILED_A and ILED_B share one register, so every change is a
//! read-modify-write through [`RegisterChannel::update_bits`].  Switching a
//! light off clears only its own bits.
//!
//! Brightness is binary: 0 is off, 1 ([`LED_ON`]) is on.

use core::fmt::{self, Write as _};

use heapless::String;
use log::debug;

use crate::app::ports::RegisterChannel;
use crate::error::{ConfigurationError, DeviceIoError, Error, IoContext, Result};
use crate::registers;

pub const LED_OFF: u8 = 0;
pub const LED_ON: u8 = 1;

/// Number of lights on the part.
pub const NUM_LEDS: usize = 3;

/// Function suffix appended to every light name.
pub const LED_FUNCTION: &str = "indicator";

/// Capacity of a formatted light name.
pub const NAME_CAPACITY: usize = 32;

pub type LightName = String<NAME_CAPACITY>;

// ── Identity ──────────────────────────────────────────────────

/// Which physical light a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum LightId {
    IledA = 0,
    IledB = 1,
    Wled = 2,
}

/// Chip-level names, indexed by [`LightId`].
const NAMES: [&str; NUM_LEDS] = ["tps68470-iled_a", "tps68470-iled_b", "tps68470-wled"];

/// Enable field of each light, indexed by [`LightId`].
const FIELDS: [RegisterField; NUM_LEDS] = [
    RegisterField {
        address: registers::ILEDCTL,
        mask: registers::ILED_A_CTL_MASK,
    },
    RegisterField {
        address: registers::ILEDCTL,
        mask: registers::ILED_B_CTL_MASK,
    },
    RegisterField {
        address: registers::WLEDCTL,
        mask: registers::WLED_CTL_MASK,
    },
];

impl LightId {
    /// Every light, in registration order.
    pub const ALL: [Self; NUM_LEDS] = [Self::IledA, Self::IledB, Self::Wled];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn chip_name(self) -> &'static str {
        NAMES[self.index()]
    }

    pub const fn field(self) -> RegisterField {
        FIELDS[self.index()]
    }
}

impl TryFrom<u8> for LightId {
    type Error = ConfigurationError;

    fn try_from(raw: u8) -> core::result::Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::IledA),
            1 => Ok(Self::IledB),
            2 => Ok(Self::Wled),
            other => Err(ConfigurationError::InvalidLightId(other)),
        }
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chip_name())
    }
}

/// Register address and bitmask owned by one light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterField {
    pub address: u8,
    pub mask: u8,
}

// ── Light ─────────────────────────────────────────────────────

/// One controllable indicator, as published to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Light {
    id: LightId,
    name: LightName,
    max_brightness: u8,
}

impl Light {
    /// Build the light for `id`, named `"<chip-name>::indicator"`.
    pub fn new(id: LightId) -> core::result::Result<Self, ConfigurationError> {
        let mut name = LightName::new();
        write!(name, "{}::{}", id.chip_name(), LED_FUNCTION)
            .map_err(|_| ConfigurationError::NameOverflow(id))?;
        Ok(Self {
            id,
            name,
            max_brightness: LED_ON,
        })
    }

    pub fn id(&self) -> LightId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_brightness(&self) -> u8 {
        self.max_brightness
    }
}

// ── Controller ────────────────────────────────────────────────

/// The bound PMIC instance and its three lights.
///
/// Borrows the register channel from the parent device; the lifetime
/// ties the controller to it.
pub struct Controller<'a, C: RegisterChannel + ?Sized> {
    channel: &'a C,
    lights: [Light; NUM_LEDS],
}

impl<'a, C: RegisterChannel + ?Sized> Controller<'a, C> {
    /// Bind to the parent's register channel.
    ///
    /// Fails with [`ConfigurationError::MissingChannel`] when the parent has
    /// none.  No register is touched.
    pub fn new(channel: Option<&'a C>) -> Result<Self> {
        let channel = channel.ok_or(ConfigurationError::MissingChannel)?;
        let lights = [
            Light::new(LightId::IledA)?,
            Light::new(LightId::IledB)?,
            Light::new(LightId::Wled)?,
        ];
        Ok(Self { channel, lights })
    }

    pub fn lights(&self) -> &[Light; NUM_LEDS] {
        &self.lights
    }

    pub fn light_info(&self, id: LightId) -> &Light {
        &self.lights[id.index()]
    }

    /// A handle bound to one light, for hosts that dispatch per device.
    pub fn light(&self, id: LightId) -> LightHandle<'_, C> {
        LightHandle {
            controller: self,
            id,
        }
    }

    pub(crate) fn channel(&self) -> &'a C {
        self.channel
    }

    /// Switch one light on (`level >= 1`) or off (`level == 0`).
    ///
    /// Levels above the light's max are rejected before any bus access.
    pub fn set_brightness(&self, id: LightId, level: u8) -> Result<()> {
        let light = &self.lights[id.index()];
        if level > light.max_brightness {
            return Err(Error::InvalidArgument {
                light: id,
                level,
                max: light.max_brightness,
            });
        }

        let field = id.field();
        let value = if level == LED_OFF { 0 } else { field.mask };
        let written = self
            .channel
            .update_bits(field.address, field.mask, value)
            .map_err(|fault| DeviceIoError::new(field.address, fault, IoContext::Light(id)))?;

        debug!(
            "leds: {} -> {} (reg 0x{:02x} {})",
            id,
            level,
            field.address,
            if written { "written" } else { "unchanged" }
        );
        Ok(())
    }

    /// [`set_brightness`](Self::set_brightness) for hosts that carry the
    /// light selector as a raw index.
    pub fn set_brightness_raw(&self, raw_id: u8, level: u8) -> Result<()> {
        let id = LightId::try_from(raw_id)?;
        self.set_brightness(id, level)
    }

    /// Current state of one light, read back from its register.
    pub fn brightness(&self, id: LightId) -> Result<u8> {
        let field = id.field();
        let reg = self
            .channel
            .read(field.address)
            .map_err(|fault| DeviceIoError::new(field.address, fault, IoContext::Light(id)))?;
        Ok(if reg & field.mask == field.mask {
            LED_ON
        } else {
            LED_OFF
        })
    }
}

// ── Per-light handle ──────────────────────────────────────────

/// Brightness callback bound to a single light.
pub struct LightHandle<'c, C: RegisterChannel + ?Sized> {
    controller: &'c Controller<'c, C>,
    id: LightId,
}

impl<C: RegisterChannel + ?Sized> LightHandle<'_, C> {
    pub fn id(&self) -> LightId {
        self.id
    }

    pub fn set(&self, level: u8) -> Result<()> {
        self.controller.set_brightness(self.id, level)
    }

    pub fn get(&self) -> Result<u8> {
        self.controller.brightness(self.id)
    }
}
