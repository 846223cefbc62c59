//! Unified error types for the TPS68470 LED driver.
//!
//! A single `Error` enum that every stage (construction, registration,
//! initialisation, brightness changes) converts into.  All variants are
//! `Copy` so they can be handed back to the host framework without
//! allocation.

use core::fmt;

use embedded_hal::i2c::ErrorKind;

use crate::drivers::leds::LightId;

// ---------------------------------------------------------------------------
// Top-level driver error
// ---------------------------------------------------------------------------

/// Every fallible operation in the driver funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The driver was set up with a missing or invalid input.
    Config(ConfigurationError),
    /// A brightness level outside `0..=max` was requested.
    InvalidArgument { light: LightId, level: u8, max: u8 },
    /// A register read or write failed on the bus.
    DeviceIo(DeviceIoError),
    /// The host light framework refused to register a light.
    Registration { light: LightId, cause: RegistrationError },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::InvalidArgument { light, level, max } => {
                write!(f, "invalid argument: {light} brightness {level} exceeds max {max}")
            }
            Self::DeviceIo(e) => write!(f, "device I/O: {e}"),
            Self::Registration { light, cause } => {
                write!(f, "registration: {light}: {cause}")
            }
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The parent device did not provide a register channel.
    MissingChannel,
    /// A raw light selector outside the closed set.
    InvalidLightId(u8),
    /// The formatted light name does not fit its fixed-capacity buffer.
    NameOverflow(LightId),
    /// A configuration field sets bits outside its register field.
    InvalidValue(&'static str),
    /// A serialised configuration blob could not be parsed.
    Malformed,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingChannel => write!(f, "no register channel found for parent"),
            Self::InvalidLightId(raw) => write!(f, "invalid light id {raw}"),
            Self::NameOverflow(light) => write!(f, "name for {light} does not fit"),
            Self::InvalidValue(field) => write!(f, "{field} out of range"),
            Self::Malformed => write!(f, "malformed configuration"),
        }
    }
}

impl From<ConfigurationError> for Error {
    fn from(e: ConfigurationError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Register I/O errors
// ---------------------------------------------------------------------------

/// Direction of the register access that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOp {
    Read,
    Write,
}

impl fmt::Display for RegisterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Failure reported by a [`RegisterChannel`](crate::app::ports::RegisterChannel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault {
    pub op: RegisterOp,
    pub kind: ErrorKind,
}

impl BusFault {
    pub const fn read(kind: ErrorKind) -> Self {
        Self { op: RegisterOp::Read, kind }
    }

    pub const fn write(kind: ErrorKind) -> Self {
        Self { op: RegisterOp::Write, kind }
    }
}

/// What the driver was doing when the bus failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoContext {
    /// A brightness change for one light.
    Light(LightId),
    /// One step of the WLED initialisation sequence, by register name.
    Init(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIoError {
    pub address: u8,
    pub op: RegisterOp,
    pub kind: ErrorKind,
    pub context: IoContext,
}

impl DeviceIoError {
    pub const fn new(address: u8, fault: BusFault, context: IoContext) -> Self {
        Self {
            address,
            op: fault.op,
            kind: fault.kind,
            context,
        }
    }
}

impl fmt::Display for DeviceIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.context {
            IoContext::Light(light) => write!(
                f,
                "{} of reg 0x{:02x} for {} failed ({:?})",
                self.op, self.address, light, self.kind
            ),
            IoContext::Init(step) => write!(
                f,
                "error setting {} (reg 0x{:02x} {} failed, {:?})",
                step, self.address, self.op, self.kind
            ),
        }
    }
}

impl From<DeviceIoError> for Error {
    fn from(e: DeviceIoError) -> Self {
        Self::DeviceIo(e)
    }
}

// ---------------------------------------------------------------------------
// Registration errors
// ---------------------------------------------------------------------------

/// Reasons a host [`LightRegistrar`](crate::app::ports::LightRegistrar) may
/// refuse a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    /// Another device already uses this name.
    NameTaken,
    /// The host ran out of memory for the device.
    NoMemory,
    /// Any other host-specific refusal.
    Rejected(&'static str),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTaken => write!(f, "name already registered"),
            Self::NoMemory => write!(f, "out of memory"),
            Self::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Driver-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
