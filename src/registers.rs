//! TPS68470 register map for the indicator LED blocks.
//!
//! Single source of truth: the controller and the initialisation sequence
//! reference these constants rather than hard-coding addresses.

/// 7-bit I2C address of the TPS68470 (fixed by the part).
pub const I2C_ADDR: u8 = 0x4d;

// ---------------------------------------------------------------------------
// ILED (current sink) control
// ---------------------------------------------------------------------------

/// Shared control register for both current-sink LEDs.
pub const ILEDCTL: u8 = 0x28;
/// ILED_A enable bit within [`ILEDCTL`].
pub const ILED_A_CTL_MASK: u8 = 1 << 2;
/// ILED_B enable bit within [`ILEDCTL`].
pub const ILED_B_CTL_MASK: u8 = 1 << 6;

// ---------------------------------------------------------------------------
// WLED (white LED) drive
// ---------------------------------------------------------------------------

/// Maximum drive current.
pub const WLEDMAXF: u8 = 0x2f;
/// Timeout behaviour.
pub const WLEDTO: u8 = 0x30;
/// Duty / current calibration 1.
pub const WLEDC1: u8 = 0x34;
/// Duty / current calibration 2.
pub const WLEDC2: u8 = 0x35;
/// Control-mode register; also holds the WLED enable bit.
pub const WLEDCTL: u8 = 0x36;
/// WLED enable bit within [`WLEDCTL`].
pub const WLED_CTL_MASK: u8 = 1 << 0;

// Field widths used to validate init values.
pub const WLEDMAXF_FIELD: u8 = 0x1f;
pub const WLEDTO_FIELD: u8 = 0x07;
pub const WLEDC_FIELD: u8 = 0x1f;
