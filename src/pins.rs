//! Peripheral pin assignments for the ESP32 host board.
//!
//! Single source of truth for the firmware binary.  The TPS68470 hangs off
//! I2C0.

// ---------------------------------------------------------------------------
// PMIC control bus (I2C0)
// ---------------------------------------------------------------------------

/// I2C0 data line.
pub const PMIC_SDA_GPIO: i32 = 8;
/// I2C0 clock line.
pub const PMIC_SCL_GPIO: i32 = 9;
/// Bus clock.  The TPS68470 supports fast mode.
pub const PMIC_I2C_HZ: u32 = 400_000;
