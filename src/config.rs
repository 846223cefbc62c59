//! WLED operating-point configuration
//!
//! Values written once by the initialisation sequence.  The defaults are
//! the board's safe operating point; a host may override them with a JSON
//! blob (e.g. from firmware properties), which is validated before any
//! register is written.

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::registers;

/// WLED initialisation values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedConfig {
    /// WLEDMAXF: maximum drive current code (5 bits)
    pub wled_max_current: u8,
    /// WLEDTO: timeout code (3 bits)
    pub wled_timeout: u8,
    /// WLEDC1: duty/current calibration (5 bits)
    pub wled_c1: u8,
    /// WLEDC2: duty/current calibration (5 bits)
    pub wled_c2: u8,
    /// WLEDCTL: control mode written at init (enable bit must be clear)
    pub wled_ctl: u8,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            wled_max_current: 0x1f,
            wled_timeout: 0x07,
            wled_c1: 0x1f,
            wled_c2: 0x1f,
            wled_ctl: 0x0c,
        }
    }
}

impl LedConfig {
    /// Reject values that set bits outside their register field.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.wled_max_current & !registers::WLEDMAXF_FIELD != 0 {
            return Err(ConfigurationError::InvalidValue("wled_max_current"));
        }
        if self.wled_timeout & !registers::WLEDTO_FIELD != 0 {
            return Err(ConfigurationError::InvalidValue("wled_timeout"));
        }
        if self.wled_c1 & !registers::WLEDC_FIELD != 0 {
            return Err(ConfigurationError::InvalidValue("wled_c1"));
        }
        if self.wled_c2 & !registers::WLEDC_FIELD != 0 {
            return Err(ConfigurationError::InvalidValue("wled_c2"));
        }
        // The white LED must come up dark; it is switched on by brightness
        // requests only.
        if self.wled_ctl & registers::WLED_CTL_MASK != 0 {
            return Err(ConfigurationError::InvalidValue("wled_ctl"));
        }
        Ok(())
    }

    /// Parse and validate a JSON override.  Missing fields keep their defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigurationError> {
        let config: Self =
            serde_json::from_slice(bytes).map_err(|_| ConfigurationError::Malformed)?;
        config.validate()?;
        Ok(config)
    }
}
