//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter         | Implements       | Connects to                 |
//! |-----------------|------------------|-----------------------------|
//! | `i2c`           | RegisterChannel  | PMIC over embedded-hal I2C  |
//! | `sim`           | RegisterChannel  | In-memory register file     |
//! | `log_registrar` | LightRegistrar   | Serial log output           |

pub mod i2c;
pub mod log_registrar;
pub mod sim;
