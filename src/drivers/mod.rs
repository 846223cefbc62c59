//! Light controller and one-shot WLED initialisation.

pub mod leds;
pub mod wled_init;
