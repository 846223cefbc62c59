//! TPS68470 LED bring-up firmware: ESP32 host.
//!
//! ```text
//!  I2C0 ──▶ I2cRegisterChannel ──▶ probe ──▶ Controller ──▶ heartbeat loop
//!                                    │
//!                                    └──▶ LogRegistrar (serial log)
//! ```
//!
//! Probes the three lights, walks each one on and off once, then blinks
//! ILED_A as a heartbeat.
#![deny(unused_must_use)]

use anyhow::Result;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::{info, warn};

use tps68470_leds::adapters::i2c::I2cRegisterChannel;
use tps68470_leds::adapters::log_registrar::LogRegistrar;
use tps68470_leds::config::LedConfig;
use tps68470_leds::drivers::leds::{LED_OFF, LED_ON, LightId};
use tps68470_leds::{DRIVER_NAME, pins, probe};

const WALK_STEP_MS: u32 = 250;
const HEARTBEAT_MS: u32 = 500;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    info!("{} v{}", DRIVER_NAME, env!("CARGO_PKG_VERSION"));

    // ── 2. PMIC bus ───────────────────────────────────────────
    let peripherals = Peripherals::take()?;
    // SAFETY: these GPIOs are wired to the PMIC only and claimed nowhere else.
    let (sda, scl) = unsafe {
        (
            AnyIOPin::new(pins::PMIC_SDA_GPIO),
            AnyIOPin::new(pins::PMIC_SCL_GPIO),
        )
    };
    let i2c_config = I2cConfig::new().baudrate(Hertz(pins::PMIC_I2C_HZ));
    let i2c = I2cDriver::new(peripherals.i2c0, sda, scl, &i2c_config)?;
    let channel: I2cRegisterChannel<CriticalSectionRawMutex, _> = I2cRegisterChannel::new(i2c);

    // ── 3. Probe ──────────────────────────────────────────────
    let mut registrar = LogRegistrar::new();
    let controller = probe(Some(&channel), &mut registrar, &LedConfig::default())?;

    // ── 4. Walk every light once ──────────────────────────────
    for &id in registrar.live() {
        controller.set_brightness(id, LED_ON)?;
        FreeRtos::delay_ms(WALK_STEP_MS);
        controller.set_brightness(id, LED_OFF)?;
    }

    // ── 5. Heartbeat ──────────────────────────────────────────
    let heartbeat = controller.light(LightId::IledA);
    loop {
        for level in [LED_ON, LED_OFF] {
            if let Err(e) = heartbeat.set(level) {
                warn!("heartbeat: {}", e);
            }
            FreeRtos::delay_ms(HEARTBEAT_MS);
        }
    }
}
