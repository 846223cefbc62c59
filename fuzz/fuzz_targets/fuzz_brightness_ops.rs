//! Fuzz target: `Controller::set_brightness_raw`
//!
//! The first two bytes seed ILEDCTL and WLEDCTL; every following pair is a
//! raw (selector, level) command.  Asserts that no command ever panics and
//! that bits outside the lights' masks never move.
//!
//! cargo fuzz run fuzz_brightness_ops

#![no_main]

use libfuzzer_sys::fuzz_target;
use tps68470_leds::adapters::sim::SimRegisterChannel;
use tps68470_leds::drivers::leds::Controller;
use tps68470_leds::registers;

const ILED_BITS: u8 = registers::ILED_A_CTL_MASK | registers::ILED_B_CTL_MASK;

fuzz_target!(|data: &[u8]| {
    let [iledctl, wledctl, commands @ ..] = data else {
        return;
    };
    let sim = SimRegisterChannel::with_registers(&[
        (registers::ILEDCTL, *iledctl),
        (registers::WLEDCTL, *wledctl),
    ]);
    let Ok(ctrl) = Controller::new(Some(&sim)) else {
        return;
    };

    for pair in commands.chunks_exact(2) {
        // Errors are expected for bad selectors and levels; only panics matter.
        let _ = ctrl.set_brightness_raw(pair[0], pair[1]);
    }

    assert_eq!(
        sim.peek(registers::ILEDCTL) & !ILED_BITS,
        iledctl & !ILED_BITS,
        "ILEDCTL bits outside the ILED masks changed"
    );
    assert_eq!(
        sim.peek(registers::WLEDCTL) & !registers::WLED_CTL_MASK,
        wledctl & !registers::WLED_CTL_MASK,
        "WLEDCTL bits outside the WLED mask changed"
    );
});
