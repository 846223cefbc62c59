//! Integration tests for the register contract of `Controller::set_brightness`.

use tps68470_leds::adapters::sim::SimRegisterChannel;
use tps68470_leds::drivers::leds::{Controller, LED_OFF, LED_ON, LightId};
use tps68470_leds::error::{Error, RegisterOp};

/// Register contents that exercise neighbouring bits on and off.
const BACKGROUNDS: [u8; 4] = [0x00, 0xff, 0b1010_1010, 0b0101_0101];

#[test]
fn every_light_and_level_obeys_the_rmw_contract() {
    for id in LightId::ALL {
        let field = id.field();
        for background in BACKGROUNDS {
            for level in [LED_OFF, LED_ON] {
                let sim = SimRegisterChannel::with_registers(&[(field.address, background)]);
                let ctrl = Controller::new(Some(&sim)).unwrap();

                ctrl.set_brightness(id, level).unwrap();

                let accesses = sim.accesses();
                let reads = accesses.iter().filter(|a| a.op == RegisterOp::Read).count();
                let writes = accesses.iter().filter(|a| a.op == RegisterOp::Write).count();
                assert_eq!(reads, 1, "{id} level {level} bg {background:#04x}");
                assert!(writes <= 1, "{id} level {level} bg {background:#04x}");
                assert!(accesses.iter().all(|a| a.address == field.address));

                let after = sim.peek(field.address);
                let expected_mask_bits = if level == LED_ON { field.mask } else { 0 };
                assert_eq!(after & field.mask, expected_mask_bits);
                assert_eq!(after & !field.mask, background & !field.mask);
            }
        }
    }
}

#[test]
fn shared_register_isolation() {
    let sim = SimRegisterChannel::new();
    let ctrl = Controller::new(Some(&sim)).unwrap();

    ctrl.set_brightness(LightId::IledA, LED_ON).unwrap();
    ctrl.set_brightness(LightId::IledB, LED_OFF).unwrap();

    assert_eq!(ctrl.brightness(LightId::IledA).unwrap(), LED_ON);
    assert_eq!(ctrl.brightness(LightId::IledB).unwrap(), LED_OFF);
}

#[test]
fn both_iled_lights_toggle_independently() {
    let sim = SimRegisterChannel::new();
    let ctrl = Controller::new(Some(&sim)).unwrap();

    ctrl.set_brightness(LightId::IledA, LED_ON).unwrap();
    ctrl.set_brightness(LightId::IledB, LED_ON).unwrap();
    ctrl.set_brightness(LightId::IledA, LED_OFF).unwrap();

    assert_eq!(ctrl.brightness(LightId::IledA).unwrap(), LED_OFF);
    assert_eq!(ctrl.brightness(LightId::IledB).unwrap(), LED_ON);
}

#[test]
fn level_two_is_rejected_without_bus_traffic() {
    for id in LightId::ALL {
        let sim = SimRegisterChannel::new();
        let ctrl = Controller::new(Some(&sim)).unwrap();

        let err = ctrl.set_brightness(id, 2).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                light: id,
                level: 2,
                max: 1
            }
        );
        assert!(sim.writes().is_empty());
        assert!(sim.accesses().is_empty());
    }
}

#[test]
fn read_failure_skips_the_write() {
    let sim = SimRegisterChannel::new();
    let ctrl = Controller::new(Some(&sim)).unwrap();
    let field = LightId::Wled.field();
    sim.fail_address(field.address);

    let Err(Error::DeviceIo(io)) = ctrl.set_brightness(LightId::Wled, LED_ON) else {
        panic!("expected DeviceIo");
    };
    assert_eq!(io.address, field.address);
    assert_eq!(io.op, RegisterOp::Read);
    assert!(sim.writes().is_empty());
}

#[test]
fn write_failure_is_reported_not_retried() {
    let sim = SimRegisterChannel::new();
    let ctrl = Controller::new(Some(&sim)).unwrap();
    sim.fail_nth_write(1);

    let Err(Error::DeviceIo(io)) = ctrl.set_brightness(LightId::IledB, LED_ON) else {
        panic!("expected DeviceIo");
    };
    assert_eq!(io.op, RegisterOp::Write);
    // One read, no successful write, no second attempt.
    assert_eq!(sim.accesses().len(), 1);
    assert_eq!(ctrl.brightness(LightId::IledB).unwrap(), LED_OFF);
}
