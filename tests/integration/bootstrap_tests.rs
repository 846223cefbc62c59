//! Integration tests for probe → registration → WLED init → host dispatch.

use super::mock_hw::{MockRegistrar, RegistrarCall};

use tps68470_leds::adapters::sim::SimRegisterChannel;
use tps68470_leds::config::LedConfig;
use tps68470_leds::drivers::leds::{LED_OFF, LED_ON, LightId};
use tps68470_leds::error::{ConfigurationError, Error, IoContext, RegisterOp, RegistrationError};
use tps68470_leds::{probe, registers, remove};

const NAMES: [&str; 3] = [
    "tps68470-iled_a::indicator",
    "tps68470-iled_b::indicator",
    "tps68470-wled::indicator",
];

// ── Happy path ────────────────────────────────────────────────

#[test]
fn probe_registers_three_binary_lights_in_order() {
    let sim = SimRegisterChannel::new();
    let mut host = MockRegistrar::new();

    probe(Some(&sim), &mut host, &LedConfig::default()).unwrap();

    assert_eq!(
        host.calls,
        [
            RegistrarCall::Register {
                name: NAMES[0].into(),
                id: LightId::IledA,
                max: 1
            },
            RegistrarCall::Register {
                name: NAMES[1].into(),
                id: LightId::IledB,
                max: 1
            },
            RegistrarCall::Register {
                name: NAMES[2].into(),
                id: LightId::Wled,
                max: 1
            },
        ]
    );
}

#[test]
fn probe_writes_wled_operating_point_exactly_once() {
    let sim = SimRegisterChannel::new();
    let mut host = MockRegistrar::new();

    probe(Some(&sim), &mut host, &LedConfig::default()).unwrap();

    assert_eq!(
        sim.writes(),
        [
            (registers::WLEDMAXF, 0x1f),
            (registers::WLEDTO, 0x07),
            (registers::WLEDC1, 0x1f),
            (registers::WLEDC2, 0x1f),
            (registers::WLEDCTL, 0x0c),
        ]
    );
}

#[test]
fn host_dispatch_by_name_reaches_the_right_bits() {
    let sim = SimRegisterChannel::new();
    let mut host = MockRegistrar::new();
    let ctrl = probe(Some(&sim), &mut host, &LedConfig::default()).unwrap();

    host.write_brightness(&ctrl, NAMES[2], LED_ON).unwrap();
    assert_eq!(sim.peek(registers::WLEDCTL), 0x0c | registers::WLED_CTL_MASK);

    host.write_brightness(&ctrl, NAMES[1], LED_ON).unwrap();
    assert_eq!(sim.peek(registers::ILEDCTL), registers::ILED_B_CTL_MASK);

    host.write_brightness(&ctrl, NAMES[2], LED_OFF).unwrap();
    assert_eq!(sim.peek(registers::WLEDCTL), 0x0c, "init mode bits survive OFF");
}

#[test]
fn custom_config_is_written() {
    let sim = SimRegisterChannel::new();
    let mut host = MockRegistrar::new();
    let config = LedConfig::from_json(br#"{"wled_max_current": 8, "wled_timeout": 3}"#).unwrap();

    probe(Some(&sim), &mut host, &config).unwrap();
    assert_eq!(sim.peek(registers::WLEDMAXF), 8);
    assert_eq!(sim.peek(registers::WLEDTO), 3);
    assert_eq!(sim.peek(registers::WLEDC1), 0x1f);
}

// ── Failure paths ─────────────────────────────────────────────

#[test]
fn missing_channel_fails_before_any_registration() {
    let mut host = MockRegistrar::new();

    let err = probe::<SimRegisterChannel, _>(None, &mut host, &LedConfig::default())
        .err()
        .unwrap();

    assert_eq!(err, Error::Config(ConfigurationError::MissingChannel));
    assert_eq!(host.attempts(), 0);
    assert!(host.calls.is_empty());
}

#[test]
fn second_light_refused_stops_third_and_init() {
    let sim = SimRegisterChannel::new();
    let mut host = MockRegistrar::failing_at(1);

    let err = probe(Some(&sim), &mut host, &LedConfig::default())
        .err()
        .unwrap();

    assert_eq!(
        err,
        Error::Registration {
            light: LightId::IledB,
            cause: RegistrationError::NoMemory
        }
    );
    assert_eq!(host.attempts(), 2);
    assert_eq!(host.registered_names(), [NAMES[0]]);
    assert_eq!(host.unregistered(), [LightId::IledA]);
    assert!(sim.accesses().is_empty(), "init must never run");
}

#[test]
fn third_init_write_failing_aborts_startup() {
    let sim = SimRegisterChannel::new();
    sim.fail_nth_write(3);
    let mut host = MockRegistrar::new();

    let err = probe(Some(&sim), &mut host, &LedConfig::default())
        .err()
        .unwrap();

    let Error::DeviceIo(io) = err else {
        panic!("expected DeviceIo, got {err:?}");
    };
    assert_eq!(io.address, registers::WLEDC1);
    assert_eq!(io.op, RegisterOp::Write);
    assert_eq!(io.context, IoContext::Init("WLEDC1"));

    // WLEDC2 and WLEDCTL never written.
    assert_eq!(
        sim.writes(),
        [(registers::WLEDMAXF, 0x1f), (registers::WLEDTO, 0x07)]
    );
    // No light survives a failed startup.
    assert_eq!(
        host.unregistered(),
        [LightId::Wled, LightId::IledB, LightId::IledA]
    );
}

#[test]
fn retry_after_failed_init_converges() {
    let sim = SimRegisterChannel::new();
    sim.fail_nth_write(4);
    let mut host = MockRegistrar::new();
    assert!(probe(Some(&sim), &mut host, &LedConfig::default()).is_err());

    sim.clear_faults();
    let mut host = MockRegistrar::new();
    probe(Some(&sim), &mut host, &LedConfig::default()).unwrap();

    assert_eq!(sim.peek(registers::WLEDC2), 0x1f);
    assert_eq!(sim.peek(registers::WLEDCTL), 0x0c);
}

#[test]
fn failed_brightness_call_leaves_controller_usable() {
    let sim = SimRegisterChannel::new();
    let mut host = MockRegistrar::new();
    let ctrl = probe(Some(&sim), &mut host, &LedConfig::default()).unwrap();

    sim.fail_address(registers::ILEDCTL);
    assert!(ctrl.set_brightness(LightId::IledA, LED_ON).is_err());
    ctrl.set_brightness(LightId::Wled, LED_ON).unwrap();

    sim.clear_faults();
    ctrl.set_brightness(LightId::IledA, LED_ON).unwrap();
    assert_eq!(ctrl.brightness(LightId::IledA).unwrap(), LED_ON);
}

#[test]
fn remove_unregisters_every_light() {
    let sim = SimRegisterChannel::new();
    let mut host = MockRegistrar::new();
    let ctrl = probe(Some(&sim), &mut host, &LedConfig::default()).unwrap();

    remove(ctrl, &mut host);
    assert_eq!(
        host.unregistered(),
        [LightId::Wled, LightId::IledB, LightId::IledA]
    );
}
