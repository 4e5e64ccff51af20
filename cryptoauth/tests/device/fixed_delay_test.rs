#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::rc::Rc;

use cryptoauth::config::{ExecutionStrategy, IfaceConfig};
use cryptoauth::constants::opcode;
use cryptoauth::device::{timing, DeviceBuilder};
use cryptoauth::protocol::Packet;
use cryptoauth::test_support::{Event, EventLog, SharedDelay, SimulatedDevice};
use cryptoauth::transport::RecordingDelay;
use cryptoauth::{ClockDivider, DeviceModel, Error};

#[test]
fn waits_tabulated_time_then_receives_once() {
    let mut sim = SimulatedDevice::new();
    sim.push_payload(&common::fixtures::info_revision()).unwrap();
    let mut dev = common::helpers::ecc608(sim, ExecutionStrategy::FixedDelay);

    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    dev.execute(&mut packet).unwrap();

    let expected = timing::lookup(opcode::INFO, DeviceModel::Ecc608, dev.clock_divider()).unwrap();
    assert_eq!(dev.delay().delays_ms, vec![2, expected]);
    assert_eq!(dev.execution_time_ms(), Some(expected));
    assert_eq!(packet.response(), &common::fixtures::info_revision());
}

#[test]
fn no_polling_when_result_is_late() {
    let mut sim = SimulatedDevice::new();
    sim.busy_reads = 1;
    let mut dev = common::helpers::ecc608(sim, ExecutionStrategy::FixedDelay);

    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    assert_eq!(dev.execute(&mut packet), Err(Error::NoResponse));
    assert_eq!(dev.delay().delays_ms.len(), 2);
}

#[test]
fn factory_divider_waits_less() {
    let mut sim = SimulatedDevice::new();
    sim.push_payload(&[0u8; 64]).unwrap();
    let mut dev = common::helpers::ecc608(sim, ExecutionStrategy::FixedDelay);
    dev.set_clock_divider(Some(ClockDivider::M0));

    let mut packet = Packet::new(opcode::SIGN, 0x80, 0x0000, &[]).unwrap();
    dev.execute(&mut packet).unwrap();
    assert_eq!(dev.delay().delays_ms.last(), Some(&1345));
}

#[test]
fn unsupported_opcode_aborts_before_send() {
    let mut dev = common::helpers::device(
        SimulatedDevice::new(),
        cryptoauth::config::IfaceConfig::ecc608_i2c_default(),
        DeviceModel::Sha204a,
        ExecutionStrategy::FixedDelay,
    );

    let mut packet = Packet::new(opcode::SIGN, 0x80, 0x0000, &[]).unwrap();
    assert_eq!(
        dev.execute(&mut packet),
        Err(Error::UnsupportedOpcode {
            opcode: opcode::SIGN,
            model: DeviceModel::Sha204a
        })
    );
    assert!(dev.hal().commands.is_empty());
    assert_eq!(dev.execution_time_ms(), None);
    // idle is still issued
    assert_eq!(dev.hal().idle_count, 1);
}

#[test]
fn built_device_without_divider_waits_slowest_sign_time() {
    common::helpers::init_logger();
    let mut sim = SimulatedDevice::new();
    sim.push_payload(&[0u8; 64]).unwrap();
    let mut dev = DeviceBuilder::new()
        .with_hal(sim)
        .with_delay(RecordingDelay::new())
        .with_model(DeviceModel::Ecc608)
        .with_strategy(ExecutionStrategy::FixedDelay)
        .build()
        .unwrap();
    assert_eq!(dev.clock_divider(), None);

    let mut packet = Packet::new(opcode::SIGN, 0x80, 0x0000, &[]).unwrap();
    dev.execute(&mut packet).unwrap();
    assert_eq!(dev.delay().delays_ms, vec![2, 11995]);
}

#[test]
fn execution_wait_precedes_first_receive() {
    common::helpers::init_logger();
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut sim = SimulatedDevice::new().with_events(events.clone());
    sim.push_payload(&common::fixtures::info_revision()).unwrap();
    let mut dev = DeviceBuilder::new()
        .with_hal(sim)
        .with_delay(SharedDelay::new(events.clone()))
        .with_config(IfaceConfig::ecc608_i2c_default())
        .with_model(DeviceModel::Ecc608)
        .with_strategy(ExecutionStrategy::FixedDelay)
        .build()
        .unwrap();

    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    dev.execute(&mut packet).unwrap();

    let log = events.borrow();
    let command = log
        .iter()
        .position(|e| matches!(e, Event::Command(_)))
        .expect("command sent");
    let after = &log[command + 1..];
    let wait = after
        .iter()
        .position(|e| *e == Event::Delay(115))
        .expect("execution wait");
    let first_receive = after
        .iter()
        .position(|e| *e == Event::Receive)
        .expect("response read");
    assert!(wait < first_receive, "timeline: {:?}", *log);
}
