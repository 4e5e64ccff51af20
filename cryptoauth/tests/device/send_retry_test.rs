#[path = "../common/mod.rs"]
mod common;

use cryptoauth::config::IfaceConfig;
use cryptoauth::constants::opcode;
use cryptoauth::protocol::Packet;
use cryptoauth::test_support::SimulatedDevice;
use cryptoauth::{DeviceModel, DeviceState, Error, InterfaceType};

fn ecc204(sim: SimulatedDevice, retries: u8) -> cryptoauth::Device<SimulatedDevice, cryptoauth::transport::RecordingDelay> {
    common::helpers::device(
        sim,
        IfaceConfig::new(InterfaceType::I2c, 0x66).with_retries(retries),
        DeviceModel::Ecc204,
        common::helpers::polling(),
    )
}

#[test]
fn succeeds_on_third_attempt() {
    let mut sim = SimulatedDevice::new();
    sim.fail_sends = 2;
    let mut dev = ecc204(sim, 2);

    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    dev.execute(&mut packet).unwrap();

    // one wake per attempt, the command lands once
    assert_eq!(dev.hal().wake_count, 3);
    assert_eq!(dev.hal().commands.len(), 1);
    assert_eq!(dev.hal().fail_sends, 0);
    // reduced-protocol devices are never idled
    assert_eq!(dev.state(), DeviceState::Active);
    assert_eq!(dev.hal().idle_count, 0);
}

#[test]
fn gives_up_after_retries() {
    let mut sim = SimulatedDevice::new();
    sim.fail_sends = 5;
    let mut dev = ecc204(sim, 2);

    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    assert_eq!(dev.execute(&mut packet), Err(Error::NoResponse));

    assert_eq!(dev.hal().wake_count, 3);
    assert_eq!(dev.hal().fail_sends, 2);
    assert!(dev.hal().commands.is_empty());
    assert_eq!(dev.state(), DeviceState::Unknown);
}

#[test]
fn zero_retries_sends_once() {
    let mut sim = SimulatedDevice::new();
    sim.fail_sends = 1;
    let mut dev = ecc204(sim, 0);

    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    assert_eq!(dev.execute(&mut packet), Err(Error::NoResponse));
    assert_eq!(dev.hal().wake_count, 1);
}
