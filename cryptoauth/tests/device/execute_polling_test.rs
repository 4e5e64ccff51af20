#[path = "../common/mod.rs"]
mod common;

use cryptoauth::constants::opcode;
use cryptoauth::protocol::Packet;
use cryptoauth::test_support::SimulatedDevice;
use cryptoauth::{DeviceError, DeviceState, Error};

#[test]
fn result_after_two_busy_polls() {
    let mut sim = SimulatedDevice::new();
    sim.push_payload(&common::fixtures::info_revision()).unwrap();
    sim.busy_reads = 2;
    let mut dev = common::helpers::ecc608(sim, common::helpers::polling());

    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    dev.execute(&mut packet).unwrap();

    assert_eq!(packet.data[0], 7);
    assert_eq!(packet.response(), &common::fixtures::info_revision());
    assert_eq!(dev.state(), DeviceState::Idle);
    // wake delay, initial wait, then one interval per busy poll
    assert_eq!(dev.delay().delays_ms, vec![2, 400, 2, 2]);
    assert_eq!(dev.hal().idle_count, 1);
    assert!(dev.hal().select_balanced());
}

#[test]
fn budget_exhaustion_returns_no_response() {
    let mut sim = SimulatedDevice::new();
    sim.busy_reads = 10_000;
    let mut dev = common::helpers::ecc608(sim, common::helpers::polling());

    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    assert_eq!(dev.execute(&mut packet), Err(Error::NoResponse));

    // wake delay plus 2500 / 2 polling intervals
    let short = dev.delay().delays_ms.iter().filter(|&&d| d == 2).count();
    assert_eq!(short, 1 + 1250);
    assert_eq!(dev.state(), DeviceState::Idle);
    assert_eq!(dev.hal().idle_count, 1);
}

#[test]
fn device_status_error_surfaces_after_idle() {
    let mut sim = SimulatedDevice::new();
    sim.push_raw(common::fixtures::status_frame(0x0F));
    let mut dev = common::helpers::ecc608(sim, common::helpers::polling());

    let mut packet = Packet::new(opcode::GENKEY, 0x04, 0x0000, &[]).unwrap();
    assert_eq!(
        dev.execute(&mut packet),
        Err(Error::Device(DeviceError::ExecutionError))
    );
    assert_eq!(dev.hal().idle_count, 1);
}

#[test]
fn corrupted_response_is_checksum_mismatch() {
    let mut frame = common::fixtures::info_frame();
    frame[6] ^= 0x01;
    let mut sim = SimulatedDevice::new();
    sim.push_raw(frame);
    let mut dev = common::helpers::ecc608(sim, common::helpers::polling());

    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    assert!(matches!(
        dev.execute(&mut packet),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn second_command_skips_wake_until_idle() -> anyhow::Result<()> {
    let mut sim = SimulatedDevice::new();
    sim.push_payload(&common::fixtures::random_bytes())?;
    sim.push_payload(&common::fixtures::random_bytes())?;
    let mut dev = common::helpers::ecc608(sim, common::helpers::polling());

    for _ in 0..2 {
        let mut packet = Packet::new(opcode::RANDOM, 0x00, 0x0000, &[])?;
        dev.execute(&mut packet)?;
        assert_eq!(packet.response(), common::fixtures::random_bytes().as_slice());
    }
    // idle after each command forces a fresh wake
    assert_eq!(dev.hal().wake_count, 2);
    assert_eq!(dev.hal().opcodes(), vec![opcode::RANDOM, opcode::RANDOM]);
    Ok(())
}
