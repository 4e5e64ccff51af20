use cryptoauth::constants::{opcode, PACKET_DATA_CAPACITY};
use cryptoauth::protocol::{crc16_le, Packet};
use cryptoauth::Error;

#[test]
fn nonce_wire_image() {
    let input = hex::decode("00112233445566778899aabbccddeeff00112233").unwrap();
    let mut packet = Packet::new(opcode::NONCE, 0x00, 0x0000, &input).unwrap();
    packet.reserved = 0x03;

    let wire = packet.wire_bytes().unwrap();
    assert_eq!(wire[0], 0x03);
    assert_eq!(wire[1] as usize, 7 + input.len());
    assert_eq!(wire.len(), 1 + wire[1] as usize);
    assert_eq!(&wire[6..6 + input.len()], input.as_slice());
    let crc_at = wire.len() - 2;
    assert_eq!(&wire[crc_at..], &crc16_le(&wire[1..crc_at]));
}

#[test]
fn largest_payload_fits() {
    let payload = vec![0x5A; PACKET_DATA_CAPACITY - 2];
    let packet = Packet::new(opcode::WRITE, 0x00, 0x0000, &payload).unwrap();
    assert_eq!(packet.wire_bytes().unwrap().len(), 1 + packet.txsize as usize);
}

#[test]
fn txsize_below_minimum_rejected() {
    let mut packet = Packet::new(opcode::INFO, 0x00, 0x0000, &[]).unwrap();
    packet.txsize = 6;
    assert!(matches!(packet.wire_bytes(), Err(Error::InvalidArgument(_))));
}

#[test]
fn param2_is_little_endian() {
    let packet = Packet::new(opcode::READ, 0x02, 0x0102, &[]).unwrap();
    let wire = packet.wire_bytes().unwrap();
    assert_eq!(&wire[4..6], &[0x02, 0x01]);
}
