// cryptoauth/src/protocol/checksum.rs

const POLYNOMIAL: u16 = 0x8005;

/// Compute the CryptoAuthentication CRC-16 over `data`.
/// Bits are fed LSB first into a non-reflected register with polynomial
/// 0x8005 and zero initial value.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        for bit in 0..8 {
            let data_bit = (byte >> bit) & 0x01;
            let crc_bit = (crc >> 15) as u8;
            crc <<= 1;
            if data_bit != crc_bit {
                crc ^= POLYNOMIAL;
            }
        }
    }
    crc
}

/// CRC in wire order (low byte first).
pub fn crc16_le(data: &[u8]) -> [u8; 2] {
    crc16(data).to_le_bytes()
}
