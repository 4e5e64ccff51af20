// fixtures.rs: commonly used frames and payloads

use cryptoauth::protocol::Frame;

/// Revision bytes an ATECC608 answers to `INFO` mode 0.
pub fn info_revision() -> [u8; 4] {
    [0x00, 0x00, 0x60, 0x02]
}

/// `INFO` response frame: 7 bytes including length and CRC.
pub fn info_frame() -> Vec<u8> {
    Frame::encode(&info_revision()).unwrap()
}

/// 4-byte status frame carrying `status`.
pub fn status_frame(status: u8) -> Vec<u8> {
    Frame::encode(&[status]).unwrap()
}

pub fn random_bytes() -> Vec<u8> {
    (0u8..32).map(|i| i.wrapping_mul(37)).collect()
}
