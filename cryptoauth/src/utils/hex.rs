//! Hex formatting for log output and `Debug` impls.

use std::fmt::Write;

/// Lowercase hex without separators: `&[0x04, 0x11]` -> `"0411"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex with one space per byte: `&[0x04, 0x11]` -> `"04 11"`.
/// Received frames are traced this way.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
