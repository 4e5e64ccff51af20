// cryptoauth/src/protocol/frame.rs

use crate::constants::{CRC_SIZE, RESPONSE_MIN_LEN};
use crate::protocol::checksum::crc16;
use crate::{Error, Result};

/// Response frame helper.
/// Format: [Length(1)] [Payload(n)] [CRC lo] [CRC hi]
/// Length counts the whole frame including itself and the CRC.
pub struct Frame;

impl Frame {
    /// Encode a payload into a response frame. Used by simulated devices.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        let total = 1 + payload.len() + CRC_SIZE;
        if total > u8::MAX as usize {
            return Err(Error::InvalidArgument("frame payload too long"));
        }
        let mut out = Vec::with_capacity(total);
        out.push(total as u8);
        out.extend_from_slice(payload);
        let crc = crc16(&out);
        out.extend_from_slice(&crc.to_le_bytes());
        Ok(out)
    }

    /// Classify a short read: zero bytes is silence, anything else below
    /// the minimum frame is garbage.
    pub fn check_size(received: usize) -> Result<()> {
        if received >= RESPONSE_MIN_LEN {
            return Ok(());
        }
        if received > 0 {
            Err(Error::MalformedResponse { length: received })
        } else {
            Err(Error::NoResponse)
        }
    }

    /// Verify the CRC of the frame at the start of `frame`, using its own
    /// length byte.
    pub fn verify(frame: &[u8]) -> Result<()> {
        let declared = *frame.first().ok_or(Error::NoResponse)? as usize;
        if declared < RESPONSE_MIN_LEN || declared > frame.len() {
            return Err(Error::MalformedResponse { length: declared });
        }
        let body = &frame[..declared - CRC_SIZE];
        let expected = crc16(body);
        let actual = u16::from_le_bytes([frame[declared - 2], frame[declared - 1]]);
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }
        Ok(())
    }

    /// Payload between the length byte and the CRC of a verified frame.
    pub fn payload(frame: &[u8]) -> Result<&[u8]> {
        Frame::verify(frame)?;
        let declared = frame[0] as usize;
        Ok(&frame[1..declared - CRC_SIZE])
    }
}
