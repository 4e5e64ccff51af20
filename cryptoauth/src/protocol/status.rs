// cryptoauth/src/protocol/status.rs

use crate::constants::RESPONSE_MIN_LEN;
use crate::error::DeviceError;
use crate::Result;

/// Map a status byte to the device fault it reports. `0x00` is success.
pub fn device_error(status: u8) -> Option<DeviceError> {
    let err = match status {
        0x00 => return None,
        0x01 => DeviceError::CheckMacVerifyFailed,
        0x03 => DeviceError::ParseError,
        0x05 => DeviceError::EccFault,
        0x07 => DeviceError::SelfTestError,
        0x08 => DeviceError::HealthTestError,
        0x0F => DeviceError::ExecutionError,
        0x11 => DeviceError::AfterWake,
        0xEE => DeviceError::WatchdogAboutToExpire,
        0xFF => DeviceError::CommunicationError,
        other => DeviceError::Unknown(other),
    };
    Some(err)
}

/// Only a 4-byte frame carries a status byte; longer frames are data.
pub fn check_response(frame: &[u8]) -> Result<()> {
    if frame.first().copied() != Some(RESPONSE_MIN_LEN as u8) {
        return Ok(());
    }
    match frame.get(1).copied().and_then(device_error) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
