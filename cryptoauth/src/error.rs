// cryptoauth/src/error.rs

use thiserror::Error;

use crate::types::DeviceModel;

/// Fault reported by the device itself through the status byte of a
/// 4-byte status frame.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    #[error("checkmac or verify failed")]
    CheckMacVerifyFailed,
    #[error("command parse error")]
    ParseError,
    #[error("ecc fault")]
    EccFault,
    #[error("self test error")]
    SelfTestError,
    #[error("random number health test error")]
    HealthTestError,
    #[error("execution error")]
    ExecutionError,
    #[error("device still reporting wake status")]
    AfterWake,
    #[error("watchdog about to expire")]
    WatchdogAboutToExpire,
    #[error("device received a corrupted command")]
    CommunicationError,
    #[error("unknown status {0:#04x}")]
    Unknown(u8),
}

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("no response from device")]
    NoResponse,

    #[error("buffer too small: response needs {needed} bytes, capacity is {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("malformed response: {length} bytes")]
    MalformedResponse { length: usize },

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("device reported error: {0}")]
    Device(#[from] DeviceError),

    #[error("opcode {opcode:#04x} is not supported by {model}")]
    UnsupportedOpcode { opcode: u8, model: DeviceModel },

    #[error("operation not implemented by transport")]
    Unimplemented,

    #[error("wake failed: unexpected token {0:02x?}")]
    WakeFailed([u8; 4]),
}

impl Error {
    /// The device did not answer at all. This is the only failure the send
    /// path retries.
    pub fn is_no_response(&self) -> bool {
        matches!(self, Error::NoResponse)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
