// cryptoauth/src/constants.rs
//! Common protocol constants used across the crate

/// Command opcodes understood by the CryptoAuthentication device families.
pub mod opcode {
    pub const CHECKMAC: u8 = 0x28;
    pub const DERIVE_KEY: u8 = 0x1C;
    pub const INFO: u8 = 0x30;
    pub const GENDIG: u8 = 0x15;
    pub const GENKEY: u8 = 0x40;
    pub const HMAC: u8 = 0x11;
    pub const LOCK: u8 = 0x17;
    pub const MAC: u8 = 0x08;
    pub const NONCE: u8 = 0x16;
    pub const PAUSE: u8 = 0x01;
    pub const PRIVWRITE: u8 = 0x46;
    pub const RANDOM: u8 = 0x1B;
    pub const READ: u8 = 0x02;
    pub const SIGN: u8 = 0x41;
    pub const UPDATE_EXTRA: u8 = 0x20;
    pub const VERIFY: u8 = 0x45;
    pub const WRITE: u8 = 0x12;
    pub const ECDH: u8 = 0x43;
    pub const COUNTER: u8 = 0x24;
    pub const DELETE: u8 = 0x13;
    pub const SHA: u8 = 0x47;
    pub const AES: u8 = 0x51;
    pub const KDF: u8 = 0x56;
    pub const SECUREBOOT: u8 = 0x80;
    pub const SELFTEST: u8 = 0x77;
}

/// I2C word address preceding a command packet
pub const WORD_ADDRESS_COMMAND: u8 = 0x03;
/// I2C word address putting the device into idle
pub const WORD_ADDRESS_IDLE: u8 = 0x02;
/// I2C word address preceding a read (unused on the bus, sent as 0)
pub const WORD_ADDRESS_READ: u8 = 0x00;

/// Single-wire flag preceding a command packet
pub const SWI_FLAG_CMD: u8 = 0x77;
/// Single-wire flag requesting the device to transmit
pub const SWI_FLAG_TX: u8 = 0x88;
/// Single-wire flag putting the device into idle
pub const SWI_FLAG_IDLE: u8 = 0xBB;

/// Pseudo-address used by pass-through (kit-style) transports
pub const KIT_PSEUDO_ADDRESS: u8 = 0xFF;

/// Minimal valid response frame: length + one byte + 2-byte CRC
pub const RESPONSE_MIN_LEN: usize = 4;
/// Size of the trailing CRC
pub const CRC_SIZE: usize = 2;
/// Count + opcode + param1 + param2(2) + CRC(2)
pub const CMD_SIZE_MIN: usize = 7;
/// Capacity of a packet's data region
pub const PACKET_DATA_CAPACITY: usize = 192;

/// Response to a successful wake sequence: length 4, status 0x11, CRC
pub const WAKE_TOKEN: [u8; 4] = [0x04, 0x11, 0x33, 0x43];

/// Initial wait before the first receive attempt in polling mode (ms)
pub const POLLING_INIT_TIME_MS: u32 = 400;
/// Delay between two receive attempts in polling mode (ms)
pub const POLLING_FREQUENCY_TIME_MS: u32 = 2;
/// Total polling window (ms)
pub const POLLING_MAX_TIME_MS: u32 = 2500;

/// Default number of send retries when the device does not answer
pub const DEFAULT_RETRIES: u8 = 20;
/// Default wake delay (µs)
pub const DEFAULT_WAKE_DELAY_US: u16 = 1500;
/// Default 8-bit I2C address of an ATECCx08A
pub const DEFAULT_I2C_ADDRESS: u8 = 0xC0;
