// cryptoauth/src/protocol/mod.rs

pub mod checksum;
pub mod frame;
pub mod packet;
pub mod status;

pub use checksum::{crc16, crc16_le};
pub use frame::Frame;
pub use packet::Packet;
