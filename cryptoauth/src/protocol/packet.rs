// cryptoauth/src/protocol/packet.rs

use crate::constants::{CMD_SIZE_MIN, CRC_SIZE, PACKET_DATA_CAPACITY};
use crate::protocol::checksum::crc16_le;
use crate::{Error, Result};

/// A single command/response exchange buffer.
///
/// Wire image when sending:
/// `[reserved][count][opcode][param1][param2 lo][param2 hi][data..][crc lo][crc hi]`
/// where `count` (`txsize`) covers everything from itself to the CRC.
/// After a successful execute, `data` holds the response frame
/// `[length][payload..][crc lo][crc hi]`.
#[derive(Clone)]
pub struct Packet {
    /// Transport framing byte (word address or SWI flag), set by the executor.
    pub reserved: u8,
    pub txsize: u8,
    pub opcode: u8,
    pub param1: u8,
    pub param2: u16,
    pub data: [u8; PACKET_DATA_CAPACITY],
}

impl Packet {
    /// Build a command packet with its count byte and trailing CRC.
    pub fn new(opcode: u8, param1: u8, param2: u16, payload: &[u8]) -> Result<Self> {
        if payload.len() + CRC_SIZE > PACKET_DATA_CAPACITY {
            return Err(Error::InvalidArgument("payload exceeds packet capacity"));
        }
        let mut packet = Self {
            reserved: 0,
            txsize: (CMD_SIZE_MIN + payload.len()) as u8,
            opcode,
            param1,
            param2,
            data: [0u8; PACKET_DATA_CAPACITY],
        };
        packet.data[..payload.len()].copy_from_slice(payload);
        let crc = crc16_le(&packet.header_and_payload());
        packet.data[payload.len()..payload.len() + CRC_SIZE].copy_from_slice(&crc);
        Ok(packet)
    }

    fn payload_len(&self) -> usize {
        (self.txsize as usize).saturating_sub(CMD_SIZE_MIN)
    }

    fn header_and_payload(&self) -> Vec<u8> {
        let n = self.payload_len().min(PACKET_DATA_CAPACITY);
        let mut out = Vec::with_capacity(5 + n);
        out.push(self.txsize);
        out.push(self.opcode);
        out.push(self.param1);
        out.extend_from_slice(&self.param2.to_le_bytes());
        out.extend_from_slice(&self.data[..n]);
        out
    }

    /// Contiguous bytes sent on the bus: reserved byte followed by `txsize`
    /// bytes of command.
    pub fn wire_bytes(&self) -> Result<Vec<u8>> {
        let txsize = self.txsize as usize;
        if txsize < CMD_SIZE_MIN {
            return Err(Error::InvalidArgument("txsize below minimum command size"));
        }
        let tail = txsize - 5;
        if tail > PACKET_DATA_CAPACITY {
            return Err(Error::InvalidArgument("txsize exceeds packet capacity"));
        }
        let mut out = Vec::with_capacity(txsize + 1);
        out.push(self.reserved);
        out.push(self.txsize);
        out.push(self.opcode);
        out.push(self.param1);
        out.extend_from_slice(&self.param2.to_le_bytes());
        out.extend_from_slice(&self.data[..tail]);
        Ok(out)
    }

    /// Response payload between the length byte and the CRC. Only
    /// meaningful after a successful execute.
    pub fn response(&self) -> &[u8] {
        let len = self.data[0] as usize;
        if len < CRC_SIZE + 1 || len > PACKET_DATA_CAPACITY {
            return &[];
        }
        &self.data[1..len - CRC_SIZE]
    }
}

impl std::fmt::Debug for Packet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = (self.txsize as usize).saturating_sub(5).min(PACKET_DATA_CAPACITY);
        f.debug_struct("Packet")
            .field("reserved", &self.reserved)
            .field("txsize", &self.txsize)
            .field("opcode", &self.opcode)
            .field("param1", &self.param1)
            .field("param2", &self.param2)
            .field("data", &crate::utils::bytes_to_hex(&self.data[..n]))
            .finish()
    }
}
