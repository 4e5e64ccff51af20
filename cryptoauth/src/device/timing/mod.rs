// cryptoauth/src/device/timing/mod.rs
//! Worst-case command execution times.
//!
//! Values are tabulated per device model from datasheet measurements and
//! must be updated table by table when adding a model. Rows are kept in
//! opcode-name order; lookup is a linear scan and does not depend on it.

mod ca2;
mod ecc;
mod ecc608;
mod sha;

use crate::types::{ClockDivider, DeviceModel};
use crate::{Error, Result};

/// Worst-case execution time of one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionTime {
    pub opcode: u8,
    pub ms: u32,
}

impl ExecutionTime {
    pub const fn new(opcode: u8, ms: u32) -> Self {
        Self { opcode, ms }
    }
}

/// Select the table for a model. The ATECC608 has one table per clock
/// divider; an unset divider gets the slowest (M2) table. Unknown
/// models get an empty table.
pub fn table_for(model: DeviceModel, divider: Option<ClockDivider>) -> &'static [ExecutionTime] {
    match model {
        DeviceModel::Sha204a => sha::SHA204A,
        DeviceModel::Sha206a => sha::SHA206A,
        DeviceModel::Ecc108a => ecc::ECC108A,
        DeviceModel::Ecc508a => ecc::ECC508A,
        DeviceModel::Ecc608 => match divider {
            Some(ClockDivider::M0) => ecc608::ECC608_M0,
            Some(ClockDivider::M1) => ecc608::ECC608_M1,
            Some(ClockDivider::M2) | None => ecc608::ECC608_M2,
        },
        DeviceModel::Ecc204 | DeviceModel::Ta010 => ca2::ECC204,
        DeviceModel::Sha104 | DeviceModel::Sha105 => ca2::SHA10X,
        DeviceModel::Unknown => &[],
    }
}

/// Look up the execution time of `opcode` in milliseconds.
pub fn lookup(opcode: u8, model: DeviceModel, divider: Option<ClockDivider>) -> Result<u32> {
    table_for(model, divider)
        .iter()
        .find(|entry| entry.opcode == opcode)
        .map(|entry| entry.ms)
        .ok_or(Error::UnsupportedOpcode { opcode, model })
}
