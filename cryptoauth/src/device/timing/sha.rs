//! ATSHA204A / ATSHA206A execution times (ms)

use super::ExecutionTime;
use crate::constants::opcode::*;

pub const SHA204A: &[ExecutionTime] = &[
    ExecutionTime::new(CHECKMAC, 1138),
    ExecutionTime::new(DERIVE_KEY, 1162),
    ExecutionTime::new(GENDIG, 1143),
    ExecutionTime::new(HMAC, 1169),
    ExecutionTime::new(INFO, 112),
    ExecutionTime::new(LOCK, 11124),
    ExecutionTime::new(MAC, 1135),
    ExecutionTime::new(NONCE, 1160),
    ExecutionTime::new(PAUSE, 112),
    ExecutionTime::new(RANDOM, 1150),
    ExecutionTime::new(READ, 115),
    ExecutionTime::new(SHA, 1122),
    ExecutionTime::new(UPDATE_EXTRA, 1112),
    ExecutionTime::new(WRITE, 1142),
];

pub const SHA206A: &[ExecutionTime] = &[
    ExecutionTime::new(DERIVE_KEY, 1162),
    ExecutionTime::new(INFO, 112),
    ExecutionTime::new(MAC, 1135),
    ExecutionTime::new(READ, 115),
    ExecutionTime::new(WRITE, 1142),
];
