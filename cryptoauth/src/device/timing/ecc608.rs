//! ATECC608 execution times (ms), one table per chip-mode clock divider

use super::ExecutionTime;
use crate::constants::opcode::*;

pub const ECC608_M0: &[ExecutionTime] = &[
    ExecutionTime::new(AES, 181),
    ExecutionTime::new(CHECKMAC, 1120),
    ExecutionTime::new(COUNTER, 175),
    ExecutionTime::new(DERIVE_KEY, 1150),
    ExecutionTime::new(ECDH, 1225),
    ExecutionTime::new(GENDIG, 175),
    ExecutionTime::new(GENKEY, 1345),
    ExecutionTime::new(INFO, 115),
    ExecutionTime::new(KDF, 1495),
    ExecutionTime::new(LOCK, 11105),
    ExecutionTime::new(MAC, 1165),
    ExecutionTime::new(NONCE, 160),
    ExecutionTime::new(PRIVWRITE, 1150),
    ExecutionTime::new(RANDOM, 169),
    ExecutionTime::new(READ, 115),
    ExecutionTime::new(SECUREBOOT, 1240),
    ExecutionTime::new(SELFTEST, 1750),
    ExecutionTime::new(SHA, 1108),
    ExecutionTime::new(SIGN, 1345),
    ExecutionTime::new(UPDATE_EXTRA, 130),
    ExecutionTime::new(VERIFY, 1310),
    ExecutionTime::new(WRITE, 1135),
];

pub const ECC608_M1: &[ExecutionTime] = &[
    ExecutionTime::new(AES, 181),
    ExecutionTime::new(CHECKMAC, 1120),
    ExecutionTime::new(COUNTER, 175),
    ExecutionTime::new(DERIVE_KEY, 1150),
    ExecutionTime::new(ECDH, 1516),
    ExecutionTime::new(GENDIG, 1105),
    ExecutionTime::new(GENKEY, 1645),
    ExecutionTime::new(INFO, 115),
    ExecutionTime::new(KDF, 1495),
    ExecutionTime::new(LOCK, 11105),
    ExecutionTime::new(MAC, 1165),
    ExecutionTime::new(NONCE, 160),
    ExecutionTime::new(PRIVWRITE, 1150),
    ExecutionTime::new(RANDOM, 169),
    ExecutionTime::new(READ, 115),
    ExecutionTime::new(SECUREBOOT, 1480),
    ExecutionTime::new(SELFTEST, 11875),
    ExecutionTime::new(SHA, 1126),
    ExecutionTime::new(SIGN, 1660),
    ExecutionTime::new(UPDATE_EXTRA, 130),
    ExecutionTime::new(VERIFY, 1885),
    ExecutionTime::new(WRITE, 1135),
];

pub const ECC608_M2: &[ExecutionTime] = &[
    ExecutionTime::new(AES, 181),
    ExecutionTime::new(CHECKMAC, 1120),
    ExecutionTime::new(COUNTER, 175),
    ExecutionTime::new(DERIVE_KEY, 1150),
    ExecutionTime::new(ECDH, 11593),
    ExecutionTime::new(GENDIG, 1105),
    ExecutionTime::new(GENKEY, 11959),
    ExecutionTime::new(INFO, 115),
    ExecutionTime::new(KDF, 1495),
    ExecutionTime::new(LOCK, 11105),
    ExecutionTime::new(MAC, 1165),
    ExecutionTime::new(NONCE, 160),
    ExecutionTime::new(PRIVWRITE, 1150),
    ExecutionTime::new(RANDOM, 169),
    ExecutionTime::new(READ, 115),
    ExecutionTime::new(SECUREBOOT, 11440),
    ExecutionTime::new(SELFTEST, 12324),
    ExecutionTime::new(SHA, 1225),
    ExecutionTime::new(SIGN, 11995),
    ExecutionTime::new(UPDATE_EXTRA, 130),
    ExecutionTime::new(VERIFY, 13255),
    ExecutionTime::new(WRITE, 1135),
];
