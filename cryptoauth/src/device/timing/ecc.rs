//! ATECC108A / ATECC508A execution times (ms)

use super::ExecutionTime;
use crate::constants::opcode::*;

pub const ECC108A: &[ExecutionTime] = &[
    ExecutionTime::new(CHECKMAC, 1113),
    ExecutionTime::new(COUNTER, 1120),
    ExecutionTime::new(DERIVE_KEY, 1150),
    ExecutionTime::new(GENDIG, 1111),
    ExecutionTime::new(GENKEY, 1115),
    ExecutionTime::new(HMAC, 1123),
    ExecutionTime::new(INFO, 112),
    ExecutionTime::new(LOCK, 11132),
    ExecutionTime::new(MAC, 1114),
    ExecutionTime::new(NONCE, 1129),
    ExecutionTime::new(PAUSE, 113),
    ExecutionTime::new(PRIVWRITE, 1148),
    ExecutionTime::new(RANDOM, 1123),
    ExecutionTime::new(READ, 115),
    ExecutionTime::new(SHA, 119),
    ExecutionTime::new(SIGN, 1160),
    ExecutionTime::new(UPDATE_EXTRA, 1110),
    ExecutionTime::new(VERIFY, 1172),
    ExecutionTime::new(WRITE, 1126),
];

pub const ECC508A: &[ExecutionTime] = &[
    ExecutionTime::new(CHECKMAC, 1113),
    ExecutionTime::new(COUNTER, 1120),
    ExecutionTime::new(DERIVE_KEY, 1150),
    ExecutionTime::new(ECDH, 1158),
    ExecutionTime::new(GENDIG, 1111),
    ExecutionTime::new(GENKEY, 11115),
    ExecutionTime::new(HMAC, 1123),
    ExecutionTime::new(INFO, 112),
    ExecutionTime::new(LOCK, 11132),
    ExecutionTime::new(MAC, 1114),
    ExecutionTime::new(NONCE, 1129),
    ExecutionTime::new(PAUSE, 113),
    ExecutionTime::new(PRIVWRITE, 1148),
    ExecutionTime::new(RANDOM, 1123),
    ExecutionTime::new(READ, 115),
    ExecutionTime::new(SHA, 119),
    ExecutionTime::new(SIGN, 1160),
    ExecutionTime::new(UPDATE_EXTRA, 1110),
    ExecutionTime::new(VERIFY, 1172),
    ExecutionTime::new(WRITE, 1126),
];
