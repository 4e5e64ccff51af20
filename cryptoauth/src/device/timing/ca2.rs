//! Reduced-protocol family execution times (ms)

use super::ExecutionTime;
use crate::constants::opcode::*;

/// ECC204 and TA010
pub const ECC204: &[ExecutionTime] = &[
    ExecutionTime::new(COUNTER, 1120),
    ExecutionTime::new(DELETE, 11200),
    ExecutionTime::new(GENKEY, 11500),
    ExecutionTime::new(INFO, 1120),
    ExecutionTime::new(LOCK, 11180),
    ExecutionTime::new(NONCE, 1120),
    ExecutionTime::new(READ, 1140),
    ExecutionTime::new(SELFTEST, 11600),
    ExecutionTime::new(SHA, 1180),
    ExecutionTime::new(SIGN, 11500),
    ExecutionTime::new(WRITE, 1180),
];

/// SHA104 and SHA105
pub const SHA10X: &[ExecutionTime] = &[
    ExecutionTime::new(CHECKMAC, 11100),
    ExecutionTime::new(COUNTER, 1120),
    ExecutionTime::new(DELETE, 11200),
    ExecutionTime::new(GENDIG, 1170),
    ExecutionTime::new(INFO, 1120),
    ExecutionTime::new(LOCK, 11180),
    ExecutionTime::new(MAC, 11120),
    ExecutionTime::new(NONCE, 1120),
    ExecutionTime::new(READ, 1140),
    ExecutionTime::new(SELFTEST, 11600),
    ExecutionTime::new(SHA, 1180),
    ExecutionTime::new(WRITE, 1180),
];
