//! Small helpers shared across the crate: hex formatting for traces and
//! the default blocking delay.

pub mod delay;
pub mod hex;

pub use delay::*;
pub use hex::*;
