// cryptoauth/src/lib.rs

//! cryptoauth
//!
//! Command execution engine for CryptoAuthentication secure elements:
//! per-model execution times, a bus-agnostic transport adapter and the
//! wake/send/poll/receive/idle executor.

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the model/interface enums are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
