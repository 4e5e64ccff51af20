// Shared helpers for integration tests. Each test crate pulls in only what
// it needs.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
