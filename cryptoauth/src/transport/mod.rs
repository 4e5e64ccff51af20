// cryptoauth/src/transport/mod.rs

pub mod adapter;
pub mod mock;
pub mod traits;

pub use adapter::TransportAdapter;
pub use mock::{HalCall, MockHal, RecordingDelay};
pub use traits::{tolerate_unimplemented, Control, Delay, Hal};
