// cryptoauth/src/device/mod.rs

pub mod builder;
pub mod executor;
pub mod handle;
pub mod timing;

pub use builder::DeviceBuilder;
pub use executor::Timing;
pub use handle::Device;
