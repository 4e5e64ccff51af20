// cryptoauth/src/prelude.rs

pub use crate::config::{ExecConfig, ExecutionStrategy, IfaceConfig, PollingConfig};
pub use crate::device::{Device, DeviceBuilder, Timing};
pub use crate::protocol::{Frame, Packet};
pub use crate::transport::{Control, Delay, Hal};
pub use crate::{
    ClockDivider, DeviceError, DeviceModel, DeviceState, Error, InterfaceType, Result,
};

pub use crate::utils::{bytes_to_hex, StdDelay};
