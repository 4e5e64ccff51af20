// cryptoauth/src/device/builder.rs

use crate::config::{ExecConfig, ExecutionStrategy, IfaceConfig};
use crate::device::handle::Device;
use crate::transport::{Delay, Hal};
use crate::types::{ClockDivider, DeviceModel};
use crate::utils::StdDelay;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<H, D = StdDelay> {
    hal: Option<H>,
    delay: D,
    config: IfaceConfig,
    model: DeviceModel,
    clock_divider: Option<ClockDivider>,
    exec: ExecConfig,
}

impl<H: Hal> DeviceBuilder<H, StdDelay> {
    pub fn new() -> Self {
        Self {
            hal: None,
            delay: StdDelay,
            config: IfaceConfig::ecc608_i2c_default(),
            model: DeviceModel::default(),
            clock_divider: None,
            exec: ExecConfig::default(),
        }
    }
}

impl<H: Hal> Default for DeviceBuilder<H, StdDelay> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hal, D: Delay> DeviceBuilder<H, D> {
    /// Provide the HAL the device talks through.
    pub fn with_hal(mut self, hal: H) -> Self {
        self.hal = Some(hal);
        self
    }

    /// Replace the delay provider (e.g. a recording delay in tests).
    pub fn with_delay<D2: Delay>(self, delay: D2) -> DeviceBuilder<H, D2> {
        DeviceBuilder {
            hal: self.hal,
            delay,
            config: self.config,
            model: self.model,
            clock_divider: self.clock_divider,
            exec: self.exec,
        }
    }

    pub fn with_config(mut self, config: IfaceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_model(mut self, model: DeviceModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_clock_divider(mut self, divider: Option<ClockDivider>) -> Self {
        self.clock_divider = divider;
        self
    }

    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.exec.strategy = strategy;
        self
    }

    pub fn with_exec_config(mut self, exec: ExecConfig) -> Self {
        self.exec = exec;
        self
    }

    /// Consume the builder and return a device in the `Unknown` state.
    /// Requires a HAL to be provided.
    pub fn build(self) -> Result<Device<H, D>> {
        let hal = self
            .hal
            .ok_or(Error::InvalidArgument("transport HAL not provided"))?;
        let mut device = Device::with_delay(hal, self.delay, self.config, self.model);
        device.set_clock_divider(self.clock_divider);
        device.set_exec_config(self.exec);
        Ok(device)
    }
}
