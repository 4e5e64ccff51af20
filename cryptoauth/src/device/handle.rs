// cryptoauth/src/device/handle.rs

use log::debug;

use crate::config::{ExecConfig, IfaceConfig};
use crate::device::timing;
use crate::transport::{Delay, Hal, TransportAdapter};
use crate::types::{ClockDivider, DeviceModel, DeviceState};
use crate::utils::StdDelay;
use crate::Result;

/// Handle to one physical secure element.
///
/// The handle owns its HAL and delay; exclusive access (`&mut self`) is what
/// serializes commands. Share a handle across threads only behind a lock.
pub struct Device<H: Hal, D: Delay = StdDelay> {
    pub(crate) hal: H,
    pub(crate) delay: D,
    pub(crate) config: IfaceConfig,
    pub(crate) model: DeviceModel,
    pub(crate) clock_divider: Option<ClockDivider>,
    pub(crate) exec: ExecConfig,
    pub(crate) state: DeviceState,
    pub(crate) execution_time_ms: Option<u32>,
}

impl<H: Hal> Device<H, StdDelay> {
    /// Create a handle that sleeps the calling thread for delays.
    pub fn new(hal: H, config: IfaceConfig, model: DeviceModel) -> Self {
        Self::with_delay(hal, StdDelay, config, model)
    }
}

impl<H: Hal, D: Delay> Device<H, D> {
    pub fn with_delay(hal: H, delay: D, config: IfaceConfig, model: DeviceModel) -> Self {
        Self {
            hal,
            delay,
            config,
            model,
            // unknown until the caller reads the chip mode
            clock_divider: None,
            exec: ExecConfig::default(),
            state: DeviceState::Unknown,
            execution_time_ms: None,
        }
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn model(&self) -> DeviceModel {
        self.model
    }

    pub fn config(&self) -> &IfaceConfig {
        &self.config
    }

    pub fn exec_config(&self) -> &ExecConfig {
        &self.exec
    }

    pub fn set_exec_config(&mut self, exec: ExecConfig) {
        self.exec = exec;
    }

    pub fn clock_divider(&self) -> Option<ClockDivider> {
        self.clock_divider
    }

    /// `None` marks the divider as unknown; timing then assumes the
    /// slowest variant.
    pub fn set_clock_divider(&mut self, divider: Option<ClockDivider>) {
        self.clock_divider = divider;
    }

    /// Execution time of the most recently looked-up opcode.
    pub fn execution_time_ms(&self) -> Option<u32> {
        self.execution_time_ms
    }

    pub fn hal(&self) -> &H {
        &self.hal
    }

    pub fn hal_mut(&mut self) -> &mut H {
        &mut self.hal
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn into_parts(self) -> (H, D) {
        (self.hal, self.delay)
    }

    pub(crate) fn adapter(&mut self) -> TransportAdapter<'_, H> {
        TransportAdapter::new(&mut self.hal, &self.config, self.model)
    }

    /// Look up and cache the execution time of `opcode` for this device.
    pub fn execution_time(&mut self, opcode: u8) -> Result<u32> {
        let result = timing::lookup(opcode, self.model, self.clock_divider);
        self.execution_time_ms = result.as_ref().ok().copied();
        result
    }

    /// Run the wake sequence; the device is `Active` on success.
    pub fn wake(&mut self) -> Result<()> {
        TransportAdapter::new(&mut self.hal, &self.config, self.model).wake(&mut self.delay)?;
        debug!("{} awake", self.model);
        self.state = DeviceState::Active;
        Ok(())
    }

    /// Send the idle command; the device is `Idle` on success.
    pub fn idle(&mut self) -> Result<()> {
        self.adapter().idle()?;
        self.state = DeviceState::Idle;
        Ok(())
    }
}
