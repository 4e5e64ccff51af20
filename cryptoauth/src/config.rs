// cryptoauth/src/config.rs
//! Interface and execution configuration.
//!
//! Everything here is resolved once when a [`Device`](crate::device::Device)
//! is built; the executor only reads it.

use crate::constants;
use crate::types::InterfaceType;

/// Per-interface configuration of one physical device.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfaceConfig {
    pub iface_type: InterfaceType,
    /// Bus address (8-bit I2C form, bus index for SWI). Ignored by kit
    /// interfaces.
    pub address: u8,
    /// Additional send attempts when the device does not answer.
    pub retries: u8,
    pub wake_delay_us: u16,
    /// HAL expects the pass-through calling convention regardless of the
    /// interface class.
    pub legacy_api: bool,
}

impl IfaceConfig {
    pub fn new(iface_type: InterfaceType, address: u8) -> Self {
        Self {
            iface_type,
            address,
            retries: constants::DEFAULT_RETRIES,
            wake_delay_us: constants::DEFAULT_WAKE_DELAY_US,
            legacy_api: false,
        }
    }

    /// Stock ATECCx08A configuration on I2C.
    pub fn ecc608_i2c_default() -> Self {
        Self::new(InterfaceType::I2c, constants::DEFAULT_I2C_ADDRESS)
    }

    pub fn with_retries(mut self, retries: u8) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_wake_delay_us(mut self, wake_delay_us: u16) -> Self {
        self.wake_delay_us = wake_delay_us;
        self
    }

    pub fn with_legacy_api(mut self, legacy_api: bool) -> Self {
        self.legacy_api = legacy_api;
        self
    }

    /// Transport frames packets itself; the adapter sends them at the
    /// pseudo-address without select/deselect.
    pub fn is_pass_through(&self) -> bool {
        self.legacy_api || self.iface_type.is_kit()
    }
}

/// Timing of the polling strategy, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollingConfig {
    pub initial_wait_ms: u32,
    pub interval_ms: u32,
    pub window_ms: u32,
}

impl PollingConfig {
    /// Receive attempts allowed after the first one.
    pub fn poll_budget(&self) -> u32 {
        if self.interval_ms == 0 {
            return 0;
        }
        self.window_ms / self.interval_ms
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            initial_wait_ms: constants::POLLING_INIT_TIME_MS,
            interval_ms: constants::POLLING_FREQUENCY_TIME_MS,
            window_ms: constants::POLLING_MAX_TIME_MS,
        }
    }
}

/// How the executor waits for a command to complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Wait a short initial time, then retry the receive at a fixed
    /// interval until the window is exhausted.
    Polling(PollingConfig),
    /// Wait the tabulated worst-case execution time and receive once.
    FixedDelay,
}

impl Default for ExecutionStrategy {
    fn default() -> Self {
        if cfg!(feature = "no-poll") {
            ExecutionStrategy::FixedDelay
        } else {
            ExecutionStrategy::Polling(PollingConfig::default())
        }
    }
}

/// Executor-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecConfig {
    pub strategy: ExecutionStrategy,
    /// Enable reduced-protocol handling on SWI-GPIO buses.
    pub ca2_support: bool,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            strategy: ExecutionStrategy::default(),
            ca2_support: cfg!(feature = "ca2"),
        }
    }
}
