// cryptoauth/src/device/executor.rs
//! Command execution: wake, send with retry, wait or poll, receive,
//! validate, idle.

use log::{debug, trace, warn};

use crate::config::ExecutionStrategy;
use crate::constants::{SWI_FLAG_CMD, WORD_ADDRESS_COMMAND};
use crate::device::Device;
use crate::protocol::{status, Frame, Packet};
use crate::transport::{Delay, Hal};
use crate::types::{DeviceState, InterfaceType};
use crate::Result;

/// Wait/poll parameters for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Blocking wait before the first receive attempt.
    pub initial_wait_ms: u32,
    /// Receive attempts allowed after the first one.
    pub poll_budget: u32,
    pub poll_interval_ms: u32,
}

impl Timing {
    fn fixed(wait_ms: u32) -> Self {
        Self {
            initial_wait_ms: wait_ms,
            poll_budget: 0,
            poll_interval_ms: 0,
        }
    }
}

impl<H: Hal, D: Delay> Device<H, D> {
    /// Execute `packet` on the device.
    ///
    /// On success `packet.data` holds the response frame; see
    /// [`Packet::response`]. The device is driven to idle afterwards on
    /// every path, except for reduced-protocol models which have no idle
    /// state.
    pub fn execute(&mut self, packet: &mut Packet) -> Result<()> {
        let result = self.run(packet);

        if !self.model.is_ca2() {
            if let Err(e) = self.adapter().idle() {
                warn!("idle after {:#04x} failed: {}", packet.opcode, e);
            }
            self.state = DeviceState::Idle;
        }

        match &result {
            Ok(()) => debug!("{:#04x} on {} succeeded", packet.opcode, self.model),
            Err(e) => debug!("{:#04x} on {} failed: {}", packet.opcode, self.model, e),
        }
        result
    }

    /// Decide how long to wait before receiving and whether to poll.
    pub fn timing_for(&mut self, opcode: u8) -> Result<Timing> {
        let strategy = self.exec.strategy;
        match strategy {
            ExecutionStrategy::FixedDelay => Ok(Timing::fixed(self.execution_time(opcode)?)),
            // Reduced-protocol devices on a GPIO single-wire bus cannot be
            // polled for status; wait the worst case instead.
            ExecutionStrategy::Polling(_) if self.lacks_status_polling() => {
                Ok(Timing::fixed(self.execution_time(opcode)?))
            }
            ExecutionStrategy::Polling(polling) => Ok(Timing {
                initial_wait_ms: polling.initial_wait_ms,
                poll_budget: polling.poll_budget(),
                poll_interval_ms: polling.interval_ms,
            }),
        }
    }

    fn lacks_status_polling(&self) -> bool {
        self.exec.ca2_support
            && self.config.iface_type == InterfaceType::SwiGpio
            && self.model.is_ca2()
    }

    /// Framing byte written into `packet.reserved` before sending.
    fn framing_byte(&self) -> Option<u8> {
        match self.config.iface_type {
            InterfaceType::I2c | InterfaceType::Custom => Some(WORD_ADDRESS_COMMAND),
            InterfaceType::Swi => Some(SWI_FLAG_CMD),
            InterfaceType::SwiGpio if self.exec.ca2_support && self.model.is_ca2() => {
                Some(WORD_ADDRESS_COMMAND)
            }
            _ => None,
        }
    }

    fn run(&mut self, packet: &mut Packet) -> Result<()> {
        let timing = self.timing_for(packet.opcode)?;
        debug!(
            "{:#04x} on {}: wait {} ms, poll budget {}",
            packet.opcode, self.model, timing.initial_wait_ms, timing.poll_budget
        );

        self.send_with_retry(packet)?;

        // the device cannot produce a result any earlier
        self.delay.delay_ms(timing.initial_wait_ms);

        let received = self.receive_with_polling(packet, &timing)?;

        Frame::check_size(received)?;
        let frame = &packet.data[..received];
        Frame::verify(frame)?;
        status::check_response(frame)
    }

    fn send_with_retry(&mut self, packet: &mut Packet) -> Result<()> {
        let address = self.config.address;
        let mut retries = self.config.retries;

        if let Some(byte) = self.framing_byte() {
            packet.reserved = byte;
        }
        let wire = packet.wire_bytes()?;

        loop {
            if self.state != DeviceState::Active {
                if let Err(e) = self.wake() {
                    warn!("wake failed: {}", e);
                }
            }

            let result = self.adapter().send(address, &wire);
            match result {
                Err(e) if e.is_no_response() => {
                    self.state = DeviceState::Unknown;
                    if retries == 0 {
                        return Err(e);
                    }
                    retries -= 1;
                    debug!("no response to send, {} retries left", retries);
                }
                other => {
                    self.state = DeviceState::Active;
                    return other;
                }
            }
        }
    }

    fn receive_with_polling(&mut self, packet: &mut Packet, timing: &Timing) -> Result<usize> {
        let address = self.config.address;
        let mut budget = timing.poll_budget;

        loop {
            packet.data.fill(0);
            let result = self.adapter().receive(address, &mut packet.data);
            match result {
                Ok(n) => return Ok(n.min(packet.data.len())),
                Err(e) if budget > 0 => {
                    trace!("receive not ready ({}), {} polls left", e, budget);
                    budget -= 1;
                    self.delay.delay_ms(timing.poll_interval_ms);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
