//! Test support helpers intended for use by unit and integration tests.
//!
//! [`SimulatedDevice`] is a HAL that behaves like a secure element on the
//! bus: it answers wake with the wake token, checks command CRCs and
//! replies with scripted response frames. An [`EventLog`] shared with a
//! [`SharedDelay`] puts bus traffic and delays on one timeline.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::{ExecConfig, ExecutionStrategy, IfaceConfig};
use crate::constants::{SWI_FLAG_IDLE, WAKE_TOKEN, WORD_ADDRESS_IDLE};
use crate::device::Device;
use crate::protocol::{crc16, Frame};
use crate::transport::mock::RecordingDelay;
use crate::transport::{Control, Delay, Hal};
use crate::types::DeviceModel;
use crate::{Error, Result};

/// Status byte answered to a command that arrived corrupted.
const STATUS_COMM_ERROR: u8 = 0xFF;

/// One entry of a shared bus/delay timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Control(Control),
    /// Command image, framing byte included when the bus has one.
    Command(Vec<u8>),
    Receive,
    Delay(u32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Delay that appends to an [`EventLog`] instead of sleeping.
#[derive(Debug, Default, Clone)]
pub struct SharedDelay {
    events: EventLog,
}

impl SharedDelay {
    pub fn new(events: EventLog) -> Self {
        Self { events }
    }
}

impl Delay for SharedDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.events.borrow_mut().push(Event::Delay(ms));
    }
}

/// Simulated secure element.
#[derive(Debug, Default)]
pub struct SimulatedDevice {
    /// Command images as they arrived on the bus.
    pub commands: Vec<Vec<u8>>,
    /// Upcoming sends answered with `NoResponse`.
    pub fail_sends: usize,
    /// Receives answered with `NoResponse` before a command result is
    /// ready.
    pub busy_reads: usize,
    pub idle_count: usize,
    pub wake_count: usize,
    pub selects: usize,
    pub deselects: usize,
    responses: VecDeque<Vec<u8>>,
    outgoing: Vec<u8>,
    result_pending: bool,
    pass_through: bool,
    events: Option<EventLog>,
}

impl SimulatedDevice {
    /// Device on an addressed bus: commands carry a framing byte and wake
    /// answers with the wake token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Device behind a kit or legacy HAL: commands arrive without the
    /// framing byte and wake is silent.
    pub fn pass_through() -> Self {
        Self {
            pass_through: true,
            ..Self::default()
        }
    }

    /// Record bus traffic into `events` as well.
    pub fn with_events(mut self, events: EventLog) -> Self {
        self.events = Some(events);
        self
    }

    fn record(&self, event: Event) {
        if let Some(events) = &self.events {
            events.borrow_mut().push(event);
        }
    }

    /// Queue the response payload for the next command. The frame
    /// (length byte and CRC) is built here.
    pub fn push_payload(&mut self, payload: &[u8]) -> Result<()> {
        self.responses.push_back(Frame::encode(payload)?);
        Ok(())
    }

    /// Queue a raw response, e.g. a frame with a corrupted CRC.
    pub fn push_raw(&mut self, frame: Vec<u8>) {
        self.responses.push_back(frame);
    }

    /// Opcodes of every command received, in order.
    pub fn opcodes(&self) -> Vec<u8> {
        let offset = self.command_offset();
        self.commands
            .iter()
            .filter_map(|c| c.get(offset + 1).copied())
            .collect()
    }

    pub fn select_balanced(&self) -> bool {
        self.selects == self.deselects
    }

    fn command_offset(&self) -> usize {
        if self.pass_through { 0 } else { 1 }
    }

    fn accept_command(&mut self, data: &[u8]) {
        self.record(Event::Command(data.to_vec()));
        self.commands.push(data.to_vec());
        let cmd = &data[self.command_offset()..];
        let intact = match cmd.first() {
            Some(&len) if len as usize == cmd.len() && cmd.len() >= 4 => {
                let body = cmd.len() - 2;
                crc16(&cmd[..body]).to_le_bytes() == [cmd[body], cmd[body + 1]]
            }
            _ => false,
        };

        let reply = if intact {
            self.responses.pop_front().map(Ok)
        } else {
            None
        };
        // Default reply is a success status frame.
        let reply = reply.unwrap_or_else(|| {
            Frame::encode(&[if intact { 0x00 } else { STATUS_COMM_ERROR }])
        });
        self.outgoing = reply.unwrap_or_default();
        self.result_pending = true;
    }
}

impl Hal for SimulatedDevice {
    fn send(&mut self, _address: u8, data: &[u8]) -> Result<()> {
        if self.fail_sends > 0 {
            self.fail_sends -= 1;
            return Err(Error::NoResponse);
        }
        match data {
            [b] if *b == WORD_ADDRESS_IDLE || *b == SWI_FLAG_IDLE => {
                self.idle_count += 1;
                self.outgoing.clear();
            }
            // word address or transmit flag ahead of a read
            [_] => {}
            _ => self.accept_command(data),
        }
        Ok(())
    }

    fn receive(&mut self, _address: u8, buf: &mut [u8]) -> Result<usize> {
        self.record(Event::Receive);
        if self.result_pending && self.busy_reads > 0 {
            self.busy_reads -= 1;
            return Err(Error::NoResponse);
        }
        if self.outgoing.is_empty() {
            return Err(Error::NoResponse);
        }
        let n = buf.len().min(self.outgoing.len());
        buf[..n].copy_from_slice(&self.outgoing[..n]);
        self.outgoing.drain(..n);
        if self.outgoing.is_empty() {
            self.result_pending = false;
        }
        Ok(n)
    }

    fn control(&mut self, op: Control) -> Result<()> {
        self.record(Event::Control(op));
        match op {
            Control::Select => self.selects += 1,
            Control::Deselect => self.deselects += 1,
            Control::Wake => {
                self.wake_count += 1;
                if !self.pass_through {
                    self.outgoing = WAKE_TOKEN.to_vec();
                }
            }
            Control::Idle => self.idle_count += 1,
        }
        Ok(())
    }
}

/// Convenience: a device handle over `sim` that records delays instead of
/// sleeping.
#[doc(hidden)]
pub fn simulated_device(
    sim: SimulatedDevice,
    config: IfaceConfig,
    model: DeviceModel,
    strategy: ExecutionStrategy,
) -> Device<SimulatedDevice, RecordingDelay> {
    let mut device = Device::with_delay(sim, RecordingDelay::new(), config, model);
    device.set_exec_config(ExecConfig {
        strategy,
        ca2_support: true,
    });
    device
}
