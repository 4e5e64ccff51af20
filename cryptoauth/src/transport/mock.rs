// cryptoauth/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::{Control, Delay, Hal};
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// One recorded HAL interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HalCall {
    Send { address: u8, data: Vec<u8> },
    Receive { address: u8, len: usize },
    Control(Control),
}

/// Mock HAL for unit tests. It records every call and answers receives
/// from a queued byte stream.
///
/// Each queued chunk is consumed progressively: a receive copies as many
/// bytes as fit and leaves the remainder for the next receive, so a frame
/// pushed whole can be read as length byte followed by the rest.
#[derive(Debug)]
pub struct MockHal {
    pub calls: Vec<HalCall>,
    rx: VecDeque<Result<Vec<u8>>>,
    send_results: VecDeque<Result<()>>,
    pub select_result: Result<()>,
    pub deselect_result: Result<()>,
    pub wake_result: Result<()>,
    pub idle_result: Result<()>,
}

impl Default for MockHal {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHal {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            rx: VecDeque::new(),
            send_results: VecDeque::new(),
            select_result: Ok(()),
            deselect_result: Ok(()),
            wake_result: Ok(()),
            idle_result: Ok(()),
        }
    }

    /// Queue bytes to be returned by subsequent receives.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.rx.push_back(Ok(bytes.to_vec()));
    }

    /// Queue a failing receive.
    pub fn push_receive_error(&mut self, err: Error) {
        self.rx.push_back(Err(err));
    }

    /// Script the result of the next send. Unscripted sends succeed.
    pub fn push_send_result(&mut self, result: Result<()>) {
        self.send_results.push_back(result);
    }

    pub fn sends(&self) -> Vec<&HalCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, HalCall::Send { .. }))
            .collect()
    }

    pub fn count_control(&self, op: Control) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == HalCall::Control(op))
            .count()
    }

    pub fn pending_rx(&self) -> usize {
        self.rx.len()
    }
}

impl Hal for MockHal {
    fn send(&mut self, address: u8, data: &[u8]) -> Result<()> {
        log::trace!("mock send @{:#04x}: {}", address, bytes_to_hex(data));
        self.calls.push(HalCall::Send {
            address,
            data: data.to_vec(),
        });
        self.send_results.pop_front().unwrap_or(Ok(()))
    }

    fn receive(&mut self, address: u8, buf: &mut [u8]) -> Result<usize> {
        self.calls.push(HalCall::Receive {
            address,
            len: buf.len(),
        });
        if matches!(self.rx.front(), Some(Err(_))) {
            return match self.rx.pop_front() {
                Some(Err(e)) => Err(e),
                _ => Err(Error::NoResponse),
            };
        }
        let Some(Ok(bytes)) = self.rx.front_mut() else {
            return Err(Error::NoResponse);
        };
        let n = buf.len().min(bytes.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        bytes.drain(..n);
        let exhausted = bytes.is_empty();
        if exhausted {
            self.rx.pop_front();
        }
        Ok(n)
    }

    fn control(&mut self, op: Control) -> Result<()> {
        self.calls.push(HalCall::Control(op));
        match op {
            Control::Select => self.select_result.clone(),
            Control::Deselect => self.deselect_result.clone(),
            Control::Wake => self.wake_result.clone(),
            Control::Idle => self.idle_result.clone(),
        }
    }
}

/// Delay that records requested durations instead of sleeping.
#[derive(Debug, Default, Clone)]
pub struct RecordingDelay {
    pub delays_ms: Vec<u32>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.delays_ms.iter().map(|&d| d as u64).sum()
    }
}

impl Delay for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
