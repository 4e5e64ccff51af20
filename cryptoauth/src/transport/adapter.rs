// cryptoauth/src/transport/adapter.rs
//! Byte-level send/receive on top of a [`Hal`].
//!
//! Bus-addressed interfaces bracket every transaction with select and
//! deselect; pass-through (kit or legacy) HALs get the packet without its
//! framing byte and do the bus work themselves.

use std::ops::{Deref, DerefMut};

use log::{trace, warn};

use crate::config::IfaceConfig;
use crate::constants::{
    KIT_PSEUDO_ADDRESS, RESPONSE_MIN_LEN, SWI_FLAG_IDLE, SWI_FLAG_TX, WAKE_TOKEN,
    WORD_ADDRESS_IDLE, WORD_ADDRESS_READ,
};
use crate::error::DeviceError;
use crate::protocol::Frame;
use crate::transport::traits::{Control, Delay, Hal, tolerate_unimplemented};
use crate::types::{DeviceModel, InterfaceType};
use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Device selected on the bus for the lifetime of the guard. Deselect is
/// issued on drop, including when select itself failed.
struct Selected<'a, H: Hal> {
    hal: &'a mut H,
}

impl<'a, H: Hal> Selected<'a, H> {
    fn acquire(hal: &'a mut H) -> Result<Self> {
        let guard = Self { hal };
        tolerate_unimplemented(guard.hal.control(Control::Select))?;
        Ok(guard)
    }
}

impl<H: Hal> Drop for Selected<'_, H> {
    fn drop(&mut self) {
        if let Err(e) = tolerate_unimplemented(self.hal.control(Control::Deselect)) {
            warn!("deselect failed: {}", e);
        }
    }
}

impl<H: Hal> Deref for Selected<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.hal
    }
}

impl<H: Hal> DerefMut for Selected<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.hal
    }
}

/// Transport adapter for one device.
pub struct TransportAdapter<'a, H: Hal> {
    hal: &'a mut H,
    config: &'a IfaceConfig,
    model: DeviceModel,
}

impl<'a, H: Hal> TransportAdapter<'a, H> {
    pub fn new(hal: &'a mut H, config: &'a IfaceConfig, model: DeviceModel) -> Self {
        Self { hal, config, model }
    }

    /// Send a framed packet. `bytes[0]` is the transport framing byte.
    pub fn send(&mut self, address: u8, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Err(Error::InvalidArgument("empty send buffer"));
        }
        trace!("send @{:#04x}: {}", address, bytes_to_hex(bytes));

        if self.config.is_pass_through() {
            return self.hal.send(KIT_PSEUDO_ADDRESS, &bytes[1..]);
        }

        let mut bus = Selected::acquire(&mut *self.hal)?;
        bus.send(address, bytes)
    }

    /// Receive one response frame into `buf`, laid out as
    /// `[length][payload..][crc lo][crc hi]`. Returns the bytes filled.
    pub fn receive(&mut self, address: u8, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Err(Error::InvalidArgument("empty receive buffer"));
        }

        if self.config.is_pass_through() {
            let n = self.hal.receive(WORD_ADDRESS_READ, buf)?;
            return Ok(n.min(buf.len()));
        }

        let iface_type = self.config.iface_type;
        let ca2 = self.model.is_ca2();
        let mut bus = Selected::acquire(&mut *self.hal)?;

        // Reduced-protocol devices have no transaction-direction byte.
        if !ca2 {
            let word_address = match iface_type {
                InterfaceType::Swi => SWI_FLAG_TX,
                _ => WORD_ADDRESS_READ,
            };
            bus.send(address, &[word_address])?;
        }

        let mut length = [0u8; 1];
        if bus.receive(address, &mut length)? == 0 {
            return Err(Error::NoResponse);
        }

        let declared = length[0] as usize;
        if declared > buf.len() {
            return Err(Error::BufferTooSmall {
                needed: declared,
                capacity: buf.len(),
            });
        }
        if declared < RESPONSE_MIN_LEN {
            return Err(Error::MalformedResponse { length: declared });
        }

        buf[0] = length[0];
        let rest = bus.receive(address, &mut buf[1..declared])?.min(declared - 1);
        trace!("receive @{:#04x}: {}", address, bytes_to_hex_spaced(&buf[..rest + 1]));
        Ok(rest + 1)
    }

    /// Wake the device and, where the protocol has one, check the wake
    /// token it answers with.
    pub fn wake<D: Delay>(&mut self, delay: &mut D) -> Result<()> {
        tolerate_unimplemented(self.hal.control(Control::Wake))?;
        delay.delay_us(self.config.wake_delay_us as u32);

        if self.config.is_pass_through() || self.model.is_ca2() {
            return Ok(());
        }

        let mut token = [0u8; RESPONSE_MIN_LEN];
        let n = self.receive(self.config.address, &mut token)?;
        Frame::check_size(n)?;
        if token == WAKE_TOKEN {
            return Ok(());
        }
        if token[1] == 0x07 && Frame::verify(&token).is_ok() {
            return Err(DeviceError::SelfTestError.into());
        }
        Err(Error::WakeFailed(token))
    }

    /// Put the device into its idle state.
    pub fn idle(&mut self) -> Result<()> {
        if self.config.is_pass_through() {
            return tolerate_unimplemented(self.hal.control(Control::Idle));
        }
        let word_address = match self.config.iface_type {
            InterfaceType::Swi => SWI_FLAG_IDLE,
            _ => WORD_ADDRESS_IDLE,
        };
        self.send(self.config.address, &[word_address])
    }
}
