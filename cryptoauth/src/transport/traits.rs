// cryptoauth/src/transport/traits.rs

use crate::{Error, Result};

/// Bus control operations a HAL may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Select,
    Deselect,
    Wake,
    Idle,
}

/// Hal trait abstracts raw bus I/O away from protocol/device logic.
pub trait Hal {
    /// Send raw bytes to the device at `address`.
    fn send(&mut self, address: u8, data: &[u8]) -> Result<()>;

    /// Receive up to `buf.len()` bytes from the device at `address`.
    /// Returns the number of bytes written into `buf`.
    fn receive(&mut self, address: u8, buf: &mut [u8]) -> Result<usize>;

    /// Perform a bus control operation. Transports without the concept
    /// return `Error::Unimplemented`, which is the default.
    fn control(&mut self, _op: Control) -> Result<()> {
        Err(Error::Unimplemented)
    }
}

impl<H: Hal + ?Sized> Hal for Box<H> {
    fn send(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).send(address, data)
    }

    fn receive(&mut self, address: u8, buf: &mut [u8]) -> Result<usize> {
        (**self).receive(address, buf)
    }

    fn control(&mut self, op: Control) -> Result<()> {
        (**self).control(op)
    }
}

/// Blocking delay primitive.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);

    /// Microsecond delay, rounded up to whole milliseconds by default.
    fn delay_us(&mut self, us: u32) {
        self.delay_ms(us.div_ceil(1000));
    }
}

impl<D: Delay + ?Sized> Delay for Box<D> {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}

/// Treat `Unimplemented` as success. Not every transport supports every
/// control operation.
pub fn tolerate_unimplemented(result: Result<()>) -> Result<()> {
    match result {
        Err(Error::Unimplemented) => Ok(()),
        other => other,
    }
}
