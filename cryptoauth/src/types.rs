// cryptoauth/src/types.rs

use derive_more::Display;

/// Secure element model attached to an interface.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceModel {
    #[display(fmt = "ATSHA204A")]
    Sha204a,
    #[display(fmt = "ATSHA206A")]
    Sha206a,
    #[display(fmt = "ATECC108A")]
    Ecc108a,
    #[display(fmt = "ATECC508A")]
    Ecc508a,
    #[display(fmt = "ATECC608")]
    Ecc608,
    #[display(fmt = "ECC204")]
    Ecc204,
    #[display(fmt = "TA010")]
    Ta010,
    #[display(fmt = "SHA104")]
    Sha104,
    #[display(fmt = "SHA105")]
    Sha105,
    #[display(fmt = "unknown device")]
    Unknown,
}

impl DeviceModel {
    /// Reduced-protocol family: no word-address byte before reads and no
    /// distinct idle state.
    pub fn is_ca2(&self) -> bool {
        matches!(
            self,
            DeviceModel::Ecc204 | DeviceModel::Ta010 | DeviceModel::Sha104 | DeviceModel::Sha105
        )
    }
}

impl Default for DeviceModel {
    fn default() -> Self {
        // The ATECC608 is the part the driver is most commonly paired with.
        DeviceModel::Ecc608
    }
}

/// Physical interface class the device is reached through.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterfaceType {
    #[display(fmt = "i2c")]
    I2c,
    #[display(fmt = "swi")]
    Swi,
    #[display(fmt = "swi-gpio")]
    SwiGpio,
    #[display(fmt = "spi")]
    Spi,
    #[display(fmt = "uart")]
    Uart,
    #[display(fmt = "hid")]
    Hid,
    #[display(fmt = "kit")]
    Kit,
    #[display(fmt = "custom")]
    Custom,
}

impl InterfaceType {
    /// Kit-protocol interfaces tunnel whole packets through a host adapter
    /// that performs the bus framing itself.
    pub fn is_kit(&self) -> bool {
        matches!(self, InterfaceType::Uart | InterfaceType::Hid | InterfaceType::Kit)
    }
}

/// ATECC608 chip-mode clock divider. Slower dividers lengthen every
/// command's execution time.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockDivider {
    #[display(fmt = "M0")]
    M0 = 0x00,
    #[display(fmt = "M1")]
    M1 = 0x08,
    #[display(fmt = "M2")]
    M2 = 0x10,
}

impl ClockDivider {
    /// Decode the raw chip-mode bits. Unrecognized values yield `None`.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw & 0xF8 {
            0x00 => Some(Self::M0),
            0x08 => Some(Self::M1),
            0x10 => Some(Self::M2),
            _ => None,
        }
    }
}

/// Tracked power/readiness state of a device.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceState {
    #[default]
    Unknown,
    Idle,
    Active,
}
