//! Status byte icons and temperature units

use crate::frame::FrameBuffer;
use crate::layout::STATUS_BYTE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bits of the status byte claimed by the unit symbol
pub const UNIT_MASK: u8 = 0x07;

/// Temperature unit symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TemperatureUnit {
    /// °C
    #[default]
    Celsius = 0x05,
    /// °F
    Fahrenheit = 0x06,
}

impl TemperatureUnit {
    /// Status byte code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse a status byte code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x05 => Some(Self::Celsius),
            0x06 => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    /// Replace the unit field of the status byte
    pub fn apply(self, frame: &mut FrameBuffer) {
        frame.clear_bits(STATUS_BYTE, UNIT_MASK);
        frame.set_bits(STATUS_BYTE, self.code());
    }
}

/// Single-bit status icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Icon {
    /// Bluetooth symbol
    Bluetooth,
    /// Power plug symbol
    Power,
    /// Percent sign after the humidity
    Percent,
}

impl Icon {
    /// Bit of the status byte driving this icon
    pub const fn mask(self) -> u8 {
        match self {
            Icon::Bluetooth => 0x08,
            Icon::Power => 0x10,
            Icon::Percent => 0x20,
        }
    }

    /// Show or hide the icon
    pub fn apply(self, frame: &mut FrameBuffer, visible: bool) {
        frame.update_bits(STATUS_BYTE, self.mask(), visible);
    }

    /// Check whether the icon is lit in `frame`
    pub fn is_shown(self, frame: &FrameBuffer) -> bool {
        frame.byte(STATUS_BYTE) & self.mask() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_codes() {
        assert_eq!(TemperatureUnit::Celsius.code(), 0x05);
        assert_eq!(TemperatureUnit::Fahrenheit.code(), 0x06);
        assert_eq!(TemperatureUnit::from_code(0x06), Some(TemperatureUnit::Fahrenheit));
        assert_eq!(TemperatureUnit::from_code(0x07), None);
    }

    #[test]
    fn test_unit_switch_replaces_field() {
        let mut frame = FrameBuffer::new();
        Icon::Power.apply(&mut frame, true);

        TemperatureUnit::Celsius.apply(&mut frame);
        assert_eq!(frame.byte(STATUS_BYTE), 0x15);

        TemperatureUnit::Fahrenheit.apply(&mut frame);
        assert_eq!(frame.byte(STATUS_BYTE), 0x16);

        TemperatureUnit::Celsius.apply(&mut frame);
        assert_eq!(frame.byte(STATUS_BYTE), 0x15);
    }

    #[test]
    fn test_icons_are_independent() {
        let mut frame = FrameBuffer::new();
        Icon::Bluetooth.apply(&mut frame, true);
        Icon::Percent.apply(&mut frame, true);
        assert!(Icon::Bluetooth.is_shown(&frame));
        assert!(!Icon::Power.is_shown(&frame));
        assert!(Icon::Percent.is_shown(&frame));

        Icon::Bluetooth.apply(&mut frame, false);
        assert!(!Icon::Bluetooth.is_shown(&frame));
        assert_eq!(frame.byte(STATUS_BYTE), 0x20);
    }
}
