//! Byte offsets and bit masks of the frame buffer

/// Byte holding the micro digit (">99" one and the minus marker)
pub const MARKER_BYTE: usize = 0;

/// Micro "1" shown for temperatures of 100.0 and above
pub const ABOVE_99: u8 = 0x1F;

/// Minus marker for negative temperatures of -10.0 and below
pub const BELOW_10: u8 = 0x04;

/// Radix point bit, set in the layout's radix byte
pub const RADIX_POINT: u8 = 0x20;

/// Status byte: unit, bluetooth, power and percent icons
pub const STATUS_BYTE: usize = 13;

/// Where a quantity's three digits and its radix point live
///
/// Each digit occupies two consecutive bytes starting at its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitLayout {
    /// Start offsets of the digits, left to right
    pub digits: [usize; 3],
    /// Byte carrying the radix point
    pub radix: usize,
}

impl DigitLayout {
    /// Temperature: two full-height digits then the small one at 11-12
    pub const TEMPERATURE: Self = Self {
        digits: [1, 3, 11],
        radix: 4,
    };

    /// Humidity: two full-height digits then the small one at 9-10
    pub const HUMIDITY: Self = Self {
        digits: [5, 7, 9],
        radix: 8,
    };

    /// Check whether `byte` is written by this layout
    pub fn owns(&self, byte: usize) -> bool {
        self.digits.iter().any(|&d| byte == d || byte == d + 1) || byte == self.radix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FRAME_SIZE;

    #[test]
    fn test_radix_shares_middle_digit() {
        for layout in [DigitLayout::TEMPERATURE, DigitLayout::HUMIDITY] {
            assert_eq!(layout.radix, layout.digits[1] + 1);
        }
    }

    #[test]
    fn test_layouts_are_disjoint() {
        for byte in 0..FRAME_SIZE {
            assert!(!(DigitLayout::TEMPERATURE.owns(byte) && DigitLayout::HUMIDITY.owns(byte)));
        }
    }

    #[test]
    fn test_layouts_avoid_shared_bytes() {
        for layout in [DigitLayout::TEMPERATURE, DigitLayout::HUMIDITY] {
            assert!(!layout.owns(MARKER_BYTE));
            assert!(!layout.owns(STATUS_BYTE));
            assert!(!layout.owns(14));
        }
    }
}
