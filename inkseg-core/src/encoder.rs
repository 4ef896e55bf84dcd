//! Value-to-segment encoding
//!
//! Turns a decimal reading into three glyphs plus a radix point at the
//! offsets of a [`DigitLayout`]. Readings are handled in tenths (fixed
//! point) so rounding does not depend on float representation.
//!
//! | value  | slots            | byte 0      |
//! |--------|------------------|-------------|
//! | 0.0    | ` ` `0` `0`      | 0           |
//! | -8.95  | `-` `9` `0`      | 0           |
//! | -56.7  | `5` `6` `7`      | `BELOW_10`  |
//! | 167.8  | `6` `7` `8`      | `ABOVE_99`  |
//! | 234.5  | `E` `r` `r`      | 0           |

use crate::frame::FrameBuffer;
use crate::glyph::{Glyph, ERROR_GLYPHS};
use crate::layout::{DigitLayout, ABOVE_99, BELOW_10, MARKER_BYTE, RADIX_POINT};

/// Outcome of an encode call
///
/// Out-of-range readings are not errors: the error glyphs are drawn instead
/// of digits and the caller is told which one happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Encoding {
    /// Digits and radix point were written
    Digits,
    /// The reading was outside the displayable range, "Err" was written
    OutOfRange,
}

/// A displayed physical quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    /// Temperature, -99.9 to 199.9
    Temperature,
    /// Relative humidity, 0.0 to 99.9
    Humidity,
}

impl Quantity {
    /// Digit offsets for this quantity
    pub const fn layout(self) -> DigitLayout {
        match self {
            Quantity::Temperature => DigitLayout::TEMPERATURE,
            Quantity::Humidity => DigitLayout::HUMIDITY,
        }
    }

    /// Displayable range (inclusive)
    pub const fn bounds(self) -> (f32, f32) {
        match self {
            Quantity::Temperature => (-99.9, 199.9),
            Quantity::Humidity => (0.0, 99.9),
        }
    }

    /// Displayable range in tenths (inclusive)
    pub const fn bounds_tenths(self) -> (i32, i32) {
        match self {
            Quantity::Temperature => (-999, 1999),
            Quantity::Humidity => (0, 999),
        }
    }

    /// Range-check a reading and convert it to tenths
    ///
    /// Returns `None` for readings outside [`Self::bounds`] (including NaN).
    pub fn checked_tenths(self, value: f32) -> Option<i32> {
        let (min, max) = self.bounds();
        if value >= min && value <= max {
            Some(to_tenths(value))
        } else {
            None
        }
    }
}

/// Slack added in the x10 domain before truncating
///
/// Larger than the f32 representation error of any reading in range (half
/// an ulp at 199.9 is below 1e-5 °C), far smaller than a real hundredth.
const ROUNDING_SLACK: f64 = 1e-4;

/// Round a reading to tenths, half away from zero
///
/// The tenths digit is rounded once, in f64. The slack absorbs the float
/// error of inputs like 8.95 (stored as 8.9499998...) without moving
/// readings such as 2.246 across the half.
pub fn to_tenths(value: f32) -> i32 {
    let magnitude = f64::from(if value < 0.0 { -value } else { value });
    let tenths = (magnitude * 10.0 + 0.5 + ROUNDING_SLACK) as i32;

    if value < 0.0 {
        -tenths
    } else {
        tenths
    }
}

/// Encode a reading into `frame`
pub fn encode(frame: &mut FrameBuffer, quantity: Quantity, value: f32) -> Encoding {
    match quantity.checked_tenths(value) {
        Some(tenths) => encode_tenths(frame, quantity, tenths),
        None => reject(frame, quantity),
    }
}

/// Encode a reading given in tenths into `frame`
///
/// For temperature, byte 0 is rewritten as well: it carries the ">99" and
/// minus markers, which belong to the temperature alone.
pub fn encode_tenths(frame: &mut FrameBuffer, quantity: Quantity, tenths: i32) -> Encoding {
    let (min, max) = quantity.bounds_tenths();
    if tenths < min || tenths > max {
        return reject(frame, quantity);
    }

    if quantity == Quantity::Temperature {
        frame.set_byte(MARKER_BYTE, 0);
    }

    let negative = tenths < 0;
    let mut magnitude = tenths.unsigned_abs();

    // Only the micro digit can show the hundreds
    let above_99 = magnitude >= 1000;
    if above_99 {
        frame.set_bits(MARKER_BYTE, ABOVE_99);
        magnitude -= 1000;
    }

    let tenth = digit(magnitude % 10);
    let rest = magnitude / 10;

    let (lead, ones) = if rest < 10 {
        let lead = if negative { Glyph::Minus } else { Glyph::Blank };
        (lead, digit(rest))
    } else {
        // Leading slot holds the tens, the sign moves to the marker byte
        if negative {
            frame.set_bits(MARKER_BYTE, BELOW_10);
        }
        (digit(rest / 10), digit(rest % 10))
    };

    let layout = quantity.layout();
    for (offset, glyph) in layout.digits.into_iter().zip([lead, ones, tenth]) {
        frame.write_glyph(offset, glyph);
    }
    frame.set_bits(layout.radix, RADIX_POINT);

    Encoding::Digits
}

/// Write the error glyphs into the slots of `quantity`
fn reject(frame: &mut FrameBuffer, quantity: Quantity) -> Encoding {
    if quantity == Quantity::Temperature {
        frame.set_byte(MARKER_BYTE, 0);
    }

    let layout = quantity.layout();
    for (offset, glyph) in layout.digits.into_iter().zip(ERROR_GLYPHS) {
        frame.write_glyph(offset, glyph);
    }

    Encoding::OutOfRange
}

fn digit(value: u32) -> Glyph {
    Glyph::digit((value % 10) as u8).unwrap_or(Glyph::Blank)
}
