//! Glyph bitmaps
//!
//! Every digit position (except the micro digit in byte 0) has 13 segments
//! spread over two consecutive bytes. Bit-to-segment mapping is top-down,
//! left-right:
//!
//! ```text
//!     5
//!  0 *-*0
//!  1 |6|1
//!  2 *-*2
//!  3 |7|3
//!  4 *-*4
//! ```
//!
//! Bits 0-7 live in the first byte, bits 0-4 of the second byte complete the
//! glyph. Bit 5 of the second byte belongs to whatever icon shares the byte
//! (radix point, ...), so a glyph never sets it.

/// Displayable characters, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Glyph {
    Zero = 0,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    /// Minus sign
    Minus,
    /// All segments off
    Blank,
    /// Error "E"
    E,
    /// Error "r" for the full-height digits
    R,
    /// Error "r" for the reduced-height digits
    RSmall,
}

/// Number of glyphs in [`GLYPHS`]
pub const GLYPH_COUNT: usize = 15;

/// Segment bitmaps indexed by `Glyph as usize`
pub const GLYPHS: [[u8; 2]; GLYPH_COUNT] = [
    [0xBF, 0x1F], // 0
    [0x00, 0x1F], // 1
    [0xFD, 0x17], // 2
    [0xF5, 0x1F], // 3
    [0x47, 0x1F], // 4
    [0xF7, 0x1D], // 5
    [0xFF, 0x1D], // 6
    [0x21, 0x1F], // 7
    [0xFF, 0x1F], // 8
    [0xF7, 0x1F], // 9
    [0x44, 0x00], // -
    [0x00, 0x00], // blank
    [0xFF, 0x00], // E
    [0x5C, 0x00], // r (full height)
    [0x3F, 0x01], // r (reduced height)
];

const DIGITS: [Glyph; 10] = [
    Glyph::Zero,
    Glyph::One,
    Glyph::Two,
    Glyph::Three,
    Glyph::Four,
    Glyph::Five,
    Glyph::Six,
    Glyph::Seven,
    Glyph::Eight,
    Glyph::Nine,
];

/// Error indicator spelled across the three digit slots of a quantity
pub const ERROR_GLYPHS: [Glyph; 3] = [Glyph::E, Glyph::R, Glyph::RSmall];

impl Glyph {
    /// Glyph for a decimal digit
    ///
    /// Returns `None` for values above 9.
    pub const fn digit(value: u8) -> Option<Self> {
        if value < 10 {
            Some(DIGITS[value as usize])
        } else {
            None
        }
    }

    /// The two segment bytes for this glyph
    pub const fn bitmap(self) -> [u8; 2] {
        GLYPHS[self as usize]
    }
}
