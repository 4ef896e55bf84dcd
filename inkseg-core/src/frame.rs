//! Frame buffer
//!
//! The controller has room for 120 segments but the panel wires up only 92 of
//! them. All 15 bytes are still sent on every refresh; unused bits stay 0.

use crate::glyph::Glyph;

/// Size of the device RAM in bytes
pub const FRAME_SIZE: usize = 15;

/// The complete visual state of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBuffer([u8; FRAME_SIZE]);

impl FrameBuffer {
    /// All segments off
    pub const fn new() -> Self {
        Self([0; FRAME_SIZE])
    }

    /// Every bit set, used by the cleaning cycle
    pub const fn all_on() -> Self {
        Self([0xFF; FRAME_SIZE])
    }

    /// Raw bytes in transmission order
    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.0
    }

    /// Read a single byte
    pub fn byte(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Overwrite the two bytes starting at `offset` with a glyph
    pub fn write_glyph(&mut self, offset: usize, glyph: Glyph) {
        self.0[offset..offset + 2].copy_from_slice(&glyph.bitmap());
    }

    /// Set the bits of `mask` in byte `index`
    pub fn set_bits(&mut self, index: usize, mask: u8) {
        self.0[index] |= mask;
    }

    /// Clear the bits of `mask` in byte `index`
    pub fn clear_bits(&mut self, index: usize, mask: u8) {
        self.0[index] &= !mask;
    }

    /// Set or clear the bits of `mask` in byte `index`
    pub fn update_bits(&mut self, index: usize, mask: u8, on: bool) {
        if on {
            self.set_bits(index, mask);
        } else {
            self.clear_bits(index, mask);
        }
    }

    /// Overwrite byte `index`
    pub fn set_byte(&mut self, index: usize, value: u8) {
        self.0[index] = value;
    }
}

impl From<[u8; FRAME_SIZE]> for FrameBuffer {
    fn from(bytes: [u8; FRAME_SIZE]) -> Self {
        Self(bytes)
    }
}
