//! Board-agnostic core logic for the 1.9" e-ink segment display
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Glyph bitmaps and the per-quantity digit layouts
//! - The 15-byte frame buffer
//! - Value-to-segment encoding (temperature, humidity)
//! - Status byte icons and temperature units
//! - Temperature bands and waveform tables
//! - Device state machine
//! - Driver configuration types
//!
//! # Frame layout
//!
//! ```text
//!  byte   0 : micro digit (">99" one, minus marker)
//!  1- 2     : temperature digit 0 (full height)
//!  3- 4     : temperature digit 1 (full height), byte 4 bit 5 = radix point
//!  5- 6     : humidity digit 0 (full height)
//!  7- 8     : humidity digit 1 (full height), byte 8 bit 5 = radix point
//!  9-10     : humidity digit 2 (reduced height)
//! 11-12     : temperature digit 2 (reduced height)
//!    13     : status (unit, bluetooth, power, percent)
//!    14     : unused
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod band;
pub mod config;
pub mod encoder;
pub mod frame;
pub mod glyph;
pub mod layout;
pub mod state;
pub mod status;
pub mod waveform;

pub use band::TemperatureBand;
pub use config::DisplayConfig;
pub use encoder::{Encoding, Quantity};
pub use frame::{FrameBuffer, FRAME_SIZE};
pub use glyph::Glyph;
pub use layout::DigitLayout;
pub use state::{DeviceState, Event};
pub use status::{Icon, TemperatureUnit};
pub use waveform::{RefreshMode, Waveform};
