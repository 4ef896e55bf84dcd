//! I2C driver for the 1.9" e-ink segment display
//!
//! Built on the blocking `embedded-hal` 1.0 traits, so it runs on any HAL
//! that provides an I2C bus, an output pin for reset, an input pin for the
//! busy line and a delay source.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod cmd;
pub mod display;
pub mod error;
pub mod interface;

#[cfg(test)]
mod mock;

pub use display::{Screen, SegmentDisplay};
pub use error::Error;
pub use interface::Interface;

pub use inkseg_core::{
    DeviceState, DisplayConfig, Encoding, FrameBuffer, Icon, RefreshMode, TemperatureBand,
    TemperatureUnit, Waveform,
};
