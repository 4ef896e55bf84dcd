//! Driver configuration
//!
//! Bus spacing and reset timing are fixed by the controller and are not part
//! of the configuration.

use crate::status::TemperatureUnit;
use crate::waveform::RefreshMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default upper bound for a busy wait
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 10_000;

/// Display driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Refresh mode loaded by `init`
    pub refresh: RefreshMode,
    /// Unit used when a temperature is set without one
    pub unit: TemperatureUnit,
    /// Give up waiting on the busy line after this long
    pub busy_timeout_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh: RefreshMode::Partial,
            unit: TemperatureUnit::Celsius,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl DisplayConfig {
    /// Use full refresh from the start
    pub fn with_full_refresh(mut self) -> Self {
        self.refresh = RefreshMode::Full;
        self
    }

    /// Show temperatures in another unit by default
    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Override the busy-line timeout
    pub fn with_busy_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.busy_timeout_ms = timeout_ms;
        self
    }
}
