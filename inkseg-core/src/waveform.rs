//! Waveform tables and refresh modes
//!
//! Each table is loaded as seven single-byte commands.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Refresh quality selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RefreshMode {
    /// Slow ghost-clearing refresh
    Full,
    /// Fast refresh for frequent small changes
    #[default]
    Partial,
}

impl RefreshMode {
    /// Waveform table implementing this mode
    pub const fn waveform(self) -> Waveform {
        match self {
            RefreshMode::Full => Waveform::GhostClear,
            RefreshMode::Partial => Waveform::Fast,
        }
    }

    /// Mode from the `full` flag of the public API
    pub const fn from_full(full: bool) -> Self {
        if full {
            RefreshMode::Full
        } else {
            RefreshMode::Partial
        }
    }
}

/// Device waveform tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Waveform {
    /// DU white/black table, used for partial refresh
    Fast,
    /// GC table, used for full refresh and cleaning
    GhostClear,
    /// Boot table with the least ghosting, used to clear the panel
    Boot,
}

impl Waveform {
    /// Command bytes loading this table
    pub const fn commands(self) -> &'static [u8; 7] {
        match self {
            Waveform::Fast => &[0x82, 0x80, 0x00, 0xC0, 0x80, 0x80, 0x62],
            Waveform::GhostClear => &[0x82, 0x20, 0x00, 0xA0, 0x80, 0x40, 0x63],
            Waveform::Boot => &[0x82, 0x28, 0x20, 0xA8, 0xA0, 0x50, 0x65],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_mapping() {
        assert_eq!(RefreshMode::from_full(true), RefreshMode::Full);
        assert_eq!(RefreshMode::from_full(false), RefreshMode::Partial);
        assert_eq!(RefreshMode::Full.waveform(), Waveform::GhostClear);
        assert_eq!(RefreshMode::Partial.waveform(), Waveform::Fast);
        assert_eq!(RefreshMode::default(), RefreshMode::Partial);
    }

    #[test]
    fn test_tables_share_prefix() {
        for waveform in [Waveform::Fast, Waveform::GhostClear, Waveform::Boot] {
            assert_eq!(waveform.commands()[0], 0x82);
        }
        assert_ne!(Waveform::Fast.commands(), Waveform::GhostClear.commands());
    }
}
