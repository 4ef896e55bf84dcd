//! Temperature compensation bands
//!
//! The panel needs longer frame times in the cold to avoid ghosting. The
//! ambient range is split into five contiguous bands. The programmed band is
//! kept while new readings stay within [`HYSTERESIS_TENTHS`] of it, so a
//! reading drifting around a boundary does not reprogram the frame time on
//! every update.

/// Ambient temperature band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureBand {
    /// Below 5 °C
    Below5,
    /// 5 °C up to 10 °C
    Below10,
    /// 10 °C up to 15 °C
    Below15,
    /// 15 °C up to 20 °C
    Below20,
    /// 20 °C and above
    Warm,
}

/// How far (in tenths) a reading may leave the programmed band before the
/// frame time is reprogrammed
pub const HYSTERESIS_TENTHS: i32 = 20;

/// Booster setup for bands below 10 °C
const COLD_SETUP: [u8; 3] = [0x7E, 0x81, 0xB4];

/// Booster setup for bands from 10 °C
const MILD_SETUP: [u8; 3] = [0x7B, 0x81, 0xB4];

impl TemperatureBand {
    /// Band of a reading given in tenths of a degree
    pub const fn from_tenths(tenths: i32) -> Self {
        if tenths < 50 {
            TemperatureBand::Below5
        } else if tenths < 100 {
            TemperatureBand::Below10
        } else if tenths < 150 {
            TemperatureBand::Below15
        } else if tenths < 200 {
            TemperatureBand::Below20
        } else {
            TemperatureBand::Warm
        }
    }

    /// Range of the band in tenths: inclusive lower, exclusive upper
    pub const fn bounds_tenths(self) -> (Option<i32>, Option<i32>) {
        match self {
            TemperatureBand::Below5 => (None, Some(50)),
            TemperatureBand::Below10 => (Some(50), Some(100)),
            TemperatureBand::Below15 => (Some(100), Some(150)),
            TemperatureBand::Below20 => (Some(150), Some(200)),
            TemperatureBand::Warm => (Some(200), None),
        }
    }

    /// Check if a reading can keep this band programmed
    ///
    /// True inside the band and up to [`HYSTERESIS_TENTHS`] beyond either
    /// edge.
    pub const fn holds(self, tenths: i32) -> bool {
        let (lower, upper) = self.bounds_tenths();
        let above_lower = match lower {
            Some(lower) => tenths >= lower - HYSTERESIS_TENTHS,
            None => true,
        };
        let below_upper = match upper {
            Some(upper) => tenths < upper + HYSTERESIS_TENTHS,
            None => true,
        };
        above_lower && below_upper
    }

    /// Commands sent before the frame time
    pub const fn setup(self) -> [u8; 3] {
        match self {
            TemperatureBand::Below5 | TemperatureBand::Below10 => COLD_SETUP,
            _ => MILD_SETUP,
        }
    }

    /// Frame time argument, in units of 20 ms minus one
    pub const fn frame_time(self) -> u8 {
        match self {
            TemperatureBand::Below5 => 0x31,  // 1000 ms
            TemperatureBand::Below10 => 0x22, // 700 ms
            TemperatureBand::Below15 => 0x18, // 500 ms
            TemperatureBand::Below20 => 0x13, // 400 ms
            TemperatureBand::Warm => 0x0E,    // 300 ms
        }
    }

    /// Frame time in milliseconds
    pub const fn frame_time_ms(self) -> u32 {
        (self.frame_time() as u32 + 1) * 20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(TemperatureBand::from_tenths(-999), TemperatureBand::Below5);
        assert_eq!(TemperatureBand::from_tenths(49), TemperatureBand::Below5);
        assert_eq!(TemperatureBand::from_tenths(50), TemperatureBand::Below10);
        assert_eq!(TemperatureBand::from_tenths(99), TemperatureBand::Below10);
        assert_eq!(TemperatureBand::from_tenths(100), TemperatureBand::Below15);
        assert_eq!(TemperatureBand::from_tenths(150), TemperatureBand::Below20);
        assert_eq!(TemperatureBand::from_tenths(199), TemperatureBand::Below20);
        assert_eq!(TemperatureBand::from_tenths(200), TemperatureBand::Warm);
        assert_eq!(TemperatureBand::from_tenths(1999), TemperatureBand::Warm);
    }

    #[test]
    fn test_same_band_readings() {
        assert_eq!(
            TemperatureBand::from_tenths(40),
            TemperatureBand::from_tenths(-35)
        );
        assert_ne!(
            TemperatureBand::from_tenths(40),
            TemperatureBand::from_tenths(60)
        );
        assert_ne!(
            TemperatureBand::from_tenths(40),
            TemperatureBand::from_tenths(120)
        );
    }

    #[test]
    fn test_bounds_match_classification() {
        for band in [
            TemperatureBand::Below5,
            TemperatureBand::Below10,
            TemperatureBand::Below15,
            TemperatureBand::Below20,
            TemperatureBand::Warm,
        ] {
            let (lower, upper) = band.bounds_tenths();
            if let Some(lower) = lower {
                assert_eq!(TemperatureBand::from_tenths(lower), band);
            }
            if let Some(upper) = upper {
                assert_eq!(TemperatureBand::from_tenths(upper - 1), band);
                assert_ne!(TemperatureBand::from_tenths(upper), band);
            }
        }
    }

    #[test]
    fn test_holds_near_edges() {
        // 4 °C programmed, 6 °C is just past the 5 °C edge
        let band = TemperatureBand::from_tenths(40);
        assert!(band.holds(60));
        assert!(band.holds(20));
        assert!(band.holds(-999));
        assert!(band.holds(69));
        assert!(!band.holds(70));
        assert!(!band.holds(120));

        let band = TemperatureBand::Below15;
        assert!(band.holds(80));
        assert!(!band.holds(79));
        assert!(band.holds(169));
        assert!(!band.holds(170));

        assert!(TemperatureBand::Warm.holds(1999));
        assert!(TemperatureBand::Warm.holds(180));
        assert!(!TemperatureBand::Warm.holds(179));
    }

    #[test]
    fn test_frame_times() {
        assert_eq!(TemperatureBand::Below5.frame_time_ms(), 1000);
        assert_eq!(TemperatureBand::Below10.frame_time_ms(), 700);
        assert_eq!(TemperatureBand::Below15.frame_time_ms(), 500);
        assert_eq!(TemperatureBand::Below20.frame_time_ms(), 400);
        assert_eq!(TemperatureBand::Warm.frame_time_ms(), 300);
    }

    #[test]
    fn test_setup_switches_at_10() {
        assert_eq!(TemperatureBand::Below10.setup()[0], 0x7E);
        assert_eq!(TemperatureBand::Below15.setup()[0], 0x7B);
    }
}
