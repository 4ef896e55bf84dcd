//! Controller command bytes and bus addresses
//!
//! Every transaction is a single byte written to either the command or the
//! data address.

/// Command channel
pub const ADDR_COMMAND: u8 = 0x3C;

/// Data channel
pub const ADDR_DATA: u8 = 0x3D;

/// HV off, also used as power-off before deep sleep
pub const HV_OFF: u8 = 0x28;
/// Power on
pub const POWER_ON: u8 = 0x2B;
/// Set RAM write address
pub const RAM_ADDRESS: u8 = 0x40;
/// Booster enable
pub const BOOSTER: u8 = 0xA7;
/// First RAM bank off
pub const RAM1_OFF: u8 = 0xA8;
/// First RAM bank on
pub const RAM1_ON: u8 = 0xA9;
/// Second RAM bank off
pub const RAM2_OFF: u8 = 0xAA;
/// Second RAM bank on
pub const RAM2_ON: u8 = 0xAB;
/// Close sleep (wake)
pub const CLOSE_SLEEP: u8 = 0xAC;
/// Sleep in / deep sleep
pub const SLEEP_IN: u8 = 0xAD;
/// Panel off
pub const PANEL_OFF: u8 = 0xAE;
/// Panel on, starts the refresh
pub const PANEL_ON: u8 = 0xAF;
/// Temperature sensor on
pub const TSON: u8 = 0xE0;
/// Frame time, followed by the band's frame-time byte
pub const FRAME_TIME: u8 = 0xE7;
