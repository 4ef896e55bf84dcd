//! Test helpers on top of `embedded-hal-mock`
//!
//! Bus and pin expectations come from `embedded_hal_mock::eh1`; the only
//! hand-written part is a delay that keeps track of elapsed time.

use std::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal_mock::eh1::digital::{State as PinState, Transaction as PinTransaction};
use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;

use crate::cmd::{ADDR_COMMAND, ADDR_DATA};

/// Expected command write
pub fn command(byte: u8) -> I2cTransaction {
    I2cTransaction::write(ADDR_COMMAND, std::vec![byte])
}

/// Expected data write
pub fn data(byte: u8) -> I2cTransaction {
    I2cTransaction::write(ADDR_DATA, std::vec![byte])
}

/// Expected run of command writes
pub fn commands(bytes: &[u8]) -> Vec<I2cTransaction> {
    bytes.iter().copied().map(command).collect()
}

/// Reset line levels driven by a reset pulse
pub fn reset_pulse() -> [PinTransaction; 3] {
    [
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]
}

/// Busy line reads for a wait that sees `busy` busy polls, then ready
pub fn busy_then_ready(busy: usize) -> Vec<PinTransaction> {
    let mut reads = std::vec![PinTransaction::get(PinState::Low); busy];
    reads.push(PinTransaction::get(PinState::High));
    reads
}

/// Busy line reads for a wait that gives up after `timeout_ms`
pub fn stuck_busy(timeout_ms: u32) -> Vec<PinTransaction> {
    std::vec![PinTransaction::get(PinState::Low); timeout_ms as usize + 1]
}

/// Delay that adds up the requested time instead of sleeping
#[derive(Debug, Clone, Default)]
pub struct Clock {
    elapsed_ns: Rc<Cell<u64>>,
}

impl Clock {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns.get() / 1_000_000
    }
}

impl DelayNs for Clock {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns.set(self.elapsed_ns.get() + u64::from(ns));
    }
}
