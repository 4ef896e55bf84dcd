//! Bus and pin access
//!
//! Owns the I2C bus, the reset and busy lines and the delay source. Every
//! write is a single byte followed by a fixed 1 ms gap.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, InputPin, OutputPin};
use embedded_hal::i2c::I2c;

use crate::cmd::{ADDR_COMMAND, ADDR_DATA};
use crate::error::Error;

/// Gap after every bus write
pub const BUS_SPACING_MS: u32 = 1;

/// Interval between busy-line polls
pub const BUSY_POLL_MS: u32 = 1;

/// Settle time once the busy line reports ready
pub const BUSY_SETTLE_MS: u32 = 10;

/// Reset pulse: high, low, high
const RESET_HIGH_MS: u32 = 200;
const RESET_LOW_MS: u32 = 20;

/// Connection to the display controller
pub struct Interface<I2C, RST, BSY, D> {
    i2c: I2C,
    /// Reset, active low
    rst: RST,
    /// Low while the controller is busy
    busy: BSY,
    delay: D,
}

impl<I2C, RST, BSY, D> Interface<I2C, RST, BSY, D>
where
    I2C: I2c,
    RST: OutputPin,
    BSY: InputPin,
    D: DelayNs,
{
    /// Take ownership of the bus and pins
    ///
    /// The reset line is driven low until the first reset pulse.
    pub fn new(i2c: I2C, mut rst: RST, busy: BSY, delay: D) -> Result<Self, Error<I2C::Error>> {
        rst.set_low().map_err(|e| Error::Pin(e.kind()))?;
        Ok(Self {
            i2c,
            rst,
            busy,
            delay,
        })
    }

    /// Send a command byte
    pub fn command(&mut self, command: u8) -> Result<(), Error<I2C::Error>> {
        self.write(ADDR_COMMAND, command)
    }

    /// Send a run of command bytes
    pub fn commands(&mut self, commands: &[u8]) -> Result<(), Error<I2C::Error>> {
        for &command in commands {
            self.command(command)?;
        }
        Ok(())
    }

    /// Send a data byte
    pub fn data(&mut self, data: u8) -> Result<(), Error<I2C::Error>> {
        self.write(ADDR_DATA, data)
    }

    fn write(&mut self, address: u8, byte: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(address, &[byte]).map_err(Error::I2c)?;
        self.delay.delay_ms(BUS_SPACING_MS);
        Ok(())
    }

    /// Pulse the reset line
    pub fn hard_reset(&mut self) -> Result<(), Error<I2C::Error>> {
        self.rst.set_high().map_err(|e| Error::Pin(e.kind()))?;
        self.delay.delay_ms(RESET_HIGH_MS);
        self.rst.set_low().map_err(|e| Error::Pin(e.kind()))?;
        self.delay.delay_ms(RESET_LOW_MS);
        self.rst.set_high().map_err(|e| Error::Pin(e.kind()))?;
        self.delay.delay_ms(RESET_HIGH_MS);
        Ok(())
    }

    /// Poll the busy line until the controller is ready
    ///
    /// Gives up with [`Error::BusyTimeout`] once `timeout_ms` has passed.
    pub fn wait_until_idle(&mut self, timeout_ms: u32) -> Result<(), Error<I2C::Error>> {
        let mut waited_ms = 0u32;

        while self.busy.is_low().map_err(|e| Error::Pin(e.kind()))? {
            if waited_ms >= timeout_ms {
                return Err(Error::BusyTimeout);
            }
            self.delay.delay_ms(BUSY_POLL_MS);
            waited_ms = waited_ms.saturating_add(BUSY_POLL_MS);
        }

        self.delay.delay_ms(BUSY_SETTLE_MS);
        Ok(())
    }

    /// Block for `ms` milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Give back the bus, pins and delay
    pub fn release(self) -> (I2C, RST, BSY, D) {
        (self.i2c, self.rst, self.busy, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{busy_then_ready, command, data, reset_pulse, stuck_busy, Clock};
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    type TestInterface = Interface<I2cMock, PinMock, PinMock, Clock>;

    fn interface(
        i2c: &[I2cTransaction],
        rst: &[PinTransaction],
        busy: &[PinTransaction],
    ) -> (TestInterface, Clock) {
        let mut levels = vec![PinTransaction::set(PinState::Low)];
        levels.extend_from_slice(rst);

        let clock = Clock::default();
        let interface = Interface::new(
            I2cMock::new(i2c),
            PinMock::new(&levels),
            PinMock::new(busy),
            clock.clone(),
        )
        .unwrap();
        (interface, clock)
    }

    fn done(interface: TestInterface) {
        let (mut i2c, mut rst, mut busy, _) = interface.release();
        i2c.done();
        rst.done();
        busy.done();
    }

    #[test]
    fn test_new_drives_reset_low() {
        let (interface, clock) = interface(&[], &[], &[]);

        assert_eq!(clock.elapsed_ms(), 0);
        done(interface);
    }

    #[test]
    fn test_writes_are_spaced() {
        let (mut interface, clock) = interface(&[command(0x2B), data(0x00)], &[], &[]);

        interface.command(0x2B).unwrap();
        interface.data(0x00).unwrap();

        assert_eq!(clock.elapsed_ms(), 2 * BUS_SPACING_MS as u64);
        done(interface);
    }

    #[test]
    fn test_command_run() {
        let expected = [command(0xA7), command(0xE0)];
        let (mut interface, _clock) = interface(&expected, &[], &[]);

        interface.commands(&[0xA7, 0xE0]).unwrap();
        done(interface);
    }

    #[test]
    fn test_reset_pulse() {
        let (mut interface, clock) = interface(&[], &reset_pulse(), &[]);

        interface.hard_reset().unwrap();

        assert_eq!(clock.elapsed_ms(), 420);
        done(interface);
    }

    #[test]
    fn test_wait_polls_until_ready() {
        let (mut interface, clock) = interface(&[], &[], &busy_then_ready(25));

        interface.wait_until_idle(1_000).unwrap();

        assert_eq!(
            clock.elapsed_ms(),
            25 * BUSY_POLL_MS as u64 + BUSY_SETTLE_MS as u64
        );
        done(interface);
    }

    #[test]
    fn test_wait_times_out() {
        let (mut interface, clock) = interface(&[], &[], &stuck_busy(50));

        assert_eq!(interface.wait_until_idle(50), Err(Error::BusyTimeout));
        assert_eq!(clock.elapsed_ms(), 50);
        done(interface);
    }

    #[test]
    fn test_bus_error_is_reported() {
        let failing = [command(0x2B).with_error(ErrorKind::Other)];
        let (mut interface, clock) = interface(&failing, &[], &[]);

        assert_eq!(interface.command(0x2B), Err(Error::I2c(ErrorKind::Other)));
        // No spacing after a failed write
        assert_eq!(clock.elapsed_ms(), 0);
        done(interface);
    }
}
