//! Driver errors

use embedded_hal::digital::ErrorKind as PinErrorKind;

/// Errors reported by the display driver
///
/// `E` is the error type of the I2C bus. Out-of-range readings are not
/// errors; see [`inkseg_core::Encoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// A bus write failed
    I2c(E),
    /// Driving the reset line or reading the busy line failed
    Pin(PinErrorKind),
    /// The busy line did not report ready in time
    ///
    /// The controller state is unknown afterwards and `init` has to run
    /// again.
    BusyTimeout,
    /// Refresh, maintenance or sleep requested before `init`
    NotInitialized,
}

impl<E> Error<E> {
    /// Check if the error leaves the controller needing a new `init`
    pub fn requires_reinit(&self) -> bool {
        matches!(self, Error::BusyTimeout | Error::NotInitialized)
    }
}
