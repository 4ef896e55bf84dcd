//! Events that trigger state transitions

/// Events produced by the protocol driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Reset line pulsed
    HardReset,
    /// Power-on sequence and waveform load finished
    PoweredOn,
    /// Refresh started (close sleep, power on, RAM write)
    RefreshStarted,
    /// Refresh finished, HV off and sleep-in sent
    RefreshFinished,
    /// Explicit deep-sleep request completed
    SleepEntered,
    /// Busy line never reported ready
    BusyTimeout,
}
