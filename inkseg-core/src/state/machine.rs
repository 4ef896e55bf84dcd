//! State machine definition

use super::events::Event;

/// Controller power states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Not initialized, or reset after a fault
    #[default]
    Reset,
    /// Powered and waiting for a refresh
    AwakeIdle,
    /// Frame being transferred and displayed
    Updating,
    /// Panel off, controller in sleep; a refresh wakes it again
    Sleeping,
}

impl DeviceState {
    /// Check if the controller has been initialized
    pub fn is_initialized(&self) -> bool {
        !matches!(self, DeviceState::Reset)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use DeviceState::*;
        use Event::*;

        match (self, event) {
            // A reset pulse or a hung controller always lands in Reset
            (_, HardReset) => Reset,
            (_, BusyTimeout) => Reset,

            (Reset, PoweredOn) => AwakeIdle,

            // The refresh sequence begins with "close sleep"
            (AwakeIdle, RefreshStarted) => Updating,
            (Sleeping, RefreshStarted) => Updating,

            (Updating, RefreshFinished) => Sleeping,

            (AwakeIdle, SleepEntered) => Sleeping,
            (Updating, SleepEntered) => Sleeping,
            (Sleeping, SleepEntered) => Sleeping,

            // Default: stay in current state
            _ => self,
        }
    }
}
