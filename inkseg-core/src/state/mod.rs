//! Device session state machine
//!
//! The panel is write-only apart from the busy line, so the driver tracks
//! the controller's power state itself. Transitions are explicit, finite
//! and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::DeviceState;
