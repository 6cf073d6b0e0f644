//! Events consumed by the TUI reducer.

use crossterm::event::Event;

/// Input to [`crate::update::update`]. The runtime translates everything that
/// happens (keyboard, resize, time passing) into one of these.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic heartbeat used for time-based housekeeping (toast expiry).
    Tick,
    /// A raw terminal event from crossterm.
    Terminal(Event),
}
