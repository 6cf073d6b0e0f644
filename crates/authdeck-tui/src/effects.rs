//! Effects returned by the reducer for the runtime to execute.
//!
//! The reducer never touches the terminal or the process; anything with an
//! observable consequence outside [`crate::state::AppState`] is expressed as
//! an effect.

/// Side effects the runtime performs after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Stop the event loop and restore the terminal.
    Quit,
}
