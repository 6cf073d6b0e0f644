//! Terminal UI for authdeck.
//!
//! Elm-style architecture: a pure-ish reducer ([`update::update`]) owns every
//! state change, rendering is a function of `&AppState`, and the runtime
//! executes the effects the reducer returns.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::IsTerminal;

use anyhow::{Result, bail};
use authdeck_core::config::Config;

/// Runs the interactive TUI until the user quits.
pub fn run(config: Config) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("authdeck needs an interactive terminal (stdout is not a tty)");
    }

    let mut runtime = runtime::Runtime::new(config)?;
    runtime.run()
}
