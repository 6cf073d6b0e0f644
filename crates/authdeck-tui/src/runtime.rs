//! Synchronous event loop driving the reducer.
//!
//! The loop is: draw when dirty, poll the terminal with a cadence-dependent
//! timeout, feed events through [`update`], execute the returned effects.
//! Nothing in the app is asynchronous, so there are no worker threads; time
//! only advances through poll timeouts turning into ticks.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use authdeck_core::config::Config;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::update::update;
use crate::{render, terminal};

/// Poll timeout while toasts are on screen (smooth expiry).
const FRAME_DURATION: Duration = Duration::from_millis(16);
/// Poll timeout while idle; nothing changes without input, so stay lazy.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub app: AppState,
}

impl Runtime {
    pub fn new(config: Config) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal()?;
        Ok(Self {
            terminal,
            app: AppState::new(config),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        debug!("event loop started");
        let mut dirty = true;
        let mut last_tick = Instant::now();

        loop {
            if dirty {
                let app = &self.app;
                self.terminal.draw(|frame| render::render(frame, app))?;
                dirty = false;
            }

            let timeout = if self.app.tui.toasts.is_empty() {
                IDLE_POLL_DURATION
            } else {
                FRAME_DURATION
            };

            if event::poll(timeout)? {
                let term_event = event::read()?;
                let effects = update(&mut self.app, UiEvent::Terminal(term_event));
                dirty = true;
                if self.execute(effects) {
                    break;
                }
            }

            if last_tick.elapsed() >= timeout {
                let had_toasts = !self.app.tui.toasts.is_empty();
                let effects = update(&mut self.app, UiEvent::Tick);
                last_tick = Instant::now();
                if had_toasts {
                    dirty = true;
                }
                if self.execute(effects) {
                    break;
                }
            }
        }

        debug!("event loop finished");
        Ok(())
    }

    /// Executes effects. Returns true when the loop should stop.
    fn execute(&mut self, effects: Vec<UiEffect>) -> bool {
        let mut quit = false;
        for effect in effects {
            match effect {
                UiEffect::Quit => quit = true,
            }
        }
        quit
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
