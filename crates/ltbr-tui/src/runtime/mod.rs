//! Reader runtime: owns the terminal, runs the event loop and hands every
//! event to the `ReadingSession`.
//!
//! Terminal input is polled with a timeout that ends at the next `Tick`, so
//! the loop wakes at least four times a second to expire status messages.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::events::UiEvent;
use crate::session::ReadingSession;
use crate::{render, terminal};

/// Interval between `Tick` events.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Full-screen runtime. Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub session: ReadingSession,
    last_tick: Instant,
}

impl TuiRuntime {
    pub fn new(session: ReadingSession) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            session,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the session asks to quit.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.session.should_quit() {
            let mut events = self.collect_events()?;

            // Layout must be known before input is interpreted
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                self.session.dispatch(event);
                if self.session.should_quit() {
                    return Ok(());
                }
            }

            let state = &self.session.state;
            self.terminal.draw(|frame| {
                render::render(state, frame);
            })?;
        }
        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        let poll_duration = TICK_INTERVAL.saturating_sub(self.last_tick.elapsed());

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain anything else already buffered
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_INTERVAL {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
