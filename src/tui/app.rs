//! Main TUI application.
//!
//! Two activities share nothing but a stop flag and a frame gate: a render
//! thread that owns the terminal and runs the [`Updater`], and the main
//! thread that waits for a quit key. Teardown raises the flag and takes the
//! gate before touching the terminal, so no frame lands after restore.

use std::io;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use crate::error::MonitorError;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::updater::Updater;

/// How often the main thread checks on the render thread.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main TUI application.
pub struct App {
    updater: Updater,
}

impl App {
    pub fn new(updater: Updater) -> Self {
        Self { updater }
    }

    /// Takes over the terminal until a quit key is pressed or rendering
    /// fails. The terminal is restored either way.
    pub fn run(self) -> Result<(), MonitorError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            disable_raw_mode().ok();
            return Err(e.into());
        }

        let stop = Arc::new(AtomicBool::new(false));
        let gate = Arc::new(Mutex::new(()));
        let result = self.run_threads(&stop, &gate);

        stop.store(true, Ordering::Relaxed);
        let _frame = gate.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        disable_raw_mode()?;
        execute!(stdout, LeaveAlternateScreen, Show)?;
        result
    }

    fn run_threads(
        self,
        stop: &Arc<AtomicBool>,
        gate: &Arc<Mutex<()>>,
    ) -> Result<(), MonitorError> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        let render_stop = Arc::clone(stop);
        let render_gate = Arc::clone(gate);
        let mut updater = self.updater;
        let render = thread::Builder::new()
            .name("render".into())
            .spawn(move || updater.run(&mut terminal, &render_stop, &render_gate))?;
        info!("render thread started");

        let events = EventHandler::new(POLL_INTERVAL)?;
        loop {
            match events.next() {
                Ok(Event::Key(key)) => {
                    if handle_key(&key) == KeyAction::Quit {
                        info!("quit requested");
                        return Ok(());
                    }
                }
                Ok(Event::Tick) => {
                    if render.is_finished() {
                        break;
                    }
                }
                Err(_) => return Ok(()),
            }
        }

        match render.join() {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                error!(error = %e, "render thread failed");
                Err(e)
            }
            Err(_) => {
                error!("render thread panicked");
                Err(MonitorError::RenderPanicked)
            }
        }
    }
}
