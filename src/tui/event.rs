//! Event handling for the TUI.
//!
//! Uses a separate thread to poll for key presses and timer ticks.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Events delivered to the main thread.
#[derive(Debug)]
pub enum Event {
    /// Poll timeout elapsed with no input.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
}

/// Polls terminal events on a background thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure.
    _tx: Sender<Event>,
}

impl EventHandler {
    /// Starts polling; a `Tick` is sent whenever `tick_rate` passes quietly.
    pub fn new(tick_rate: Duration) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("input".into())
            .spawn(move || {
                loop {
                    let event = if event::poll(tick_rate).unwrap_or(false) {
                        match event::read() {
                            Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                            Ok(_) => continue,
                            Err(_) => Event::Tick,
                        }
                    } else {
                        Event::Tick
                    };
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            })?;

        Ok(Self { rx, _tx: tx })
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
