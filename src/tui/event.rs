//! Event handling for the TUI
//!
//! Terminal events are read on a dedicated thread and forwarded over a
//! channel, so the main thread only ever handles one event at a time.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// The input thread could not read from the terminal
    Failed(String),
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        // Key releases are reported on some platforms
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            sender.send(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            sender.send(Event::Resize(width, height))
                        }
                        Ok(_) => Ok(()),
                        Err(e) => {
                            let _ = sender.send(Event::Failed(e.to_string()));
                            return;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(e) => {
                        let _ = sender.send(Event::Failed(e.to_string()));
                        return;
                    }
                };
                if forwarded.is_err() {
                    return;
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
