use std::io;
use std::sync::mpsc::Receiver;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    /// New terminal size in cells.
    Resize { width: u16, height: u16 },
}

/// Where the render loop waits for its next event.
///
/// `Ok(None)` means the source is exhausted and the loop should stop.
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Option<TuiEvent>>;
}

/// Blocking reader over the controlling terminal.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
        loop {
            if let Some(event) = translate(event::read()?) {
                return Ok(Some(event));
            }
        }
    }
}

/// Channel-fed source, used by tests and scripted runs.
impl EventSource for Receiver<TuiEvent> {
    fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
        Ok(self.recv().ok())
    }
}

/// Map a raw crossterm event to the events the menu cares about.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        // Some terminals report releases too; only presses and repeats count
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Some(TuiEvent::Key(key_event))
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize { width, height }),
        _ => None,
    }
}
