//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the menu,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! The loop is single-threaded and blocks on its [`EventSource`] between
//! events. Each event is handled to completion and followed by exactly one
//! redraw; nothing else wakes the loop, so an idle menu costs nothing.

pub mod components;
pub mod event;
pub mod keymap;
pub mod navigation;
pub mod theme;
pub mod ui;

use log::{debug, info};
use std::io;
use thiserror::Error;

use crate::core::action::Effect;
use crate::core::config::ResolvedConfig;
use crate::tui::event::{EventSource, TerminalEvents, TuiEvent};
use crate::tui::navigation::Navigator;
use crate::tui::theme::Theme;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("unable to start terminal UI: {0}")]
    Setup(#[source] io::Error),
    #[error("unable to draw frame: {0}")]
    Draw(#[source] io::Error),
    #[error("unable to read terminal events: {0}")]
    Input(#[source] io::Error),
}

/// Why the render loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// Quit key or the Exit menu entry.
    Quit,
    /// The event source ran dry.
    InputClosed,
}

/// Drive the menu until it quits.
///
/// `draw` is called once before the first event and once after every
/// handled event that does not end the loop.
pub fn run_loop<S, D>(nav: &mut Navigator, events: &mut S, mut draw: D) -> Result<LoopExit, TuiError>
where
    S: EventSource,
    D: FnMut(&Navigator) -> io::Result<()>,
{
    draw(nav).map_err(TuiError::Draw)?;

    while let Some(event) = events.next_event().map_err(TuiError::Input)? {
        if nav.handle_event(event) == Effect::Quit {
            info!("Leaving menu from {:?}", nav.screen());
            return Ok(LoopExit::Quit);
        }
        draw(nav).map_err(TuiError::Draw)?;
    }

    info!("Event source closed");
    Ok(LoopExit::InputClosed)
}

pub fn run(config: &ResolvedConfig) -> Result<LoopExit, TuiError> {
    let theme = Theme::from_config(config);
    let mut nav = Navigator::new(&theme);

    let mut terminal = start_terminal(ratatui::try_init, ratatui::restore)?;
    let result = run_in_terminal(&mut terminal, &mut nav, &theme);
    ratatui::restore();
    result
}

/// A failed init may already have switched to raw mode, so `restore` runs
/// on the error path too.
fn start_terminal<T>(
    init: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> Result<T, TuiError> {
    init().map_err(|e| {
        restore();
        TuiError::Setup(e)
    })
}

fn run_in_terminal(
    terminal: &mut ratatui::DefaultTerminal,
    nav: &mut Navigator,
    theme: &Theme,
) -> Result<LoopExit, TuiError> {
    // The list needs real dimensions before the first frame
    let size = terminal.size().map_err(TuiError::Setup)?;
    info!("Terminal size {}x{}", size.width, size.height);
    nav.handle_event(TuiEvent::Resize {
        width: size.width,
        height: size.height,
    });

    run_loop(nav, &mut TerminalEvents, |nav| {
        terminal.draw(|f| ui::draw_ui(f, nav, theme))?;
        debug!("Drew {:?}", nav.screen());
        Ok(())
    })
}
