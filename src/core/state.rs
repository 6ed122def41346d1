//! # Application State
//!
//! Core navigation state. This module contains domain logic only -
//! no TUI-specific types. The list widget for the active screen lives in
//! the `tui` module.
//!
//! ```text
//! App
//! └── screen: Screen    // active menu level
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::menu::Screen;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct App {
    pub screen: Screen,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }
}
