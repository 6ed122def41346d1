//! # Core Application Logic
//!
//! This module contains the menu's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Menus (screens)      │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`]: `Screen`, `MenuItem` and the static menu definitions
//! - [`state`]: The `App` struct, the active screen
//! - [`action`]: The `Action` enum and the transition table in `update()`
//! - [`config`]: Optional config file and its resolution

pub mod action;
pub mod config;
pub mod menu;
pub mod state;
