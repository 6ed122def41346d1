//! CozyCode library exports for testing

pub mod core;
pub mod logging;
pub mod tui;
