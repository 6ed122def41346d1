//! # TUI Components
//!
//! Reusable pieces of the terminal interface.
//!
//! Components own their local state and expose plain methods for input and
//! rendering. External data (styling, key hints) comes in as parameters
//! rather than through globals, which keeps dependencies explicit and the
//! components testable without a terminal.
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! └── menu_list.rs   (scrollable, filterable list with a cursor)
//! ```

pub mod menu_list;
pub use menu_list::{Direction, ListEntry, MenuList};
