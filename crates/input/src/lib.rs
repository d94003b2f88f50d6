//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values and
//! classifies the quit and navigation keys the driver treats specially.

pub mod map;

pub use tui_wumpus_types as types;

pub use map::{handle_key_event, is_navigation_key, should_quit};
