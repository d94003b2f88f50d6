//! Core world logic - the room grid, cursors and the box renderer
//!
//! This crate contains the rules of the game and the incremental renderer
//! that turns the grid into box-drawing glyphs. All output goes through the
//! [`Terminal`] trait, so the crate performs no I/O of its own and runs
//! headless in tests.
//!
//! # Module Structure
//!
//! - [`grid`]: room storage and raw map loading
//! - [`kernel`]: 3x3 validity sampling used to pick corner glyphs
//! - [`glyphs`]: box-drawing tables, symbols and status messages
//! - [`world`]: selection/move state machine and room rendering
//! - [`maps`]: the built-in map
//! - [`terminal`]: the output seam
//!
//! # Example
//!
//! ```
//! use std::io;
//! use tui_wumpus_core::{MoveOutcome, Terminal, World};
//! use tui_wumpus_core::types::Direction;
//!
//! struct Null;
//!
//! impl Terminal for Null {
//!     fn set_cursor_pos(&mut self, _col: u16, _row: u16) {}
//!     fn output(&mut self, _text: &str, _newline: bool) {}
//!     fn clear_screen(&mut self) {}
//!     fn do_refresh(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut world = World::new(Null);
//! world.render().unwrap();
//!
//! // The selection moves first; the player follows on commit.
//! assert!(world.move_selection(Direction::Up));
//! assert_eq!(world.commit_move(), MoveOutcome::Clear);
//! assert!(!world.is_game_over());
//! ```

pub mod glyphs;
pub mod grid;
pub mod kernel;
pub mod maps;
pub mod terminal;
pub mod world;

pub use tui_wumpus_types as types;

pub use glyphs::{DrawStyle, LineStyle, Message, Symbol};
pub use grid::{Grid, LoadError, RawData};
pub use kernel::{Corner, Kernel};
pub use terminal::Terminal;
pub use world::{MoveOutcome, World};
