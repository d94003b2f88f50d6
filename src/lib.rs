//! TUI Wumpus (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_wumpus::{core,input,term,types}` and
//! adds the pieces the binary is made of: the [`game`] driver and the
//! [`map_file`] loader.

pub use tui_wumpus_core as core;
pub use tui_wumpus_input as input;
pub use tui_wumpus_term as term;
pub use tui_wumpus_types as types;

pub mod game;
pub mod map_file;

pub use game::{Control, Game, Phase};
pub use map_file::MapFile;
