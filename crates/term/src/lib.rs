//! Terminal backend for the world renderer.
//!
//! The world draws through the [`core::Terminal`] trait; this crate provides
//! the implementation used by the game:
//!
//! - [`fb`]: a framebuffer of styled character cells
//! - [`screen`]: cursor-addressed writes into the framebuffer
//! - [`renderer`]: crossterm output with full redraws and changed-run diffs

pub mod fb;
pub mod renderer;
pub mod screen;

pub use tui_wumpus_core as core;
pub use tui_wumpus_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::Screen;
