//! Screen: the world's [`Terminal`], backed by a framebuffer.
//!
//! Writes land in the framebuffer at the cursor. `do_refresh` pushes the
//! framebuffer to an attached [`TerminalRenderer`]; a headless screen (tests,
//! benches, `--dump`) keeps everything in memory.

use std::io;

use crate::core::Terminal;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::renderer::TerminalRenderer;

const SELECTED: CellStyle = CellStyle::fg(Rgb::new(240, 220, 80)).bold();
const PLAYER: CellStyle = CellStyle::fg(Rgb::new(100, 220, 120)).bold();
const WUMPUS_MARK: CellStyle = CellStyle::fg(Rgb::new(220, 80, 80));
const UNKNOWN_MARK: CellStyle = CellStyle::fg(Rgb::new(80, 220, 220));
const LOCKED: CellStyle = CellStyle::fg(Rgb::new(200, 120, 220));

/// Colour for a glyph the world draws.
fn glyph_style(ch: char) -> CellStyle {
    match ch {
        '═' | '║' | '╔' | '╗' | '╚' | '╝' | '╠' | '╣' | '╦' | '╩' | '╬' => SELECTED,
        'ʘ' => PLAYER,
        'ω' => WUMPUS_MARK,
        '?' => UNKNOWN_MARK,
        '▣' => LOCKED,
        _ => CellStyle::default(),
    }
}

pub struct Screen {
    fb: FrameBuffer,
    col: u16,
    row: u16,
    renderer: Option<TerminalRenderer>,
}

impl Screen {
    /// An in-memory screen with no terminal attached.
    pub fn headless(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            col: 0,
            row: 0,
            renderer: None,
        }
    }

    /// A screen that flushes to `renderer` on refresh.
    ///
    /// The caller is responsible for `enter`/`exit` on the renderer.
    pub fn with_renderer(width: u16, height: u16, renderer: TerminalRenderer) -> Self {
        Self {
            renderer: Some(renderer),
            ..Self::headless(width, height)
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn cursor(&self) -> (u16, u16) {
        (self.col, self.row)
    }

    pub fn renderer_mut(&mut self) -> Option<&mut TerminalRenderer> {
        self.renderer.as_mut()
    }

    /// Text of one screen row with trailing blanks trimmed.
    pub fn line(&self, row: u16) -> String {
        self.fb.row_text(row).trim_end().to_string()
    }

    /// The whole screen, one trimmed line per row.
    pub fn text(&self) -> String {
        (0..self.fb.height())
            .map(|row| self.line(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn char_at(&self, col: u16, row: u16) -> Option<char> {
        self.fb.get(col, row).map(|cell| cell.ch)
    }

    /// Blank the screen at a new size and force a full redraw next refresh.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.fb.resize(width, height);
        self.col = 0;
        self.row = 0;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.invalidate();
        }
    }
}

impl Terminal for Screen {
    fn set_cursor_pos(&mut self, col: u16, row: u16) {
        self.col = col;
        self.row = row;
    }

    fn output(&mut self, text: &str, newline: bool) {
        for ch in text.chars() {
            if ch == '\n' {
                self.col = 0;
                self.row = self.row.saturating_add(1);
                continue;
            }
            self.fb.put_char(self.col, self.row, ch, glyph_style(ch));
            self.col = self.col.saturating_add(1);
        }
        if newline {
            self.col = 0;
            self.row = self.row.saturating_add(1);
        }
    }

    fn clear_screen(&mut self) {
        self.fb.clear(Cell::default());
        self.col = 0;
        self.row = 0;
    }

    fn do_refresh(&mut self) -> io::Result<()> {
        match self.renderer.as_mut() {
            Some(renderer) => renderer
                .draw(&self.fb)
                .map_err(|err| io::Error::other(err.to_string())),
            None => Ok(()),
        }
    }
}
