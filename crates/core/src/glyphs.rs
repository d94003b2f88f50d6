//! Box-drawing tables, content symbols and status messages.

use crate::types::Adjacency;

/// Line weight of a room's border. The selected room is drawn double.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStyle {
    Single,
    Double,
}

impl DrawStyle {
    fn column(&self) -> usize {
        match self {
            DrawStyle::Single => 0,
            DrawStyle::Double => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Horizontal,
    LeftVert,
    RightVert,
}

/// Corner glyphs indexed by adjacency code (bit0 top-left .. bit3 bottom-right).
const CORNER_STYLES: [[&str; 2]; 16] = [
    [" ", " "],
    ["┘", "╝"],
    ["└", "╚"],
    ["┴", "╩"],
    ["┐", "╗"],
    ["┤", "╣"],
    ["┼", "╬"],
    ["┼", "╬"],
    ["┌", "╔"],
    ["┼", "╬"],
    ["├", "╠"],
    ["┼", "╬"],
    ["┬", "╦"],
    ["┼", "╬"],
    ["┼", "╬"],
    ["┼", "╬"],
];

const LINE_STYLES: [[&str; 2]; 3] = [["───", "═══"], ["│ ", "║ "], [" │", " ║"]];

pub fn corner_glyph(code: Adjacency, style: DrawStyle) -> &'static str {
    CORNER_STYLES[code.bits() as usize][style.column()]
}

pub fn line_glyph(line: LineStyle, style: DrawStyle) -> &'static str {
    let row = match line {
        LineStyle::Horizontal => 0,
        LineStyle::LeftVert => 1,
        LineStyle::RightVert => 2,
    };
    LINE_STYLES[row][style.column()]
}

/// Glyphs drawn in the middle of a room box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Face,
    Wumpus,
    Key,
    Locked,
    Unknown,
}

impl Symbol {
    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Face => "ʘ",
            Symbol::Wumpus => "ω",
            Symbol::Key => "🔑",
            Symbol::Locked => "▣",
            Symbol::Unknown => "?",
        }
    }
}

/// Status line texts. [`Message::Exit`] goes on the second status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Clear,
    BadMove,
    NearWumpus,
    Lose,
    Win,
    Exit,
}

impl Message {
    pub fn text(&self) -> &'static str {
        match self {
            Message::Clear => "",
            Message::BadMove => "Sorry, you can only move 1 space at a time.",
            Message::NearWumpus => "You hear a wumpus lurking nearby...",
            Message::Lose => "AAAACK! You've been eaten by a wumpus!",
            Message::Win => "You've found the treasure - you win!",
            Message::Exit => "--- Press a key to exit ---",
        }
    }
}
