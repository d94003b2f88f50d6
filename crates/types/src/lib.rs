//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (world logic, terminal rendering, key mapping).
//!
//! # Screen Geometry
//!
//! Rooms are drawn as 5x3 character boxes that share their borders with
//! neighbouring rooms, so each room advances the layout by:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROOM_COL_STRIDE` | 4 | Terminal columns per room |
//! | `ROOM_ROW_STRIDE` | 2 | Terminal rows per room |
//! | `MESSAGE_WIDTH` | 80 | Status lines are padded to this width |
//! | `POLL_MS` | 10 | Driver input poll interval |
//!
//! # Examples
//!
//! ```
//! use tui_wumpus_types::{Direction, GameAction, Pos, RoomFlags};
//!
//! let room = RoomFlags::VALID | RoomFlags::TREASURE;
//! assert!(room.contains(RoomFlags::VALID));
//!
//! let start = Pos::new(3, 5);
//! assert_eq!(start.step(Direction::Up), Pos::new(3, 4));
//! assert_eq!(start.manhattan(Pos::new(3, 4)), 1);
//!
//! assert_eq!(GameAction::from_str("move"), Some(GameAction::Move));
//! ```

use bitflags::bitflags;

/// Terminal columns advanced per room (box width minus the shared border)
pub const ROOM_COL_STRIDE: u16 = 4;

/// Terminal rows advanced per room (box height minus the shared border)
pub const ROOM_ROW_STRIDE: u16 = 2;

/// Status messages are space-padded to this many columns
pub const MESSAGE_WIDTH: usize = 80;

/// Input poll interval of the game driver in milliseconds
pub const POLL_MS: u64 = 10;

bitflags! {
    /// Properties of a single room.
    ///
    /// Raw map data stores these as `u16`. Bits outside the named set are
    /// retained so a loaded map dumps back exactly as it was given.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RoomFlags: u16 {
        /// The room exists and can be selected/entered
        const VALID = 1 << 0;
        /// Hazard: entering loses the game
        const WUMPUS = 1 << 1;
        const KEY = 1 << 2;
        const LOCKED = 1 << 3;
        /// Reward: entering wins the game
        const TREASURE = 1 << 4;
        const DOOR = 1 << 5;
        /// Player annotation: suspected wumpus
        const MARK_WUMPUS = 1 << 6;
        /// Player annotation: uncertain
        const MARK_UNKNOWN = 1 << 7;
    }
}

impl RoomFlags {
    /// Both player marks; at most one of them is ever set on a room.
    pub const MARKS: RoomFlags = RoomFlags::MARK_WUMPUS.union(RoomFlags::MARK_UNKNOWN);

    pub fn is_valid(&self) -> bool {
        self.contains(RoomFlags::VALID)
    }
}

bitflags! {
    /// Which cells of a 2x2 sub-kernel are valid rooms.
    ///
    /// The resulting 4-bit code (0-15) indexes the corner glyph table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Adjacency: u8 {
        const TOP_LEFT = 1 << 0;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_LEFT = 1 << 2;
        const BOTTOM_RIGHT = 1 << 3;
    }
}

/// Orthogonal selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid delta `(dx, dy)`; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A grid coordinate. Signed so neighbours of edge rooms can be probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The neighbouring coordinate one step in `dir` (may be off-grid).
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// Manhattan distance between two coordinates
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wumpus_types::Pos;
    ///
    /// assert_eq!(Pos::new(0, 0).manhattan(Pos::new(2, 3)), 5);
    /// assert_eq!(Pos::new(4, 1).manhattan(Pos::new(3, 1)), 1);
    /// ```
    pub fn manhattan(&self, other: Pos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Player actions dispatched by the driver to the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the selection one room in a direction
    Select(Direction),
    /// Commit: walk into the selected room
    Move,
    /// Toggle the "wumpus here" mark on the selected room
    ToggleWumpus,
    /// Toggle the "unknown" mark on the selected room
    ToggleUnknown,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wumpus_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("selectUp"), Some(GameAction::Select(Direction::Up)));
    /// assert_eq!(GameAction::from_str("toggleWumpus"), Some(GameAction::ToggleWumpus));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "selectup" => Some(GameAction::Select(Direction::Up)),
            "selectdown" => Some(GameAction::Select(Direction::Down)),
            "selectleft" => Some(GameAction::Select(Direction::Left)),
            "selectright" => Some(GameAction::Select(Direction::Right)),
            "move" => Some(GameAction::Move),
            "togglewumpus" => Some(GameAction::ToggleWumpus),
            "toggleunknown" => Some(GameAction::ToggleUnknown),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(Direction::Up) => "selectUp",
            GameAction::Select(Direction::Down) => "selectDown",
            GameAction::Select(Direction::Left) => "selectLeft",
            GameAction::Select(Direction::Right) => "selectRight",
            GameAction::Move => "move",
            GameAction::ToggleWumpus => "toggleWumpus",
            GameAction::ToggleUnknown => "toggleUnknown",
        }
    }
}
