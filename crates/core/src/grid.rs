//! Grid module - owns the room data of one world
//!
//! Rooms are stored in a flat row-major buffer (`y * width + x`).
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use thiserror::Error;

use crate::types::{Pos, RoomFlags};

/// Rectangular raw map buffer accepted by [`Grid::load`].
///
/// `rooms` holds `width * height` raw room bitfields in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawData<'a> {
    pub width: usize,
    pub height: usize,
    pub start_x: usize,
    pub start_y: usize,
    pub rooms: &'a [u16],
}

impl RawData<'_> {
    pub fn start(&self) -> Pos {
        Pos::new(self.start_x as i32, self.start_y as i32)
    }
}

/// Reasons raw map data is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("room buffer holds {len} entries but a {width}x{height} grid needs {}", .width * .height)]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("start position ({x}, {y}) lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("start room ({x}, {y}) is not a valid room")]
    StartNotValid { x: usize, y: usize },
}

/// The room grid - fixed shape after load, per-room flags mutable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of rooms, row-major order (y * width + x)
    rooms: Vec<RoomFlags>,
}

impl Grid {
    /// Build a grid from raw data, validating shape and start position.
    pub fn load(raw: &RawData<'_>) -> Result<Self, LoadError> {
        let RawData {
            width,
            height,
            start_x,
            start_y,
            rooms,
        } = *raw;

        if width.checked_mul(height) != Some(rooms.len()) {
            return Err(LoadError::InvalidDimensions {
                width,
                height,
                len: rooms.len(),
            });
        }
        if start_x >= width || start_y >= height {
            return Err(LoadError::StartOutOfBounds {
                x: start_x,
                y: start_y,
                width,
                height,
            });
        }

        let rooms: Vec<RoomFlags> = rooms.iter().copied().map(RoomFlags::from_bits_retain).collect();
        if !rooms[start_y * width + start_x].is_valid() {
            return Err(LoadError::StartNotValid {
                x: start_x,
                y: start_y,
            });
        }

        Ok(Self {
            width,
            height,
            rooms,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos.x, pos.y).is_some()
    }

    /// Get room flags at (x, y); `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<RoomFlags> {
        self.index(x, y).map(|i| self.rooms[i])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut RoomFlags> {
        self.index(x, y).map(move |i| &mut self.rooms[i])
    }

    pub fn at(&self, pos: Pos) -> Option<RoomFlags> {
        self.get(pos.x, pos.y)
    }

    /// True if (x, y) is in bounds and the room there is VALID
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|room| room.is_valid())
    }

    /// True if (x, y) is in bounds and all of `flags` are set there
    pub fn has(&self, pos: Pos, flags: RoomFlags) -> bool {
        self.at(pos).is_some_and(|room| room.contains(flags))
    }

    pub fn row(&self, y: usize) -> Option<&[RoomFlags]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.rooms[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RoomFlags]> + '_ {
        // `chunks_exact(0)` panics, and a 0-wide grid has no rows anyway.
        self.rooms.chunks_exact(self.width.max(1))
    }

    /// Raw room bitfields in row-major order.
    pub fn to_raw(&self) -> Vec<u16> {
        self.rooms.iter().map(|room| room.bits()).collect()
    }

    /// Textual dump: a header line, then one comma-separated line per row.
    pub fn dump(&self) -> String {
        let mut out = String::from("World data:\n");
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|room| room.bits().to_string()).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }
}
