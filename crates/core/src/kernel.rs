//! Adjacency kernel - validity of a room and its 8 neighbours
//!
//! The kernel is a 3x3 matrix indexed `[row][col]`, where row 0 is the row
//! above the room and col 0 the column to its left. Cells outside the grid
//! count as invalid, so edge rooms resolve to partial borders.

use crate::grid::Grid;
use crate::types::{Adjacency, Pos};

/// One of the four corners of a room's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Origin `(col, row)` of the 2x2 sub-kernel touching this corner.
    fn origin(&self) -> (usize, usize) {
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (1, 0),
            Corner::BottomLeft => (0, 1),
            Corner::BottomRight => (1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Kernel {
    cells: [[bool; 3]; 3],
}

impl Kernel {
    /// Sample validity around `pos`.
    pub fn around(grid: &Grid, pos: Pos) -> Self {
        let mut cells = [[false; 3]; 3];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = grid.is_valid(pos.x + col as i32 - 1, pos.y + row as i32 - 1);
            }
        }
        Self { cells }
    }

    pub fn get(&self, col: usize, row: usize) -> bool {
        self.cells[row][col]
    }

    /// Adjacency code of the 2x2 sub-kernel at `corner`.
    pub fn corner(&self, corner: Corner) -> Adjacency {
        let (col, row) = corner.origin();
        let mut code = Adjacency::empty();
        code.set(Adjacency::TOP_LEFT, self.cells[row][col]);
        code.set(Adjacency::TOP_RIGHT, self.cells[row][col + 1]);
        code.set(Adjacency::BOTTOM_LEFT, self.cells[row + 1][col]);
        code.set(Adjacency::BOTTOM_RIGHT, self.cells[row + 1][col + 1]);
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RawData;

    fn grid(width: usize, height: usize, rooms: &[u16]) -> Grid {
        let start = rooms.iter().position(|&r| r & 1 != 0).unwrap();
        Grid::load(&RawData {
            width,
            height,
            start_x: start % width,
            start_y: start / width,
            rooms,
        })
        .unwrap()
    }

    #[test]
    fn corner_room_clips_outside_cells() {
        let g = grid(2, 2, &[1, 1, 1, 1]);
        let k = Kernel::around(&g, Pos::new(0, 0));
        for i in 0..3 {
            assert!(!k.get(0, i), "left column must be off-grid");
            assert!(!k.get(i, 0), "top row must be off-grid");
        }
        assert!(k.get(1, 1));
        assert!(k.get(2, 1));
        assert!(k.get(1, 2));
        assert!(k.get(2, 2));
    }

    #[test]
    fn bottom_right_room_clips_outside_cells() {
        let g = grid(2, 2, &[1, 1, 1, 1]);
        let k = Kernel::around(&g, Pos::new(1, 1));
        for i in 0..3 {
            assert!(!k.get(2, i));
            assert!(!k.get(i, 2));
        }
        assert!(k.get(0, 0));
        assert!(k.get(1, 1));
    }

    #[test]
    fn interior_room_sees_all_neighbours() {
        let g = grid(3, 3, &[1, 0, 1, 0, 1, 0, 1, 0, 1]);
        let k = Kernel::around(&g, Pos::new(1, 1));
        assert!(k.get(0, 0) && k.get(2, 0) && k.get(0, 2) && k.get(2, 2));
        assert!(!k.get(1, 0) && !k.get(0, 1) && !k.get(2, 1) && !k.get(1, 2));
    }

    #[test]
    fn corner_codes_use_their_own_sub_kernel() {
        let g = grid(1, 1, &[1]);
        let k = Kernel::around(&g, Pos::new(0, 0));
        // Only the centre is valid; each corner sees it from a different side.
        assert_eq!(k.corner(Corner::TopLeft), Adjacency::BOTTOM_RIGHT);
        assert_eq!(k.corner(Corner::TopRight), Adjacency::BOTTOM_LEFT);
        assert_eq!(k.corner(Corner::BottomLeft), Adjacency::TOP_RIGHT);
        assert_eq!(k.corner(Corner::BottomRight), Adjacency::TOP_LEFT);
    }

    #[test]
    fn every_room_of_a_ragged_grid_is_sampled_safely() {
        let rooms = [0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1];
        let g = grid(4, 3, &rooms);
        for y in 0..3 {
            for x in 0..4 {
                let k = Kernel::around(&g, Pos::new(x, y));
                assert_eq!(k.get(1, 1), g.is_valid(x, y));
            }
        }
    }
}
