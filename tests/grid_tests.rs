//! Grid loading tests against the public API.

use tui_wumpus::core::{maps, Grid, Kernel, LoadError, RawData};
use tui_wumpus::types::{Pos, RoomFlags};

#[test]
fn test_default_map_round_trips() {
    let grid = Grid::load(&maps::DEFAULT).unwrap();
    assert_eq!(grid.to_raw(), maps::DEFAULT.rooms);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let expected = maps::DEFAULT.rooms[y * grid.width() + x];
            assert_eq!(
                grid.get(x as i32, y as i32).map(|r| r.bits()),
                Some(expected),
                "room ({}, {})",
                x,
                y
            );
        }
    }
}

#[test]
fn test_arbitrary_bits_round_trip() {
    let rooms = [1, 0xFFFF, 0x8001, 0, 0x0101, 255];
    let raw = RawData {
        width: 2,
        height: 3,
        start_x: 0,
        start_y: 0,
        rooms: &rooms,
    };
    let grid = Grid::load(&raw).unwrap();
    assert_eq!(grid.to_raw(), rooms);
    assert!(grid.has(Pos::new(1, 0), RoomFlags::all()));
}

#[test]
fn test_zero_sized_map_is_rejected() {
    let raw = RawData {
        width: 0,
        height: 0,
        start_x: 0,
        start_y: 0,
        rooms: &[],
    };
    assert!(matches!(
        Grid::load(&raw),
        Err(LoadError::StartOutOfBounds { .. })
    ));
}

#[test]
fn test_invalid_dimensions_message() {
    let raw = RawData {
        width: 4,
        height: 4,
        start_x: 0,
        start_y: 0,
        rooms: &[1; 15],
    };
    let err = Grid::load(&raw).unwrap_err();
    assert_eq!(
        err.to_string(),
        "room buffer holds 15 entries but a 4x4 grid needs 16"
    );
}

#[test]
fn test_kernel_never_leaves_the_grid() {
    let grid = Grid::load(&maps::DEFAULT).unwrap();
    for y in -1..=grid.height() as i32 {
        for x in -1..=grid.width() as i32 {
            let kernel = Kernel::around(&grid, Pos::new(x, y));
            for row in 0..3 {
                for col in 0..3 {
                    let (gx, gy) = (x + col as i32 - 1, y + row as i32 - 1);
                    assert_eq!(kernel.get(col, row), grid.is_valid(gx, gy));
                    if gx < 0 || gy < 0 || gx >= 7 || gy >= 6 {
                        assert!(!kernel.get(col, row));
                    }
                }
            }
        }
    }
}
