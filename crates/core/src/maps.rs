//! Built-in map layouts.

use crate::grid::RawData;
use crate::types::RoomFlags;

const O: u16 = 0;
const V: u16 = RoomFlags::VALID.bits();
const W: u16 = V | RoomFlags::WUMPUS.bits();
const T: u16 = V | RoomFlags::TREASURE.bits();

#[rustfmt::skip]
const DEFAULT_ROOMS: [u16; 42] = [
    O, O, V, T, V, O, O,
    O, V, W, V, V, V, O,
    V, V, V, V, V, W, V,
    V, V, V, V, V, V, V,
    O, V, V, V, V, V, O,
    O, O, V, V, V, O, O,
];

/// The 7x6 cave the game starts in, entered from the bottom row.
pub const DEFAULT: RawData<'static> = RawData {
    width: 7,
    height: 6,
    start_x: 3,
    start_y: 5,
    rooms: &DEFAULT_ROOMS,
};
