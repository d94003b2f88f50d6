//! JSON map files.
//!
//! ```json
//! { "width": 3, "height": 1, "start": [0, 0], "rooms": [1, 1, 17] }
//! ```
//!
//! `rooms` holds the raw room bitfields in row-major order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{Grid, RawData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapFile {
    pub width: usize,
    pub height: usize,
    /// `[x, y]` of the starting room.
    pub start: [usize; 2],
    pub rooms: Vec<u16>,
}

impl MapFile {
    /// Parse and validate a map.
    pub fn from_json(text: &str) -> Result<Self> {
        let map: MapFile = serde_json::from_str(text).context("malformed map JSON")?;
        Grid::load(&map.raw()).context("map rejected")?;
        Ok(map)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read map file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in map file {}", path.display()))
    }

    pub fn raw(&self) -> RawData<'_> {
        RawData {
            width: self.width,
            height: self.height,
            start_x: self.start[0],
            start_y: self.start[1],
            rooms: &self.rooms,
        }
    }
}
