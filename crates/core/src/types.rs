use serde::Serialize;

/// Tile id marking a cell that no generation step has assigned yet.
pub const UNSET_TILE: u8 = 255;

/// `data1` value carried by stencil wall tiles.
pub const WALL_ORIENTATION: u8 = 1;

/// `data1` value marking a cell whose `data0` holds an item rather than a decoration.
pub const ITEM_MARKER: u8 = 4;

/// Largest cell count a grid may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// Number of terrain types the adjacency table distributes over.
pub const TERRAIN_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pos {
    pub y: usize,
    pub x: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub tile_id: u8,
    pub data0: u8,
    pub data1: u8,
    pub solid: bool,
    pub deco_under: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self { tile_id: UNSET_TILE, data0: 0, data1: 0, solid: false, deco_under: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MapKind {
    Overworld,
    Dungeon,
}
