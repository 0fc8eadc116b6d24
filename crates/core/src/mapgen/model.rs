//! Public data models for generated maps and their placement summaries.

use serde::Serialize;

use crate::types::MapKind;

use super::grid::TileGrid;
use super::rooms::{DungeonLevel, Exit};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MapStats {
    pub water_cells: usize,
    pub decorations: usize,
    pub exit: Option<Exit>,
    pub level: Option<DungeonLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    pub kind: MapKind,
    pub seed: u64,
    pub grid: TileGrid,
    pub stats: MapStats,
}

impl GeneratedMap {
    pub fn fingerprint(&self) -> u64 {
        self.grid.fingerprint()
    }
}
