//! Procedural tile-map generation split into coherent submodules.

pub mod adjacency;
pub mod features;
pub mod model;
pub mod rooms;

mod generator;
mod grid;
mod noise_field;
mod rng;
mod seed;
#[cfg(test)]
mod test_support;

pub use adjacency::{AdjacencyTable, Direction, EdgePolicy, generate_terrain, sample_weighted};
pub use features::{paint_water, scatter_decorations};
pub use generator::MapGenerator;
pub use grid::{GridSnapshot, TileGrid};
pub use model::{GeneratedMap, MapStats};
pub use noise_field::WaterNoise;
pub use rng::{RandomSource, TileRng};
pub use rooms::{
    DoorSides, DungeonLevel, Exit, ITEM_ATTEMPTS, ItemPlacement, Side, stamp_dungeon_level,
    stamp_empty_room,
};
pub use seed::{noise_seed, terrain_seed};

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::types::MapKind;

pub fn generate_map(
    config: GeneratorConfig,
    seed: u64,
    kind: MapKind,
) -> Result<GeneratedMap, GenError> {
    MapGenerator::new(config, seed)?.generate(kind)
}
