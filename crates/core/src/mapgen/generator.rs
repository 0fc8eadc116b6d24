//! High-level map generation orchestration that composes terrain, features, and stencils.

use log::info;

use crate::config::{GeneratorConfig, TileIds};
use crate::error::GenError;
use crate::types::MapKind;

use super::adjacency::generate_terrain;
use super::features::{paint_water, scatter_decorations};
use super::grid::TileGrid;
use super::model::{GeneratedMap, MapStats};
use super::noise_field::WaterNoise;
use super::rng::{RandomSource, TileRng};
use super::rooms::{stamp_dungeon_level, stamp_empty_room};
use super::seed::{noise_seed, terrain_seed};

pub struct MapGenerator {
    config: GeneratorConfig,
    ids: TileIds,
    seed: u64,
}

impl MapGenerator {
    /// Validates `config` once; generation from a constructed generator cannot hit a
    /// configuration error other than a room too small for the stencil.
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self, GenError> {
        let ids = config.validate()?;
        Ok(Self { config, ids, seed })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn ids(&self) -> &TileIds {
        &self.ids
    }

    pub fn generate(&self, kind: MapKind) -> Result<GeneratedMap, GenError> {
        let mut grid = TileGrid::new(self.config.width, self.config.height)?;
        let mut rng = TileRng::from_seed(terrain_seed(self.seed));

        let stats = match kind {
            MapKind::Overworld => self.populate_overworld(&mut grid, &mut rng)?,
            MapKind::Dungeon => self.populate_dungeon(&mut grid, &mut rng)?,
        };
        info!(
            "generated {kind:?} {}x{} map from seed {} (fingerprint {:016x})",
            grid.width(),
            grid.height(),
            self.seed,
            grid.fingerprint()
        );

        Ok(GeneratedMap { kind, seed: self.seed, grid, stats })
    }

    /// Adjacency sweep, then water, then decorations, over an unset grid.
    pub fn populate_overworld(
        &self,
        grid: &mut TileGrid,
        rng: &mut impl RandomSource,
    ) -> Result<MapStats, GenError> {
        let config = &self.config;
        generate_terrain(grid, rng, &config.adjacency, &self.ids, config.edge_policy)?;

        let noise = WaterNoise::new(noise_seed(self.seed), &config.water);
        let water_cells = paint_water(grid, &noise, &self.ids, &config.water)?;
        let decorations = scatter_decorations(grid, rng, &self.ids, &config.decoration)?;

        Ok(MapStats { water_cells, decorations, ..MapStats::default() })
    }

    /// Empty room stencil, then the trapdoor and items.
    pub fn populate_dungeon(
        &self,
        grid: &mut TileGrid,
        rng: &mut impl RandomSource,
    ) -> Result<MapStats, GenError> {
        let exit = stamp_empty_room(grid, rng, &self.ids, self.config.door_sides)?;
        let level = stamp_dungeon_level(grid, rng, &self.ids, &self.config.items)?;

        Ok(MapStats {
            decorations: 2 + level.items.len(),
            exit: Some(exit),
            level: Some(level),
            ..MapStats::default()
        })
    }
}
