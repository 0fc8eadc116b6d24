//! Passes layered over generated terrain: noise-driven water and scattered decorations.

use log::debug;

use crate::config::{DecorationSettings, TileIds, WaterSettings};
use crate::error::GenError;

use super::grid::TileGrid;
use super::noise_field::WaterNoise;
use super::rng::RandomSource;

/// Turns every cell whose noise value is below the threshold into solid water.
/// Returns the number of cells converted.
pub fn paint_water(
    grid: &mut TileGrid,
    noise: &WaterNoise,
    ids: &TileIds,
    settings: &WaterSettings,
) -> Result<usize, GenError> {
    let mut converted = 0;
    for pos in grid.positions() {
        if noise.sample(pos.x, pos.y) < settings.threshold {
            grid.set_tile_id(pos.x, pos.y, ids.water)?;
            grid.set_solid(pos.x, pos.y, true)?;
            converted += 1;
        }
    }
    debug!("water pass converted {converted} cells");
    Ok(converted)
}

/// Grass may get a grass patch (`deco_under = false`), stone walls a door
/// (`deco_under = true`). Only grass and stone cells consume a roll.
/// Returns the number of decorations placed.
pub fn scatter_decorations(
    grid: &mut TileGrid,
    rng: &mut impl RandomSource,
    ids: &TileIds,
    settings: &DecorationSettings,
) -> Result<usize, GenError> {
    let mut placed = 0;
    for pos in grid.positions() {
        let tile_id = grid.tile_id(pos.x, pos.y)?;
        let (decoration, chance, under) = if ids.is_grass(tile_id) {
            (ids.grass_patch, settings.grass_patch_chance, false)
        } else if tile_id == ids.wall() {
            (ids.door, settings.stone_door_chance, true)
        } else {
            continue;
        };
        if rng.next_unit() < chance {
            grid.set_data0(pos.x, pos.y, decoration)?;
            grid.set_deco_under(pos.x, pos.y, under)?;
            placed += 1;
        }
    }
    debug!("decoration pass placed {placed} decorations");
    Ok(placed)
}
