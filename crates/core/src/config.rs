//! Generator configuration: grid size, adjacency weights, feature tuning, and id tables.
//!
//! Configuration is validated once, up front. A config that passes [`GeneratorConfig::validate`]
//! cannot make a generation run fail halfway through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mapgen::{AdjacencyTable, DoorSides, EdgePolicy};
use crate::types::{MAX_CELLS, TERRAIN_COUNT, UNSET_TILE};

pub mod names {
    pub const GRASS_A: &str = "grass1";
    pub const GRASS_B: &str = "grass2";
    pub const STONE: &str = "stone1";
    pub const CRACKED_STONE: &str = "stone2";
    pub const WATER: &str = "water1";
    pub const STONE_FLOOR: &str = "stonefloor1";

    pub const GRASS_PATCH: &str = "grass_patch";
    pub const DOOR: &str = "door_sheet";
    pub const TRAPDOOR: &str = "trapdoor_sheet";

    /// Tile names in terrain-index order (the adjacency table's row/column order).
    pub const TERRAIN: [&str; super::TERRAIN_COUNT] = [GRASS_A, GRASS_B, STONE, CRACKED_STONE];
}

const DEFAULT_WIDTH: usize = 16;
const DEFAULT_HEIGHT: usize = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterSettings {
    /// Multiplier from cell coordinates to noise-space coordinates.
    pub coordinate_scale: f64,
    pub frequency: f64,
    /// Cells whose noise value falls below this become water.
    pub threshold: f64,
}

impl Default for WaterSettings {
    fn default() -> Self {
        Self { coordinate_scale: 10.0, frequency: 0.01, threshold: 0.001 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationSettings {
    pub grass_patch_chance: f64,
    pub stone_door_chance: f64,
}

impl Default for DecorationSettings {
    fn default() -> Self {
        Self { grass_patch_chance: 0.3, stone_door_chance: 0.1 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub edge_policy: EdgePolicy,
    pub door_sides: DoorSides,
    pub adjacency: AdjacencyTable,
    pub water: WaterSettings,
    pub decoration: DecorationSettings,
    pub tiles: BTreeMap<String, u8>,
    pub decorations: BTreeMap<String, u8>,
    pub items: Vec<u8>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let tiles = [
            (names::GRASS_A, 0),
            (names::GRASS_B, 1),
            (names::STONE, 2),
            (names::CRACKED_STONE, 3),
            (names::WATER, 4),
            (names::STONE_FLOOR, 5),
        ];
        let decorations = [(names::GRASS_PATCH, 1), (names::DOOR, 2), (names::TRAPDOOR, 3)];
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            edge_policy: EdgePolicy::default(),
            door_sides: DoorSides::default(),
            adjacency: AdjacencyTable::default(),
            water: WaterSettings::default(),
            decoration: DecorationSettings::default(),
            tiles: tiles.iter().map(|&(name, id)| (name.to_string(), id)).collect(),
            decorations: decorations.iter().map(|&(name, id)| (name.to_string(), id)).collect(),
            items: (1..=6).collect(),
        }
    }
}

/// Ids resolved from the name tables, in the shape the generation passes consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileIds {
    /// Tile id for each terrain index.
    pub terrain: [u8; TERRAIN_COUNT],
    pub water: u8,
    pub stone_floor: u8,
    pub grass_patch: u8,
    pub door: u8,
    pub trapdoor: u8,
}

impl TileIds {
    pub fn terrain_index(&self, tile_id: u8) -> Option<usize> {
        self.terrain.iter().position(|&id| id == tile_id)
    }

    pub fn is_grass(&self, tile_id: u8) -> bool {
        tile_id == self.terrain[0] || tile_id == self.terrain[1]
    }

    /// Stone wall tile. Cracked stone does not count.
    pub fn wall(&self) -> u8 {
        self.terrain[2]
    }
}

impl Default for TileIds {
    /// Matches what [`GeneratorConfig::default`] resolves to.
    fn default() -> Self {
        Self {
            terrain: [0, 1, 2, 3],
            water: 4,
            stone_floor: 5,
            grass_patch: 1,
            door: 2,
            trapdoor: 3,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Checks every field and resolves the name tables.
    pub fn validate(&self) -> Result<TileIds, ConfigError> {
        cell_count(self.width, self.height)?;
        self.adjacency.validate()?;
        check_chance("water.threshold", self.water.threshold, f64::NEG_INFINITY)?;
        check_chance("decoration.grass_patch_chance", self.decoration.grass_patch_chance, 0.0)?;
        check_chance("decoration.stone_door_chance", self.decoration.stone_door_chance, 0.0)?;
        if self.items.is_empty() {
            return Err(ConfigError::EmptyItemTable);
        }
        if let Some(index) = self.items.iter().position(|&item| item == 0) {
            return Err(ConfigError::ZeroItemId { index });
        }
        self.resolve_ids()
    }

    fn resolve_ids(&self) -> Result<TileIds, ConfigError> {
        let mut terrain = [0_u8; TERRAIN_COUNT];
        for (slot, name) in terrain.iter_mut().zip(names::TERRAIN) {
            *slot = self.tile(name)?;
        }
        let water = self.tile(names::WATER)?;
        let stone_floor = self.tile(names::STONE_FLOOR)?;

        let mut seen: Vec<(&'static str, u8)> = Vec::with_capacity(TERRAIN_COUNT + 2);
        let resolved = names::TERRAIN
            .into_iter()
            .zip(terrain)
            .chain([(names::WATER, water), (names::STONE_FLOOR, stone_floor)]);
        for (name, id) in resolved {
            if let Some(&(other, _)) = seen.iter().find(|&&(_, taken)| taken == id) {
                return Err(ConfigError::DuplicateTileId { name, other, id });
            }
            seen.push((name, id));
        }

        Ok(TileIds {
            terrain,
            water,
            stone_floor,
            grass_patch: self.decoration_id(names::GRASS_PATCH)?,
            door: self.decoration_id(names::DOOR)?,
            trapdoor: self.decoration_id(names::TRAPDOOR)?,
        })
    }

    fn tile(&self, name: &'static str) -> Result<u8, ConfigError> {
        let id = *self.tiles.get(name).ok_or(ConfigError::MissingTile(name))?;
        if id == UNSET_TILE {
            return Err(ConfigError::ReservedTileId { name, id });
        }
        Ok(id)
    }

    /// Id 0 is the empty `data0` value, so no decoration may use it.
    fn decoration_id(&self, name: &'static str) -> Result<u8, ConfigError> {
        match self.decorations.get(name) {
            None => Err(ConfigError::MissingDecoration(name)),
            Some(0) => Err(ConfigError::ZeroDecorationId(name)),
            Some(&id) => Ok(id),
        }
    }
}

/// Number of cells in a `width` x `height` grid, if that size is allowed.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::ZeroDimension { width, height });
    }
    width
        .checked_mul(height)
        .filter(|&len| len <= MAX_CELLS)
        .ok_or(ConfigError::GridTooLarge { width, height, max: MAX_CELLS })
}

/// Probabilities must lie in `[lower, 1]`; the water threshold is only bounded above.
fn check_chance(name: &'static str, value: f64, lower: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value < lower || value > 1.0 {
        return Err(ConfigError::InvalidChance { name, value });
    }
    Ok(())
}
