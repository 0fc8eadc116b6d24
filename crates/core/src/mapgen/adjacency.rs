//! Terrain synthesis: a row-major sweep where each cell seeds up to three of its
//! still-unset neighbours from a per-terrain adjacency distribution.

use log::{Level, debug, log_enabled, trace};
use serde::{Deserialize, Serialize};

use crate::config::TileIds;
use crate::error::{ConfigError, GenError};
use crate::types::{Pos, TERRAIN_COUNT};

use super::grid::TileGrid;
use super::rng::RandomSource;

/// How many of the four shuffled directions a cell propagates to.
pub const PROPAGATED_DIRECTIONS: usize = 3;

const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Row `t` is the distribution of a new neighbour's terrain given a cell of terrain `t`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyTable(pub [[f64; TERRAIN_COUNT]; TERRAIN_COUNT]);

impl Default for AdjacencyTable {
    fn default() -> Self {
        Self([
            // Grass-A
            [0.75, 0.125, 7.0 * 0.125 / 8.0, 0.125 / 8.0],
            // Grass-B
            [0.125, 0.75, 7.0 * 0.125 / 8.0, 0.125 / 8.0],
            // Stone
            [0.125, 0.125, 0.5, 0.25],
            // Cracked stone
            [0.125, 0.125, 0.5, 0.25],
        ])
    }
}

impl AdjacencyTable {
    pub fn row(&self, terrain: usize) -> &[f64; TERRAIN_COUNT] {
        &self.0[terrain]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (terrain, row) in self.0.iter().enumerate() {
            for (column, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidProbability { terrain, column, value });
                }
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(ConfigError::RowSum { terrain, sum });
            }
        }
        Ok(())
    }
}

/// Which cell counts as the right/bottom neighbour at the grid's far edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// The grid is treated as one flat row-major buffer: the right neighbour of the
    /// last column is the first cell of the next row. Nothing lies below the last row.
    #[default]
    RowWrap,
    /// Neighbours must lie inside the grid.
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];
}

/// Cumulative walk over `row`: stops once the running sum reaches `p` or the last
/// category is reached, so the final category is only ever hit by falling through.
pub fn sample_weighted(row: &[f64; TERRAIN_COUNT], rng: &mut impl RandomSource) -> usize {
    let p = rng.next_unit();
    let mut sum = row[0];
    let mut index = 0;
    while sum < p && index < row.len() - 1 {
        index += 1;
        sum += row[index];
    }
    index
}

pub fn shuffled_directions(rng: &mut impl RandomSource) -> [Direction; 4] {
    let mut directions = Direction::ALL;
    for i in (1..directions.len()).rev() {
        let j = rng.below(i + 1);
        directions.swap(i, j);
    }
    directions
}

pub fn neighbor(
    width: usize,
    height: usize,
    pos: Pos,
    direction: Direction,
    edges: EdgePolicy,
) -> Option<Pos> {
    match direction {
        Direction::Left => (pos.x > 0).then(|| Pos { y: pos.y, x: pos.x - 1 }),
        Direction::Up => (pos.y > 0).then(|| Pos { y: pos.y - 1, x: pos.x }),
        Direction::Down => (pos.y + 1 < height).then(|| Pos { y: pos.y + 1, x: pos.x }),
        Direction::Right => {
            if pos.x + 1 < width {
                Some(Pos { y: pos.y, x: pos.x + 1 })
            } else if edges == EdgePolicy::RowWrap && pos.y + 1 < height {
                Some(Pos { y: pos.y + 1, x: 0 })
            } else {
                None
            }
        }
    }
}

/// Commits a terrain to the neighbour in `direction` if it exists and is unset.
/// Returns whether a tile was written.
pub fn try_generate_neighbor(
    grid: &mut TileGrid,
    rng: &mut impl RandomSource,
    table: &AdjacencyTable,
    ids: &TileIds,
    pos: Pos,
    direction: Direction,
    edges: EdgePolicy,
) -> Result<bool, GenError> {
    let Some(terrain) = ids.terrain_index(grid.tile_id(pos.x, pos.y)?) else {
        return Ok(false);
    };
    let Some(target) = neighbor(grid.width(), grid.height(), pos, direction, edges) else {
        return Ok(false);
    };
    if !grid.is_unset(target.x, target.y)? {
        return Ok(false);
    }
    let chosen = sample_weighted(table.row(terrain), rng);
    grid.set_tile_id(target.x, target.y, ids.terrain[chosen])?;
    Ok(true)
}

/// Fills every unset cell of `grid` with a terrain tile.
pub fn generate_terrain(
    grid: &mut TileGrid,
    rng: &mut impl RandomSource,
    table: &AdjacencyTable,
    ids: &TileIds,
    edges: EdgePolicy,
) -> Result<(), GenError> {
    debug!("adjacency sweep over {}x{} grid ({edges:?})", grid.width(), grid.height());
    let mut seeded = 0_usize;
    let mut propagated = 0_usize;

    for pos in grid.positions() {
        if grid.is_unset(pos.x, pos.y)? {
            let terrain = rng.below(TERRAIN_COUNT);
            grid.set_tile_id(pos.x, pos.y, ids.terrain[terrain])?;
            seeded += 1;
        }
        let directions = shuffled_directions(rng);
        for &direction in &directions[..PROPAGATED_DIRECTIONS] {
            if try_generate_neighbor(grid, rng, table, ids, pos, direction, edges)? {
                propagated += 1;
            }
        }
    }

    if log_enabled!(Level::Trace) {
        let mut counts = [0_usize; TERRAIN_COUNT];
        for cell in grid.cells() {
            if let Some(terrain) = ids.terrain_index(cell.tile_id) {
                counts[terrain] += 1;
            }
        }
        trace!("terrain counts {counts:?}");
    }
    debug!("adjacency sweep done: {seeded} seeded, {propagated} propagated");
    Ok(())
}
