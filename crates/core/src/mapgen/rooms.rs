//! Hand-authored dungeon room stencils: walled floor with one exit door, plus the
//! level-exit trapdoor and scattered items stamped on top.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::TileIds;
use crate::error::{ConfigError, GenError};
use crate::types::{ITEM_MARKER, Pos, WALL_ORIENTATION};

use super::grid::TileGrid;
use super::rng::RandomSource;

/// Item placement attempts per level. Collisions are not retried.
pub const ITEM_ATTEMPTS: usize = 3;

/// How the fourth exit-side roll is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorSides {
    /// Rolls 2 and 3 both land on the left wall; the right wall never gets the door.
    #[default]
    Legacy,
    /// Roll 3 lands on the right wall.
    Distinct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Exit {
    pub side: Side,
    pub pos: Pos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ItemPlacement {
    pub item: u8,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DungeonLevel {
    pub trapdoor: Pos,
    pub items: Vec<ItemPlacement>,
}

fn check_room_size(grid: &TileGrid) -> Result<(), GenError> {
    if grid.width() < 3 || grid.height() < 3 {
        return Err(ConfigError::RoomTooSmall { width: grid.width(), height: grid.height() }.into());
    }
    Ok(())
}

/// Floors the interior, walls the outer ring, and cuts one door into a random side.
pub fn stamp_empty_room(
    grid: &mut TileGrid,
    rng: &mut impl RandomSource,
    ids: &TileIds,
    door_sides: DoorSides,
) -> Result<Exit, GenError> {
    check_room_size(grid)?;
    let (width, height) = (grid.width(), grid.height());

    for pos in grid.positions() {
        if grid.is_border(pos) {
            grid.set_tile_id(pos.x, pos.y, ids.wall())?;
            grid.set_data1(pos.x, pos.y, WALL_ORIENTATION)?;
        } else {
            grid.set_tile_id(pos.x, pos.y, ids.stone_floor)?;
        }
    }

    let side = match rng.below(4) {
        0 => Side::Top,
        1 => Side::Bottom,
        2 => Side::Left,
        _ => match door_sides {
            DoorSides::Legacy => Side::Left,
            DoorSides::Distinct => Side::Right,
        },
    };
    let pos = match side {
        Side::Top => Pos { y: 0, x: rng.range(1, width - 1) },
        Side::Bottom => Pos { y: height - 1, x: rng.range(1, width - 1) },
        Side::Left => Pos { y: rng.range(1, height - 1), x: 0 },
        Side::Right => Pos { y: rng.range(1, height - 1), x: width - 1 },
    };
    grid.set_data0(pos.x, pos.y, ids.door)?;
    grid.set_deco_under(pos.x, pos.y, true)?;

    debug!("room stencil {width}x{height}: door on {side:?} at {pos:?}");
    Ok(Exit { side, pos })
}

/// Places the trapdoor, then up to [`ITEM_ATTEMPTS`] items, on random interior cells.
/// An item whose cell already carries a decoration is dropped.
pub fn stamp_dungeon_level(
    grid: &mut TileGrid,
    rng: &mut impl RandomSource,
    ids: &TileIds,
    items: &[u8],
) -> Result<DungeonLevel, GenError> {
    check_room_size(grid)?;
    if items.is_empty() {
        return Err(ConfigError::EmptyItemTable.into());
    }
    let (width, height) = (grid.width(), grid.height());

    let x = rng.range(1, width - 1);
    let y = rng.range(1, height - 1);
    let trapdoor = Pos { y, x };
    grid.set_data0(trapdoor.x, trapdoor.y, ids.trapdoor)?;
    grid.set_deco_under(trapdoor.x, trapdoor.y, true)?;

    let mut placed = Vec::with_capacity(ITEM_ATTEMPTS);
    for attempt in 0..ITEM_ATTEMPTS {
        let x = rng.range(1, width - 1);
        let y = rng.range(1, height - 1);
        if grid.data0(x, y)? != 0 {
            debug!("item attempt {attempt} hit an occupied cell at ({x}, {y}); skipped");
            continue;
        }
        let item = items[rng.below(items.len())];
        grid.set_data0(x, y, item)?;
        grid.set_data1(x, y, ITEM_MARKER)?;
        placed.push(ItemPlacement { item, pos: Pos { y, x } });
    }

    debug!("dungeon level: trapdoor at {trapdoor:?}, {} items placed", placed.len());
    Ok(DungeonLevel { trapdoor, items: placed })
}
