//! Error taxonomy shared by grid access, configuration, and generation entry points.

use thiserror::Error;

/// Rejected configuration. Raised before any cell is touched.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("grid of {width}x{height} cells exceeds the {max} cell limit")]
    GridTooLarge { width: usize, height: usize, max: usize },
    #[error("room stencil needs at least 3x3 cells, got {width}x{height}")]
    RoomTooSmall { width: usize, height: usize },
    #[error("adjacency row {terrain} sums to {sum}, expected 1.0")]
    RowSum { terrain: usize, sum: f64 },
    #[error("adjacency row {terrain} has invalid probability {value} at column {column}")]
    InvalidProbability { terrain: usize, column: usize, value: f64 },
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidChance { name: &'static str, value: f64 },
    #[error("tile table has no entry for '{0}'")]
    MissingTile(&'static str),
    #[error("decoration table has no entry for '{0}'")]
    MissingDecoration(&'static str),
    #[error("tile '{name}' uses the reserved unset id {id}")]
    ReservedTileId { name: &'static str, id: u8 },
    #[error("tile '{name}' reuses id {id}, already taken by '{other}'")]
    DuplicateTileId { name: &'static str, other: &'static str, id: u8 },
    #[error("decoration '{0}' uses id 0, which marks an empty cell")]
    ZeroDecorationId(&'static str),
    #[error("item table entry {index} is 0, which marks an empty cell")]
    ZeroItemId { index: usize },
    #[error("item table is empty")]
    EmptyItemTable,
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum GenError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange { x: usize, y: usize, width: usize, height: usize },
}
