pub mod config;
pub mod error;
pub mod mapgen;
pub mod types;

pub use config::{DecorationSettings, GeneratorConfig, TileIds, WaterSettings};
pub use error::{ConfigError, GenError};
pub use mapgen::{GeneratedMap, GridSnapshot, MapGenerator, MapStats, TileGrid, generate_map};
pub use types::*;
