use anyhow::{Result, ensure};
use clap::Parser;
use log::{debug, info};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tilegen::mapgen::{EdgePolicy, ITEM_ATTEMPTS};
use tilegen::{GeneratedMap, GeneratorConfig, MapGenerator, MapKind, WALL_ORIENTATION};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    runs: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn dimension(rng: &mut ChaCha8Rng) -> usize {
    3 + rng.next_u64() as usize % 46
}

fn check_overworld(generator: &MapGenerator, map: &GeneratedMap) -> Result<()> {
    let ids = generator.ids();
    ensure!(map.grid.count_unset() == 0, "seed {}: unset cells remain", map.seed);
    let mut water = 0;
    for cell in map.grid.cells() {
        if cell.tile_id == ids.water {
            ensure!(cell.solid, "seed {}: water cell is not solid", map.seed);
            water += 1;
        } else {
            ensure!(
                ids.terrain_index(cell.tile_id).is_some(),
                "seed {}: tile {} is not terrain",
                map.seed,
                cell.tile_id
            );
        }
    }
    ensure!(water == map.stats.water_cells, "seed {}: water count mismatch", map.seed);
    Ok(())
}

fn check_dungeon(generator: &MapGenerator, map: &GeneratedMap) -> Result<()> {
    let ids = generator.ids();
    ensure!(map.grid.count_unset() == 0, "seed {}: unset cells remain", map.seed);
    for pos in map.grid.positions() {
        let cell = map.grid.cell(pos.x, pos.y)?;
        if map.grid.is_border(pos) {
            ensure!(cell.tile_id == ids.wall(), "seed {}: border gap at {pos:?}", map.seed);
            ensure!(
                cell.data1 == WALL_ORIENTATION,
                "seed {}: wall at {pos:?} lost its orientation",
                map.seed
            );
        } else {
            ensure!(cell.tile_id == ids.stone_floor, "seed {}: interior at {pos:?}", map.seed);
        }
    }
    let trapdoors = map.grid.cells().iter().filter(|cell| cell.data0 == ids.trapdoor).count();
    let items = map.stats.level.as_ref().map_or(0, |level| level.items.len());
    ensure!(trapdoors >= 1, "seed {}: no trapdoor", map.seed);
    ensure!(items <= ITEM_ATTEMPTS, "seed {}: {items} items placed", map.seed);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let config = GeneratorConfig {
            width: dimension(&mut rng),
            height: dimension(&mut rng),
            edge_policy: choose(&mut rng, &[EdgePolicy::RowWrap, EdgePolicy::Strict]),
            ..GeneratorConfig::default()
        };
        let seed = rng.next_u64();
        debug!("run {run}: {}x{} seed {seed}", config.width, config.height);

        let generator = MapGenerator::new(config, seed)?;
        let overworld = generator.generate(MapKind::Overworld)?;
        check_overworld(&generator, &overworld)?;
        ensure!(
            generator.generate(MapKind::Overworld)? == overworld,
            "seed {seed}: regeneration diverged"
        );

        let dungeon = generator.generate(MapKind::Dungeon)?;
        check_dungeon(&generator, &dungeon)?;
    }

    info!("{} runs checked", args.runs);
    println!("Fuzzing completed successfully.");
    Ok(())
}
