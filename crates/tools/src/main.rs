use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tilegen::{GeneratorConfig, MapGenerator, MapKind};

mod render;

static RUNTIME_SEED_CALLS: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Overworld,
    Dungeon,
}

impl From<KindArg> for MapKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Overworld => MapKind::Overworld,
            KindArg::Dungeon => MapKind::Dungeon,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML generator config; built-in defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Map seed; a fresh one is generated when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(short, long, value_enum, default_value_t = KindArg::Overworld)]
    kind: KindArg,
    /// Overrides the configured width
    #[arg(long)]
    width: Option<usize>,
    /// Overrides the configured height
    #[arg(long)]
    height: Option<usize>,
    #[arg(short, long, value_enum, default_value_t = Format::Ascii)]
    format: Format,
}

fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    GeneratorConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Seed for runs without `--seed`: wall clock, process id and a call counter,
/// spread through ChaCha's seed expansion.
fn runtime_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    let call = RUNTIME_SEED_CALLS.fetch_add(1, Ordering::Relaxed);
    let entropy = nanos ^ (u64::from(process::id()) << 32) ^ call.rotate_left(48);
    ChaCha8Rng::seed_from_u64(entropy).next_u64()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    let seed = args.seed.unwrap_or_else(|| {
        let seed = runtime_seed();
        info!("no seed given, generated {seed}");
        seed
    });

    let generator = MapGenerator::new(config, seed).context("Invalid generator config")?;
    let map = generator.generate(args.kind.into()).context("Map generation failed")?;

    match args.format {
        Format::Ascii => {
            print!("{}", render::ascii(&map, generator.ids()));
            println!("Seed: {}", map.seed);
            println!("Fingerprint: {:016x}", map.fingerprint());
        }
        Format::Json => {
            println!("{}", render::json(&map).context("Failed to serialize map")?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use tilegen::mapgen::EdgePolicy;

    #[test]
    fn no_config_path_uses_defaults() {
        let config = load_config(None).expect("defaults need no file");
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn config_file_is_read_and_parsed() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "width = 12\nedge_policy = \"strict\"").expect("write config");

        let config = load_config(Some(file.path())).expect("config should load");
        assert_eq!(config.width, 12);
        assert_eq!(config.edge_policy, EdgePolicy::Strict);
    }

    #[test]
    fn unreadable_and_malformed_configs_report_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.toml");
        let err = load_config(Some(&missing)).expect_err("missing file");
        assert!(format!("{err:#}").contains("missing.toml"));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "width = [").expect("write config");
        let err = load_config(Some(&broken)).expect_err("malformed file");
        assert!(format!("{err:#}").contains("Failed to parse"));
    }

    #[test]
    fn runtime_seeds_differ_between_calls() {
        let first = runtime_seed();
        let second = runtime_seed();
        assert_ne!(first, second, "runtime seeds should vary per call");
    }

    #[test]
    fn cli_flags_parse_into_args() {
        let args = Args::try_parse_from([
            "tilegen", "--seed", "9", "--kind", "dungeon", "--width", "7", "--format", "json",
        ])
        .expect("valid flags");
        assert_eq!(args.seed, Some(9));
        assert_eq!(MapKind::from(args.kind), MapKind::Dungeon);
        assert_eq!(args.width, Some(7));
        assert_eq!(args.height, None);
        assert_eq!(args.format, Format::Json);
    }
}
