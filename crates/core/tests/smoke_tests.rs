use tilegen::mapgen::{DoorSides, EdgePolicy, Side};
use tilegen::{
    ConfigError, GenError, GeneratorConfig, ITEM_MARKER, MapKind, TileIds, UNSET_TILE,
    generate_map,
};

#[test]
fn test_smoke_overworld_from_toml_config() {
    let config = GeneratorConfig::from_toml_str(
        r#"
        width = 30
        height = 20
        edge_policy = "strict"
        items = [7, 8]

        [water]
        threshold = -0.2

        [tiles]
        grass1 = 10
        grass2 = 11
        stone1 = 12
        stone2 = 13
        water1 = 14
        stonefloor1 = 15

        [decorations]
        grass_patch = 20
        door_sheet = 21
        trapdoor_sheet = 22
        "#,
    )
    .expect("config parses");
    assert_eq!(config.edge_policy, EdgePolicy::Strict);

    let map = generate_map(config, 99, MapKind::Overworld).expect("generation succeeds");
    assert_eq!((map.grid.width(), map.grid.height()), (30, 20));
    for cell in map.grid.cells() {
        assert!((10..=14).contains(&cell.tile_id), "unexpected tile {}", cell.tile_id);
        assert!([0, 20, 21].contains(&cell.data0), "unexpected decoration {}", cell.data0);
    }
}

#[test]
fn test_smoke_dungeon_with_distinct_door_sides() {
    let config = GeneratorConfig {
        width: 9,
        height: 7,
        door_sides: DoorSides::Distinct,
        ..GeneratorConfig::default()
    };
    let mut saw_right = false;
    for seed in 0..64 {
        let map = generate_map(config.clone(), seed, MapKind::Dungeon).expect("valid room");
        let exit = map.stats.exit.expect("dungeon has an exit");
        saw_right |= exit.side == Side::Right;
        if exit.side == Side::Right {
            assert_eq!(exit.pos.x, 8);
        }
        let items = map.grid.cells().iter().filter(|cell| cell.data1 == ITEM_MARKER).count();
        assert!(items <= 3);
    }
    assert!(saw_right, "distinct sides should eventually place a door on the right wall");
}

#[test]
fn test_smoke_single_cell_overworld() {
    let config = GeneratorConfig { width: 1, height: 1, ..GeneratorConfig::default() };
    let map = generate_map(config, 5, MapKind::Overworld).expect("1x1 generates");
    let tile = map.grid.tile_id(0, 0).expect("in bounds");
    assert_ne!(tile, UNSET_TILE);
    let ids = TileIds::default();
    assert!(ids.terrain.contains(&tile) || tile == ids.water);
}

#[test]
fn test_smoke_zero_height_is_a_config_error() {
    let config = GeneratorConfig { height: 0, ..GeneratorConfig::default() };
    assert_eq!(
        generate_map(config, 1, MapKind::Overworld),
        Err(GenError::Config(ConfigError::ZeroDimension { width: 16, height: 0 }))
    );
}

#[test]
fn test_smoke_id_tables_that_alias_the_empty_cell_are_rejected() {
    let text = r#"
        width = 3
        height = 3

        [decorations]
        grass_patch = 1
        door_sheet = 2
        trapdoor_sheet = 0
        "#;
    let config = GeneratorConfig::from_toml_str(text).expect("config parses");
    assert_eq!(
        generate_map(config, 4, MapKind::Dungeon),
        Err(GenError::Config(ConfigError::ZeroDecorationId("trapdoor_sheet")))
    );

    let config = GeneratorConfig::from_toml_str("items = [0, 2]").expect("config parses");
    assert_eq!(
        generate_map(config, 4, MapKind::Dungeon),
        Err(GenError::Config(ConfigError::ZeroItemId { index: 0 }))
    );
}

#[test]
fn test_smoke_shared_tile_ids_are_rejected_before_generation() {
    let mut config = GeneratorConfig::default();
    config.tiles.insert("stone1".to_string(), 0);
    config.tiles.insert("water1".to_string(), 1);
    assert_eq!(
        generate_map(config, 4, MapKind::Overworld),
        Err(GenError::Config(ConfigError::DuplicateTileId {
            name: "stone1",
            other: "grass1",
            id: 0
        }))
    );
}

#[test]
fn test_smoke_small_dungeon_keeps_its_trapdoor() {
    let ids = TileIds::default();
    for seed in 0..64 {
        let config = GeneratorConfig { width: 3, height: 3, ..GeneratorConfig::default() };
        let map = generate_map(config, seed, MapKind::Dungeon).expect("3x3 generates");
        let centre = map.grid.cell(1, 1).expect("in bounds");
        assert_eq!(centre.data0, ids.trapdoor);
        assert_ne!(centre.data1, ITEM_MARKER);
    }
}

#[test]
fn test_smoke_oversized_grid_is_a_config_error() {
    let config = GeneratorConfig { width: usize::MAX, height: 2, ..GeneratorConfig::default() };
    assert!(matches!(
        generate_map(config, 1, MapKind::Overworld),
        Err(GenError::Config(ConfigError::GridTooLarge { .. }))
    ));
}

#[test]
fn test_smoke_snapshot_serializes_to_json() {
    let map = generate_map(GeneratorConfig::default(), 3, MapKind::Dungeon).expect("valid room");
    let json = serde_json::to_value(map.grid.snapshot()).expect("snapshot serializes");
    assert_eq!(json["width"], 16);
    assert_eq!(json["cells"].as_array().map(Vec::len), Some(256));
    assert_eq!(json["cells"][0]["data1"], 1);
}

#[test]
fn test_smoke_grass_decoration_rate_over_large_map() {
    // All-grass terrain and no water isolates the grass decoration roll.
    let mut config = GeneratorConfig { width: 120, height: 120, ..GeneratorConfig::default() };
    config.adjacency.0 = [[1.0, 0.0, 0.0, 0.0]; 4];
    config.water.threshold = -2.0;

    let map = generate_map(config, 404, MapKind::Overworld).expect("generation succeeds");
    let ids = TileIds::default();
    let grass = map.grid.cells().iter().filter(|cell| ids.is_grass(cell.tile_id)).count();
    let patches = map.grid.cells().iter().filter(|cell| cell.data0 == ids.grass_patch).count();
    let rate = patches as f64 / grass as f64;
    assert!((0.27..0.33).contains(&rate), "grass decoration rate {rate}");
}
