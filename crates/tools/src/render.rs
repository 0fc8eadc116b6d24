//! Text renderings of a generated map for the terminal.

use serde::Serialize;
use tilegen::{
    Cell, GeneratedMap, GridSnapshot, ITEM_MARKER, MapKind, MapStats, TileIds, UNSET_TILE,
};

/// Picks the glyph for one cell. Decorations win over the tile underneath.
pub fn glyph(cell: &Cell, ids: &TileIds) -> char {
    if cell.data1 == ITEM_MARKER {
        return '!';
    }
    if cell.data0 != 0 {
        if cell.data0 == ids.trapdoor && cell.deco_under && cell.tile_id == ids.stone_floor {
            return '>';
        }
        if cell.data0 == ids.door && cell.deco_under {
            return '+';
        }
        if cell.data0 == ids.grass_patch && ids.is_grass(cell.tile_id) {
            return '"';
        }
    }
    match cell.tile_id {
        UNSET_TILE => ' ',
        id if id == ids.water => '~',
        id if id == ids.stone_floor => '_',
        id => match ids.terrain_index(id) {
            Some(0) => '.',
            Some(1) => ',',
            Some(2) => '#',
            Some(3) => '%',
            _ => '?',
        },
    }
}

pub fn ascii(map: &GeneratedMap, ids: &TileIds) -> String {
    let width = map.grid.width();
    let mut out = String::with_capacity((width + 1) * map.grid.height());
    for row in map.grid.cells().chunks(width) {
        out.extend(row.iter().map(|cell| glyph(cell, ids)));
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonMap<'a> {
    kind: MapKind,
    seed: u64,
    fingerprint: String,
    stats: &'a MapStats,
    grid: GridSnapshot<'a>,
}

pub fn json(map: &GeneratedMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonMap {
        kind: map.kind,
        seed: map.seed,
        fingerprint: format!("{:016x}", map.fingerprint()),
        stats: &map.stats,
        grid: map.grid.snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegen::{GeneratorConfig, generate_map};

    #[test]
    fn plain_terrain_maps_to_fixed_glyphs() {
        let ids = TileIds::default();
        let cell = |tile_id| Cell { tile_id, ..Cell::default() };
        assert_eq!(glyph(&cell(ids.terrain[0]), &ids), '.');
        assert_eq!(glyph(&cell(ids.terrain[1]), &ids), ',');
        assert_eq!(glyph(&cell(ids.wall()), &ids), '#');
        assert_eq!(glyph(&cell(ids.terrain[3]), &ids), '%');
        assert_eq!(glyph(&cell(ids.water), &ids), '~');
        assert_eq!(glyph(&cell(ids.stone_floor), &ids), '_');
        assert_eq!(glyph(&Cell::default(), &ids), ' ');
        assert_eq!(glyph(&cell(200), &ids), '?');
    }

    #[test]
    fn decorations_take_priority_over_tiles() {
        let ids = TileIds::default();
        let patch = Cell { tile_id: ids.terrain[1], data0: ids.grass_patch, ..Cell::default() };
        let door =
            Cell { tile_id: ids.wall(), data0: ids.door, deco_under: true, ..Cell::default() };
        let trapdoor = Cell {
            tile_id: ids.stone_floor,
            data0: ids.trapdoor,
            deco_under: true,
            ..Cell::default()
        };
        let item =
            Cell { tile_id: ids.stone_floor, data0: 2, data1: ITEM_MARKER, ..Cell::default() };
        assert_eq!(glyph(&patch, &ids), '"');
        assert_eq!(glyph(&door, &ids), '+');
        assert_eq!(glyph(&trapdoor, &ids), '>');
        assert_eq!(glyph(&item, &ids), '!');
    }

    #[test]
    fn dungeon_ascii_has_one_line_per_row_and_a_walled_border() {
        let config = GeneratorConfig { width: 9, height: 6, ..GeneratorConfig::default() };
        let ids = config.validate().expect("defaults validate");
        let map = generate_map(config, 77, MapKind::Dungeon).expect("valid config");
        let text = ascii(&map, &ids);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|line| line.chars().count() == 9));
        assert_eq!(text.matches('+').count(), 1);
        assert_eq!(text.matches('>').count(), 1);
        for corner in [&lines[0][..1], &lines[0][8..], &lines[5][..1], &lines[5][8..]] {
            assert_eq!(corner, "#");
        }
    }

    #[test]
    fn json_output_carries_seed_kind_and_cells() {
        let config = GeneratorConfig { width: 4, height: 3, ..GeneratorConfig::default() };
        let map = generate_map(config, 5, MapKind::Overworld).expect("valid config");
        let value: serde_json::Value =
            serde_json::from_str(&json(&map).expect("serializable")).expect("valid json");

        assert_eq!(value["seed"], 5);
        assert_eq!(value["kind"], "Overworld");
        assert_eq!(value["grid"]["cells"].as_array().map(Vec::len), Some(12));
        assert_eq!(value["fingerprint"].as_str().map(str::len), Some(16));
    }
}
