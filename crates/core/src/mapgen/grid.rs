//! Tile storage primitives shared by the adjacency sweep, feature passes, and room stencils.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::config::cell_count;
use crate::error::GenError;
use crate::types::{Cell, Pos, UNSET_TILE};

/// Row-major grid of cells. Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Serializable view of a grid, used for JSON output.
#[derive(Clone, Debug, Serialize)]
pub struct GridSnapshot<'a> {
    pub width: usize,
    pub height: usize,
    pub cells: &'a [Cell],
}

impl TileGrid {
    /// Allocates a grid with every cell set to [`UNSET_TILE`].
    pub fn new(width: usize, height: usize) -> Result<Self, GenError> {
        let len = cell_count(width, height)?;
        Ok(Self { width, height, cells: vec![Cell::default(); len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == self.width - 1 || pos.y == self.height - 1
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, GenError> {
        let index = self.index(x, y)?;
        Ok(self.cells[index])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn tile_id(&self, x: usize, y: usize) -> Result<u8, GenError> {
        Ok(self.cell(x, y)?.tile_id)
    }

    pub fn set_tile_id(&mut self, x: usize, y: usize, tile_id: u8) -> Result<(), GenError> {
        self.cell_mut(x, y)?.tile_id = tile_id;
        Ok(())
    }

    pub fn data0(&self, x: usize, y: usize) -> Result<u8, GenError> {
        Ok(self.cell(x, y)?.data0)
    }

    pub fn set_data0(&mut self, x: usize, y: usize, value: u8) -> Result<(), GenError> {
        self.cell_mut(x, y)?.data0 = value;
        Ok(())
    }

    pub fn data1(&self, x: usize, y: usize) -> Result<u8, GenError> {
        Ok(self.cell(x, y)?.data1)
    }

    pub fn set_data1(&mut self, x: usize, y: usize, value: u8) -> Result<(), GenError> {
        self.cell_mut(x, y)?.data1 = value;
        Ok(())
    }

    pub fn solid(&self, x: usize, y: usize) -> Result<bool, GenError> {
        Ok(self.cell(x, y)?.solid)
    }

    pub fn set_solid(&mut self, x: usize, y: usize, solid: bool) -> Result<(), GenError> {
        self.cell_mut(x, y)?.solid = solid;
        Ok(())
    }

    pub fn deco_under(&self, x: usize, y: usize) -> Result<bool, GenError> {
        Ok(self.cell(x, y)?.deco_under)
    }

    pub fn set_deco_under(&mut self, x: usize, y: usize, under: bool) -> Result<(), GenError> {
        self.cell_mut(x, y)?.deco_under = under;
        Ok(())
    }

    pub fn is_unset(&self, x: usize, y: usize) -> Result<bool, GenError> {
        Ok(self.tile_id(x, y)? == UNSET_TILE)
    }

    pub fn count_unset(&self) -> usize {
        self.cells.iter().filter(|cell| cell.tile_id == UNSET_TILE).count()
    }

    /// Every position in sweep order: `y` outer, `x` inner.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Pos { y, x }))
    }

    pub fn snapshot(&self) -> GridSnapshot<'_> {
        GridSnapshot { width: self.width, height: self.height, cells: &self.cells }
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len() * 4);
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(cell.tile_id);
            bytes.push(cell.data0);
            bytes.push(cell.data1);
            bytes.push(u8::from(cell.solid) | (u8::from(cell.deco_under) << 1));
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, GenError> {
        let index = self.index(x, y)?;
        Ok(&mut self.cells[index])
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GenError> {
        if !self.in_bounds(x, y) {
            return Err(GenError::OutOfRange { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }
}
