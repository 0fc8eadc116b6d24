//! Seeded coherent noise field used to place water bodies.

use noise::{NoiseFn, Perlin};

use crate::config::WaterSettings;

pub struct WaterNoise {
    perlin: Perlin,
    coordinate_scale: f64,
    frequency: f64,
}

impl WaterNoise {
    pub fn new(seed: u32, settings: &WaterSettings) -> Self {
        Self {
            perlin: Perlin::new(seed),
            coordinate_scale: settings.coordinate_scale,
            frequency: settings.frequency,
        }
    }

    /// Field value at cell `(x, y)`, roughly in `[-1, 1]`.
    ///
    /// Cells that map onto integer noise coordinates sit on the Perlin lattice and
    /// sample 0 for every seed. With the default settings that is every cell whose
    /// `x` and `y` are both multiples of 10.
    pub fn sample(&self, x: usize, y: usize) -> f64 {
        let step = self.coordinate_scale * self.frequency;
        self.perlin.get([x as f64 * step, y as f64 * step])
    }
}
