//! Deterministic random sources for pinning down draw-order behaviour in tests.

use super::rng::RandomSource;

/// Returns the largest value for every bounded draw, which leaves Fisher-Yates
/// shuffles as the identity permutation, and a fixed value for unit draws.
pub(crate) struct MaxDrawSource {
    pub(crate) unit: f64,
    pub(crate) unit_calls: usize,
    pub(crate) bounded_calls: usize,
}

impl MaxDrawSource {
    pub(crate) fn new(unit: f64) -> Self {
        Self { unit, unit_calls: 0, bounded_calls: 0 }
    }
}

impl RandomSource for MaxDrawSource {
    fn next_unit(&mut self) -> f64 {
        self.unit_calls += 1;
        self.unit
    }

    fn below(&mut self, bound: usize) -> usize {
        self.bounded_calls += 1;
        bound - 1
    }
}

/// Replays a fixed script of unit draws, then repeats the last one.
pub(crate) struct ScriptedUnits {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedUnits {
    pub(crate) fn new(values: &[f64]) -> Self {
        Self { values: values.to_vec(), cursor: 0 }
    }
}

impl RandomSource for ScriptedUnits {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor.min(self.values.len() - 1)];
        self.cursor += 1;
        value
    }

    fn below(&mut self, _bound: usize) -> usize {
        0
    }
}
