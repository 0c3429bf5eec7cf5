use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Injectable randomness seam for the sampling loop. Production code uses
/// [`EntropyScatter`]; tests substitute scripted sequences for reproducible
/// sampling verification.
pub trait ScatterSource {
    /// Uniform draw from `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Default scatter source backed by a fast non-cryptographic generator.
#[derive(Debug, Clone)]
pub struct EntropyScatter {
    rng: SmallRng,
}

impl EntropyScatter {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyScatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterSource for EntropyScatter {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen()
    }
}

/// One random offset inside the spray disc: `angle ~ U(0, 2pi)`,
/// `reach ~ U(0, radius)`. Reach is linear in the radius, not area-uniform,
/// so samples cluster toward the center. Components truncate toward zero,
/// which keeps the offset norm within `radius`.
pub(super) fn scatter_offset<S: ScatterSource + ?Sized>(radius: u32, source: &mut S) -> (i32, i32) {
    let angle = source.next_unit() * std::f64::consts::TAU;
    let reach = source.next_unit() * f64::from(radius);
    ((reach * angle.cos()) as i32, (reach * angle.sin()) as i32)
}

#[cfg(test)]
pub(crate) struct ScriptedScatter {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedScatter {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

#[cfg(test)]
impl ScatterSource for ScriptedScatter {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
