use nalgebra::Vector3;

use super::SampleGenerator;

/// Random samples in `<0;max>`
///
/// Every sample is derived from the seed and its coordinates,
/// so the result does not depend on generation order.
pub struct NoiseGenerator {
    max: u16,
    seed: u64,
}

impl NoiseGenerator {
    pub fn new(max: u16, seed: u64) -> NoiseGenerator {
        NoiseGenerator { max, seed }
    }
}

impl SampleGenerator for NoiseGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u16 {
        let key = (coords.x as u64) | (coords.y as u64) << 16 | (coords.z as u64) << 32;
        let rng = fastrand::Rng::new();
        rng.seed(self.seed ^ key.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        rng.u16(0..=self.max)
    }
}
