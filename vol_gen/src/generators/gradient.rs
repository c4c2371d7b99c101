use nalgebra::Vector3;

use super::SampleGenerator;

/// Samples grow linearly with depth, from zero at `z = 0` up to `sample` at the back
pub struct GradientGenerator {
    depth: u32,
    sample: u16,
}

impl GradientGenerator {
    pub fn new(dims: Vector3<u32>, sample: u16) -> GradientGenerator {
        GradientGenerator {
            depth: dims.z,
            sample,
        }
    }
}

impl SampleGenerator for GradientGenerator {
    fn sample_at(&self, coords: Vector3<u32>) -> u16 {
        if self.depth <= 1 {
            return self.sample;
        }
        let t = coords.z as f32 / (self.depth - 1) as f32;
        (t * self.sample as f32).round() as u16
    }
}
